//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "reflist.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the reflist.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    #[serde(default = "default_true")]
    pub show_hints: bool,

    #[serde(default)]
    pub export: ExportConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_retention_days() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,

    /// Key the reference array is persisted under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".reflist")
}

fn default_storage_key() -> String {
    String::from("iie_references")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_export_prefix")]
    pub prefix: String,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_export_prefix() -> String {
    String::from("ReferenceList")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
            prefix: default_export_prefix(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            retention_days: default_retention_days(),
            show_hints: true,
            export: ExportConfig::default(),
            config_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Load the file if it exists; otherwise defaults anchored at `path`'s directory.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(Self {
            config_path: Some(path.to_path_buf()),
            ..Self::default()
        })
    }

    /// Directory of the file-backed store, resolved relative to config file
    pub fn storage_dir(&self) -> PathBuf {
        self.resolve_path(&self.storage.dir)
    }

    /// Directory plain-text exports are written to
    pub fn export_dir(&self) -> PathBuf {
        self.resolve_path(&self.export.dir)
    }

    pub fn retention(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.retention_days))
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }
}

/// Commented starting config written by `reflist init`.
pub const DEFAULT_CONFIG_YAML: &str = "\
# reflist configuration

storage:
  # Directory holding the persisted reference list
  dir: .reflist
  key: iie_references

# Entries older than this many days are dropped when the list is loaded
retention_days: 30

# Show example text under each form field
show_hints: true

export:
  dir: .
  prefix: ReferenceList
";
