//! Init command implementation.

use anyhow::{Context, Result};
use reflist_core::config::{DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_YAML};
use std::fs;
use std::path::Path;

/// Write a default reflist.yml unless one already exists
pub fn init_config(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    let config_path = root.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() {
        println!("{} already exists at {:?}", DEFAULT_CONFIG_FILE, config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG_YAML)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}
