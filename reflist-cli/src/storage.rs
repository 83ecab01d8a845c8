//! Opening the configured reference store.

use anyhow::{Context, Result};
use reflist_core::{Config, FileStore, ReferenceStore};
use std::path::Path;

/// Load config (defaults if the file is absent) and the persisted reference list.
pub fn open_store(config_path: &Path) -> Result<(Config, ReferenceStore<FileStore>)> {
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;
    let dir = config.storage_dir();
    let store = ReferenceStore::open(
        FileStore::new(&dir),
        config.storage.key.clone(),
        config.retention(),
    )
    .with_context(|| format!("Failed to load references from {:?}", dir))?;
    tracing::debug!(entries = store.len(), "opened reference store");
    Ok((config, store))
}
