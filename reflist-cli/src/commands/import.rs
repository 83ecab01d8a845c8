//! BibLaTeX import command.

use crate::storage::open_store;
use anyhow::{Context, Result};
use chrono::Utc;
use reflist_core::import_biblatex;
use std::fs;
use std::path::Path;

/// Add every mappable entry of a .bib file; report the ones skipped
pub fn import_bibliography(config_path: &Path, file: &Path) -> Result<()> {
    let source = fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))?;
    let report = import_biblatex(&source, Utc::now())
        .with_context(|| format!("Failed to import {:?}", file))?;

    let (_, mut store) = open_store(config_path)?;
    let ids = store
        .import(report.drafts())
        .context("Failed to store imported references")?;

    for (id, entry) in ids.iter().zip(&report.imported) {
        println!("Imported {} as {} ({})", entry.key, id.short(), entry.type_key);
    }
    for skipped in &report.skipped {
        println!("Skipped {}: {}", skipped.key, skipped.reason);
    }
    println!(
        "{} imported, {} skipped",
        report.imported.len(),
        report.skipped.len()
    );
    Ok(())
}
