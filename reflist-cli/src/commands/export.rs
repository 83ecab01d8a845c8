//! Plain-text export and HTML clipboard output.

use crate::storage::open_store;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use reflist_core::{clipboard_fragment, export_filename, plain_text};
use reflist_render::render_clipboard_document;
use std::fs;
use std::path::Path;

/// Write the sorted list as plain text, one reference per paragraph
pub fn export_text(config_path: &Path, stdout: bool, output: Option<&Path>) -> Result<()> {
    let (config, store) = open_store(config_path)?;
    let entries = store.list();
    if entries.is_empty() {
        bail!("No references to export");
    }
    let texts: Vec<&str> = entries.iter().map(|entry| entry.text.as_str()).collect();
    let text = plain_text(&texts);

    if stdout {
        println!("{}", text);
        return Ok(());
    }

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => config
            .export_dir()
            .join(export_filename(&config.export.prefix, Utc::now())),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export dir {:?}", parent))?;
    }
    fs::write(&path, text).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Exported {} reference(s) to {:?}", entries.len(), path);
    Ok(())
}

/// Print the sorted list as HTML paragraphs, or as a full document
pub fn copy_html(config_path: &Path, document: bool) -> Result<()> {
    let (_, store) = open_store(config_path)?;
    let entries = store.list();
    if entries.is_empty() {
        bail!("No references to copy");
    }

    let html = if document {
        render_clipboard_document("Reference List", &entries)
            .context("Failed to render clipboard document")?
    } else {
        let texts: Vec<&str> = entries.iter().map(|entry| entry.text.as_str()).collect();
        clipboard_fragment(&texts)
    };
    println!("{}", html);
    tracing::info!(count = entries.len(), "copied references");
    Ok(())
}
