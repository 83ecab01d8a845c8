//! Adding, editing, removing and listing references.

use crate::commands::field_values;
use crate::storage::open_store;
use anyhow::{bail, Context, Result};
use reflist_core::export::to_plain;
use reflist_core::Session;
use std::path::Path;

/// Render a new reference from `fields` and store it
pub fn add_reference(
    config_path: &Path,
    type_key: &str,
    fields: Vec<(String, String)>,
) -> Result<()> {
    let (config, mut store) = open_store(config_path)?;
    let mut session = Session::new(config.show_hints);
    session.select_type(type_key)?;
    let id = session
        .submit(&mut store, &field_values(fields))
        .with_context(|| format!("Failed to add {} reference", type_key))?;

    if let Some(entry) = store.get(&id) {
        println!("Added {}: {}", id.short(), to_plain(&entry.text));
    }
    Ok(())
}

/// Re-render an existing reference with some of its fields replaced
pub fn edit_reference(config_path: &Path, id: &str, fields: Vec<(String, String)>) -> Result<()> {
    let (config, mut store) = open_store(config_path)?;
    let id = store.resolve(id)?;
    let mut session = Session::new(config.show_hints);
    let values = session.begin_edit(&store, &id)?.merged(&field_values(fields));
    session
        .submit(&mut store, &values)
        .with_context(|| format!("Failed to update reference {}", id.short()))?;

    if let Some(entry) = store.get(&id) {
        println!("Updated {}: {}", id.short(), to_plain(&entry.text));
    }
    Ok(())
}

pub fn remove_reference(config_path: &Path, id: &str) -> Result<()> {
    let (_, mut store) = open_store(config_path)?;
    let id = store.resolve(id)?;
    let removed = store.remove(&id)?;
    println!("Removed {}: {}", id.short(), to_plain(&removed.text));
    Ok(())
}

pub fn clear_references(config_path: &Path, yes: bool) -> Result<()> {
    let (_, mut store) = open_store(config_path)?;
    if !yes {
        bail!(
            "Refusing to clear {} reference(s) without --yes; this cannot be undone",
            store.len()
        );
    }
    let count = store.len();
    store.clear()?;
    println!("Cleared {} reference(s)", count);
    Ok(())
}

/// Print the sorted reference list
pub fn list_references(config_path: &Path, json: bool) -> Result<()> {
    let (_, store) = open_store(config_path)?;
    let entries = store.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No references added yet.");
        return Ok(());
    }

    println!("Reference list ({})", entries.len());
    for entry in entries {
        println!("{}  {}", entry.id.short(), to_plain(&entry.text));
    }
    Ok(())
}
