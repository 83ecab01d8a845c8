//! Reference type listing and form display.

use anyhow::{Context, Result};
use reflist_core::{Config, Session};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct TypeSummary {
    key: &'static str,
    title: &'static str,
}

/// Print every reference type in presentation order
pub fn list_types(json: bool) -> Result<()> {
    let types = reflist_core::list_types();
    if json {
        let summaries: Vec<TypeSummary> = types
            .into_iter()
            .map(|(key, title)| TypeSummary { key, title })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let width = types.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, title) in types {
        println!("{:<width$}  {}", key, title, width = width);
    }
    Ok(())
}

/// Print a type's form: its fields, which are required, and their hints
pub fn show_type(config_path: &Path, type_key: &str, no_hints: bool) -> Result<()> {
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;
    let mut session = Session::new(config.show_hints && !no_hints);
    session.select_type(type_key)?;
    let form = session.form()?;

    println!("{} ({})", form.title, form.type_key);
    println!("{}", form.info);
    println!();
    for field in &form.fields {
        let marker = if field.required { " *" } else { "" };
        println!("  {}{}  [{}]", field.label, marker, field.name);
        if !field.options.is_empty() {
            println!("      options: {}", field.options.join(", "));
        }
        if let Some(hint) = field.hint {
            println!("      {}", hint);
        }
        if let Some(tooltip) = field.tooltip {
            println!("      tip: {}", tooltip);
        }
    }
    Ok(())
}
