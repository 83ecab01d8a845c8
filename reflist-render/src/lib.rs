//! # reflist-render
//!
//! HTML rendering of reference lists using Askama.
//!
//! Citations already carry their own markup (`<em>`, `<sup>`, escaped URL
//! brackets), so they are inserted into the document unescaped.

use askama::Template;
use reflist_core::ReferenceEntry;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),
}

/// Standalone HTML document holding one paragraph per citation.
#[derive(Template)]
#[template(path = "clipboard.html")]
pub struct ClipboardTemplate {
    pub title: String,
    pub entries: Vec<String>,
}

impl ClipboardTemplate {
    pub fn new(title: impl Into<String>, entries: &[&ReferenceEntry]) -> Self {
        Self {
            title: title.into(),
            entries: entries.iter().map(|entry| entry.text.clone()).collect(),
        }
    }
}

/// Render `entries` (already in display order) as a rich-text clipboard document.
pub fn render_clipboard_document(
    title: &str,
    entries: &[&ReferenceEntry],
) -> Result<String, RenderError> {
    Ok(ClipboardTemplate::new(title, entries).render()?)
}
