//! # reflist-core
//!
//! Core library for the reflist Harvard reference builder.
//!
//! This crate provides the citation template registry, the field normalizer,
//! the persisted reference list and its plain-text export.

pub mod bibliography;
pub mod config;
pub mod export;
pub mod format;
pub mod kv;
pub mod normalize;
pub mod registry;
pub mod session;
pub mod store;

pub use bibliography::{import_biblatex, ImportError, ImportReport};
pub use config::{Config, ConfigError};
pub use export::{clipboard_fragment, export_filename, plain_text};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use registry::{registry, FieldKind, FieldSpec, FormatError, Registry, TypeSpec};
pub use reflist_types::{EntryId, FieldValues};
pub use session::{Form, FormField, Session, SessionError};
pub use store::{ReferenceEntry, ReferenceStore, StoreError};

/// `(key, title)` of every reference type, in presentation order.
pub fn list_types() -> Vec<(&'static str, &'static str)> {
    registry().list().collect()
}

pub fn get_type_spec(key: &str) -> Result<&'static TypeSpec, FormatError> {
    registry().get(key)
}

/// Clean raw input for `type_key`.
pub fn normalize_input(type_key: &str, raw: &FieldValues) -> Result<FieldValues, FormatError> {
    get_type_spec(type_key)?.normalize(raw)
}

/// Render already-normalized values; fails if a required field is empty.
pub fn format_reference(type_key: &str, values: &FieldValues) -> Result<String, FormatError> {
    get_type_spec(type_key)?.render(values)
}
