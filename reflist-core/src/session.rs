//! Interactive state: which type's form is open and which entry, if any, it edits.

use crate::kv::KeyValueStore;
use crate::registry::{registry, FormatError, TypeSpec};
use crate::store::{ReferenceStore, StoreError};
use reflist_types::{EntryId, FieldValues};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No reference type selected")]
    NoTypeSelected,

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One input as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Present only while hints are shown.
    pub hint: Option<&'static str>,
    pub tooltip: Option<&'static str>,
    /// Choices of a select field; empty for text inputs.
    pub options: &'static [&'static str],
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub type_key: &'static str,
    /// `Edit: <title>` while an entry is being edited.
    pub title: String,
    pub info: &'static str,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Default)]
pub struct Session {
    current: Option<&'static TypeSpec>,
    editing: Option<EntryId>,
    prefill: FieldValues,
    show_hints: bool,
}

impl Session {
    pub fn new(show_hints: bool) -> Self {
        Self {
            show_hints,
            ..Self::default()
        }
    }

    /// Open an empty form for `key`, abandoning any edit in progress.
    pub fn select_type(&mut self, key: &str) -> Result<&'static TypeSpec, SessionError> {
        let spec = registry().get(key)?;
        self.current = Some(spec);
        self.editing = None;
        self.prefill = FieldValues::new();
        Ok(spec)
    }

    pub fn current_type(&self) -> Option<&'static TypeSpec> {
        self.current
    }

    pub fn editing(&self) -> Option<&EntryId> {
        self.editing.as_ref()
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    pub fn set_show_hints(&mut self, show: bool) {
        self.show_hints = show;
    }

    /// Open the entry's type with its stored values; returns those values.
    pub fn begin_edit<K: KeyValueStore>(
        &mut self,
        store: &ReferenceStore<K>,
        id: &EntryId,
    ) -> Result<&FieldValues, SessionError> {
        let entry = store
            .get(id)
            .ok_or_else(|| StoreError::UnknownEntry(id.to_string()))?;
        self.current = Some(registry().get(&entry.type_key)?);
        self.editing = Some(id.clone());
        self.prefill = entry.data.clone();
        debug!(id = %id.short(), type_key = %entry.type_key, "editing reference");
        Ok(&self.prefill)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.prefill = FieldValues::new();
    }

    pub fn form(&self) -> Result<Form, SessionError> {
        let spec = self.current.ok_or(SessionError::NoTypeSelected)?;
        let title = match self.editing {
            Some(_) => format!("Edit: {}", spec.title),
            None => spec.title.to_string(),
        };
        let fields = spec
            .fields
            .iter()
            .map(|field| FormField {
                name: field.name,
                label: field.label,
                required: field.required,
                hint: field.hint.filter(|_| self.show_hints),
                tooltip: field.tooltip,
                options: field.options(),
                value: self.prefill.get(field.name).to_string(),
            })
            .collect();
        Ok(Form {
            type_key: spec.key,
            title,
            info: spec.info,
            fields,
        })
    }

    /// Add the form's values as a new entry, or replace the entry being
    /// edited. The edit target is cleared only on success.
    pub fn submit<K: KeyValueStore>(
        &mut self,
        store: &mut ReferenceStore<K>,
        raw: &FieldValues,
    ) -> Result<EntryId, SessionError> {
        let spec = self.current.ok_or(SessionError::NoTypeSelected)?;
        let id = match &self.editing {
            Some(id) => {
                store.update(id, spec.key, raw)?;
                id.clone()
            }
            None => store.add(spec.key, raw)?,
        };
        self.cancel_edit();
        Ok(id)
    }
}
