//! Template registry: reference types, their input schemas and formatters.
//!
//! Each reference type is a plain data value (`TypeSpec`) pairing an ordered
//! field schema with a pure formatting function. The registry is built once
//! on first use and never modified afterwards; its order is the order types
//! are offered to users.

mod books;
mod institutional;
mod media;
mod misc;
mod periodicals;

use crate::normalize::{normalize, FieldRole};
use once_cell::sync::Lazy;
use reflist_types::FieldValues;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown reference type: {0}")]
    UnknownTypeKey(String),

    #[error("Missing required field '{field}' for {type_key}")]
    MissingRequiredField { type_key: String, field: String },

    #[error("Field '{field}' is not part of the {type_key} template")]
    UnknownField { type_key: String, field: String },

    #[error("Invalid value '{value}' for '{field}' (expected one of: {expected})")]
    InvalidOption {
        field: String,
        value: String,
        expected: String,
    },
}

/// Input control for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Single choice from the listed display options.
    Select(&'static [&'static str]),
}

/// One input of a reference type's form.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    /// Example text shown beneath the input.
    pub hint: Option<&'static str>,
    /// Longer advice attached to the label.
    pub tooltip: Option<&'static str>,
}

impl FieldSpec {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
            kind: FieldKind::Text,
            hint: None,
            tooltip: None,
        }
    }

    pub fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            kind: FieldKind::Select(options),
            ..Self::text(name, label)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn role(&self) -> FieldRole {
        FieldRole::of(self.name)
    }

    /// Display options of a select field; empty for text fields.
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Select(options) => options,
            FieldKind::Text => &[],
        }
    }

    /// Stored (lowercase) form of a select choice, matched case-insensitively.
    fn canonical_option(&self, value: &str) -> Option<String> {
        let wanted = value.to_lowercase();
        self.options()
            .iter()
            .map(|opt| opt.to_lowercase())
            .find(|opt| *opt == wanted)
    }
}

/// Read-only view of a type's values handed to its formatter.
pub struct Fields<'a> {
    spec: &'a TypeSpec,
    values: &'a FieldValues,
}

impl<'a> Fields<'a> {
    /// Value of a field declared by the type; `""` when unset.
    pub fn get(&self, name: &str) -> &'a str {
        debug_assert!(
            self.spec.field(name).is_some(),
            "{} formatter reads undeclared field '{}'",
            self.spec.key,
            name
        );
        self.values.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Display label of a select field's stored choice.
    pub fn choice_label(&self, name: &str) -> &'a str {
        let value = self.get(name);
        self.spec
            .field(name)
            .and_then(|field| {
                field
                    .options()
                    .iter()
                    .copied()
                    .find(|opt| opt.eq_ignore_ascii_case(value))
            })
            .unwrap_or(value)
    }
}

type FormatFn = fn(&Fields<'_>) -> String;

/// A reference type: schema plus formatting rule.
pub struct TypeSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub info: &'static str,
    pub fields: Vec<FieldSpec>,
    format: FormatFn,
}

impl std::fmt::Debug for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeSpec")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("fields", &self.fields.len())
            .finish()
    }
}

impl TypeSpec {
    pub(crate) fn new(
        key: &'static str,
        title: &'static str,
        info: &'static str,
        fields: Vec<FieldSpec>,
        format: FormatFn,
    ) -> Self {
        Self {
            key,
            title,
            info,
            fields,
            format,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Clean raw form input for this type.
    ///
    /// Every declared field appears in the result. Select values are stored in
    /// lowercase; names the type does not declare are rejected.
    pub fn normalize(&self, raw: &FieldValues) -> Result<FieldValues, FormatError> {
        if let Some(unknown) = raw.names().find(|name| self.field(name).is_none()) {
            return Err(FormatError::UnknownField {
                type_key: self.key.to_string(),
                field: unknown.to_string(),
            });
        }

        let complete: FieldValues = self
            .fields
            .iter()
            .map(|f| (f.name, raw.get(f.name)))
            .collect();
        let mut values = normalize(&complete, FieldRole::of);

        for field in &self.fields {
            let value = values.get(field.name);
            if value.is_empty() || field.options().is_empty() {
                continue;
            }
            let canonical =
                field
                    .canonical_option(value)
                    .ok_or_else(|| FormatError::InvalidOption {
                        field: field.name.to_string(),
                        value: value.to_string(),
                        expected: field.options().join(", "),
                    })?;
            values.insert(field.name, canonical);
        }

        debug!(type_key = self.key, fields = values.len(), "normalized input");
        Ok(values)
    }

    /// Check that every required field has a value.
    pub fn validate(&self, values: &FieldValues) -> Result<(), FormatError> {
        match self
            .fields
            .iter()
            .find(|f| f.required && values.get(f.name).is_empty())
        {
            Some(missing) => Err(FormatError::MissingRequiredField {
                type_key: self.key.to_string(),
                field: missing.name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Render normalized values into the citation string.
    pub fn render(&self, values: &FieldValues) -> Result<String, FormatError> {
        self.validate(values)?;
        Ok((self.format)(&Fields { spec: self, values }))
    }
}

/// Ordered, immutable collection of reference types.
pub struct Registry {
    types: Vec<TypeSpec>,
    index: HashMap<&'static str, usize>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::builtin);

/// The process-wide registry of built-in reference types.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    fn builtin() -> Self {
        let types: Vec<TypeSpec> = books::types()
            .into_iter()
            .chain(periodicals::types())
            .chain(media::types())
            .chain(institutional::types())
            .chain(misc::types())
            .collect();
        Self::from_types(types)
    }

    fn from_types(types: Vec<TypeSpec>) -> Self {
        let index = types
            .iter()
            .enumerate()
            .map(|(idx, spec)| (spec.key, idx))
            .collect::<HashMap<_, _>>();
        debug_assert_eq!(index.len(), types.len(), "duplicate type keys");
        Self { types, index }
    }

    pub fn get(&self, key: &str) -> Result<&TypeSpec, FormatError> {
        self.index
            .get(key)
            .map(|&idx| &self.types[idx])
            .ok_or_else(|| FormatError::UnknownTypeKey(key.to_string()))
    }

    /// `(key, title)` pairs in registry order.
    pub fn list(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.types.iter().map(|t| (t.key, t.title))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeSpec> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests;
