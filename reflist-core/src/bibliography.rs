//! Import of BibLaTeX bibliographies into reference drafts.

use crate::format::person;
use crate::registry::registry;
use chrono::{DateTime, Utc};
use hayagriva::types::{Date, EntryType, Person};
use hayagriva::{io::from_biblatex_str, Entry};
use reflist_types::FieldValues;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to parse bibliography: {0}")]
    Parse(String),
}

/// A bibliography entry mapped onto a reference type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedEntry {
    pub key: String,
    pub type_key: &'static str,
    pub values: FieldValues,
}

/// An entry that could not be mapped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub key: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<ImportedEntry>,
    pub skipped: Vec<SkippedEntry>,
}

impl ImportReport {
    /// `(type_key, values)` pairs ready for the store.
    pub fn drafts(&self) -> Vec<(String, FieldValues)> {
        self.imported
            .iter()
            .map(|entry| (entry.type_key.to_string(), entry.values.clone()))
            .collect()
    }
}

/// Parse `source` and map each entry; `today` stands in for missing visit dates.
pub fn import_biblatex(source: &str, today: DateTime<Utc>) -> Result<ImportReport, ImportError> {
    let library = from_biblatex_str(source).map_err(|errors| {
        ImportError::Parse(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        )
    })?;

    let mut report = ImportReport::default();
    for entry in library.iter() {
        let key = entry.key().to_string();
        match map_entry(entry, today).and_then(check) {
            Ok((type_key, values)) => {
                debug!(key = %key, type_key, "mapped bibliography entry");
                report.imported.push(ImportedEntry {
                    key,
                    type_key,
                    values,
                });
            }
            Err(reason) => {
                warn!(key = %key, "skipping bibliography entry: {}", reason);
                report.skipped.push(SkippedEntry { key, reason });
            }
        }
    }
    Ok(report)
}

type Mapped = (&'static str, FieldValues);

/// Reject drafts the template would refuse to render.
fn check((type_key, values): Mapped) -> Result<Mapped, String> {
    let spec = registry().get(type_key).map_err(|e| e.to_string())?;
    let normalized = spec.normalize(&values).map_err(|e| e.to_string())?;
    spec.validate(&normalized).map_err(|e| e.to_string())?;
    Ok((type_key, values))
}

fn map_entry(entry: &Entry, today: DateTime<Utc>) -> Result<Mapped, String> {
    match entry.entry_type() {
        EntryType::Book | EntryType::Anthology => map_book(entry),
        EntryType::Web => map_web(entry, today),
        other => Err(format!("unsupported entry type {:?}", other)),
    }
}

fn map_book(entry: &Entry) -> Result<Mapped, String> {
    let title = entry
        .title()
        .map(|t| t.to_string())
        .ok_or_else(|| "missing title".to_string())?;
    let mut values = FieldValues::new();
    values.insert("year", year(entry));
    values.insert("title", title);
    if let Some(publisher) = entry.publisher() {
        if let Some(name) = publisher.name() {
            values.insert("publisher", name.to_string());
        }
        if let Some(location) = publisher.location() {
            values.insert("city", location.to_string());
        }
    }

    let authors = entry.authors().unwrap_or_default();
    let type_key = match authors {
        [] => {
            let editors = entry.editors().unwrap_or_default();
            if editors.is_empty() {
                return Err("no authors or editors".to_string());
            }
            for (n, editor) in editors.iter().take(2).enumerate() {
                values.insert(format!("editor{}_surname", n + 1), surname(editor));
                values.insert(format!("editor{}_initials", n + 1), initials(editor));
            }
            "book-editor"
        }
        [only] => {
            values.insert("surname", surname(only));
            values.insert("initials", initials(only));
            "book-one"
        }
        _ => {
            for (n, author) in authors.iter().take(4).enumerate() {
                values.insert(format!("author{}_surname", n + 1), surname(author));
                values.insert(format!("author{}_initials", n + 1), initials(author));
            }
            if authors.len() <= 3 {
                "book-multiple"
            } else {
                let rest: Vec<String> = authors[4..].iter().map(full_name).collect();
                if !rest.is_empty() {
                    values.insert("additional_authors", rest.join(" and "));
                }
                "book-four-plus"
            }
        }
    };
    Ok((type_key, values))
}

fn map_web(entry: &Entry, today: DateTime<Utc>) -> Result<Mapped, String> {
    let url = entry.url().ok_or_else(|| "missing url".to_string())?;
    let title = entry
        .title()
        .map(|t| t.to_string())
        .ok_or_else(|| "missing title".to_string())?;
    let author = entry
        .authors()
        .and_then(|authors| authors.first())
        .map(full_name)
        .or_else(|| {
            entry
                .publisher()
                .and_then(|p| p.name())
                .map(|name| name.to_string())
        })
        .ok_or_else(|| "no author or publisher".to_string())?;
    let accessed = url
        .visit_date
        .as_ref()
        .map(long_date)
        .unwrap_or_else(|| today.format("%-d %B %Y").to_string());

    let mut values = FieldValues::new();
    values.insert("author", author);
    values.insert("year", year(entry));
    values.insert("title", title);
    values.insert("url", url.value.to_string());
    values.insert("access_date", accessed);
    Ok(("website", values))
}

fn year(entry: &Entry) -> String {
    entry
        .date()
        .map(|date| date.year.to_string())
        .unwrap_or_default()
}

/// Surname with any particle, e.g. `van der Merwe`.
fn surname(who: &Person) -> String {
    match who.prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => format!("{} {}", prefix, who.name),
        _ => who.name.clone(),
    }
}

/// `Elwyn Brooks` becomes `E.B.`; hyphenated names contribute each part.
fn initials(who: &Person) -> String {
    who.given_name
        .as_deref()
        .unwrap_or_default()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter_map(|part| part.chars().find(|c| c.is_alphabetic()))
        .flat_map(|c| c.to_uppercase().chain(std::iter::once('.')))
        .collect()
}

/// `Surname, I.` or the bare surname for single-name authors.
fn full_name(who: &Person) -> String {
    let initials = initials(who);
    if initials.is_empty() {
        surname(who)
    } else {
        person(&surname(who), &initials)
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// `20 November 2015`; months and days are stored zero-based.
fn long_date(date: &Date) -> String {
    let month = date
        .month
        .and_then(|m| MONTHS.get(usize::from(m)))
        .copied();
    match (date.day, month) {
        (Some(day), Some(month)) => format!("{} {} {}", u32::from(day) + 1, month, date.year),
        (None, Some(month)) => format!("{} {}", month, date.year),
        _ => date.year.to_string(),
    }
}
