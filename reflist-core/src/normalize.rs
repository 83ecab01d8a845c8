//! Field normalization and missing-information placeholders.
//!
//! Raw form input is trimmed and has internal whitespace runs collapsed.
//! Empty year, place and publisher fields are replaced with the bibliographic
//! placeholders `[s.a.]` (sine anno), `[s.l.]` (sine loco) and `[s.n.]`
//! (sine nomine).

use reflist_types::FieldValues;

/// Placeholder for an unknown year.
pub const NO_YEAR: &str = "[s.a.]";
/// Placeholder for an unknown place of publication.
pub const NO_PLACE: &str = "[s.l.]";
/// Placeholder for an unknown publisher.
pub const NO_PUBLISHER: &str = "[s.n.]";

/// How a field's value is treated when it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Year,
    City,
    Publisher,
    Plain,
}

impl FieldRole {
    /// Role derived from a field name.
    ///
    /// `year_letter` is plain even though it mentions the year: it is the
    /// disambiguating suffix, not the year itself.
    pub fn of(name: &str) -> Self {
        if name.contains("year") && !name.contains("letter") {
            FieldRole::Year
        } else if name.contains("city") {
            FieldRole::City
        } else if name.contains("publisher") {
            FieldRole::Publisher
        } else {
            FieldRole::Plain
        }
    }

    /// Placeholder substituted for an empty value, if this role has one.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FieldRole::Year => Some(NO_YEAR),
            FieldRole::City => Some(NO_PLACE),
            FieldRole::Publisher => Some(NO_PUBLISHER),
            FieldRole::Plain => None,
        }
    }
}

/// Trim and collapse internal whitespace runs to a single space.
pub fn sanitize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize one value for the given role.
pub fn normalize_value(raw: &str, role: FieldRole) -> String {
    let clean = sanitize(raw);
    if clean.is_empty() {
        role.placeholder().map(str::to_string).unwrap_or_default()
    } else {
        clean
    }
}

/// Normalize every value in `raw`, using `role_of` to classify field names.
pub fn normalize<F>(raw: &FieldValues, role_of: F) -> FieldValues
where
    F: Fn(&str) -> FieldRole,
{
    raw.iter()
        .map(|(name, value)| (name, normalize_value(value, role_of(name))))
        .collect()
}
