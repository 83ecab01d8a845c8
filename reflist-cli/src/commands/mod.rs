//! CLI command implementations.

pub mod export;
pub mod import;
pub mod init;
pub mod references;
pub mod types;

pub use export::{copy_html, export_text};
pub use import::import_bibliography;
pub use init::init_config;
pub use references::{
    add_reference, clear_references, edit_reference, list_references, remove_reference,
};
pub use types::{list_types, show_type};

use reflist_core::FieldValues;

/// Parse a `name=value` argument; the value may be empty or contain `=`.
pub fn parse_field(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected name=value, got '{}'", arg)),
    }
}

pub(crate) fn field_values(fields: Vec<(String, String)>) -> FieldValues {
    fields.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("url=http://x?a=b").unwrap(),
            ("url".to_string(), "http://x?a=b".to_string())
        );
        assert_eq!(parse_field("year=").unwrap(), ("year".to_string(), String::new()));
        assert!(parse_field("=2006").is_err());
        assert!(parse_field("title").is_err());
    }
}
