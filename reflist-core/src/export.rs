//! Plain-text and clipboard renderings of the reference list.

use chrono::{DateTime, Utc};

/// Strip citation markup and unescape angle brackets.
pub fn to_plain(text: &str) -> String {
    text.replace("<em>", "")
        .replace("</em>", "")
        .replace("<sup>", "")
        .replace("</sup>", "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

/// One plain-text paragraph per citation, separated by blank lines.
pub fn plain_text<S: AsRef<str>>(texts: &[S]) -> String {
    texts
        .iter()
        .map(|text| to_plain(text.as_ref()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `<prefix>_YYYY-MM-DDTHH-MM-SS.txt` for an export made at `now`.
pub fn export_filename(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}.txt", prefix, now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Citations wrapped one per paragraph, markup intact.
pub fn clipboard_fragment<S: AsRef<str>>(texts: &[S]) -> String {
    texts
        .iter()
        .map(|text| format!("<p>{}</p>", text.as_ref()))
        .collect()
}
