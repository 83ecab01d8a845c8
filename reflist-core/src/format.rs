//! Notational building blocks shared by the citation templates.
//!
//! Rendered citations carry a small amount of markup: `<em>` for titles,
//! `<sup>` for ordinal suffixes, and `&lt;`/`&gt;` around URLs.

/// English ordinal suffix for `n` ("st", "nd", "rd" or "th").
pub fn ordinal_suffix(n: u64) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Edition clause, including its trailing space, or `""` without an edition.
///
/// Numeric editions get a superscript ordinal (`2<sup>nd</sup> ed. `); any
/// other text is kept as written (`Revised ed. `).
pub fn edition_clause(edition: &str) -> String {
    if edition.is_empty() {
        return String::new();
    }
    match edition.parse::<u64>() {
        Ok(n) => format!("{}<sup>{}</sup> ed. ", edition, ordinal_suffix(n)),
        Err(_) => format!("{} ed. ", edition),
    }
}

/// Wrap a title in emphasis markup.
pub fn em(text: &str) -> String {
    format!("<em>{}</em>", text)
}

/// `Surname, Initials` for a person split over two fields.
pub fn person(surname: &str, initials: &str) -> String {
    format!("{}, {}", surname, initials)
}

/// Join names: "A", "A and B", "A and B and C", then for four or more
/// "A, B, C and D" followed by `additional` when given.
pub fn join_authors(names: &[String], additional: &str) -> String {
    let mut out = match names {
        [] => String::new(),
        [only] => only.clone(),
        [_, _] | [_, _, _] => names.join(" and "),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    };
    if names.len() >= 4 && !additional.is_empty() {
        out.push_str(", ");
        out.push_str(additional);
    }
    out
}

/// Editor credit: "A ed." for one editor, "A and B eds." for two.
pub fn editor_credit(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => format!("{} ed.", only),
        _ => format!("{} eds.", names.join(" and ")),
    }
}

/// Online availability sentence: `Available at: &lt;url&gt; [Accessed date].`
///
/// Either half is dropped when its value is empty; `None` when both are.
pub fn availability(url: &str, accessed: &str) -> Option<String> {
    match (url.is_empty(), accessed.is_empty()) {
        (false, false) => Some(format!(
            "Available at: &lt;{}&gt; [Accessed {}].",
            url, accessed
        )),
        (false, true) => Some(format!("Available at: &lt;{}&gt;.", url)),
        (true, false) => Some(format!("[Accessed {}].", accessed)),
        (true, true) => None,
    }
}

/// `availability` with a leading space, or `""`.
pub fn trailing_availability(url: &str, accessed: &str) -> String {
    availability(url, accessed)
        .map(|s| format!(" {}", s))
        .unwrap_or_default()
}

/// `prefix + value + suffix` when `value` is non-empty, else `""`.
pub fn clause(prefix: &str, value: &str, suffix: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{}{}{}", prefix, value, suffix)
    }
}
