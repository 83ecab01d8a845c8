//! Books, chapters, e-books, PDFs and poems.

use super::{FieldSpec, Fields, TypeSpec};
use crate::format::{
    clause, edition_clause, editor_credit, em, join_authors, person, trailing_availability,
};
use crate::normalize::{NO_PLACE, NO_PUBLISHER};

pub(super) fn types() -> Vec<TypeSpec> {
    vec![
        TypeSpec::new(
            "book-one",
            "Book (One Author)",
            "For a book written by a single author.",
            vec![
                FieldSpec::text("surname", "Author Surname")
                    .required()
                    .hint("e.g., Hüther"),
                FieldSpec::text("initials", "Author Initials")
                    .required()
                    .hint("e.g., G."),
                FieldSpec::text("year", "Year")
                    .required()
                    .hint("e.g., 2006")
                    .tooltip("Use [s.a.] if year unavailable"),
                FieldSpec::text("title", "Book Title")
                    .required()
                    .hint("e.g., The compassionate brain: How empathy creates intelligence"),
                FieldSpec::text("edition", "Edition").hint("e.g., 2 (only if not first edition)"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., Boston")
                    .tooltip("Use [s.l.] if place unavailable"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., Trumpeter")
                    .tooltip("Use [s.n.] if publisher unavailable"),
            ],
            single_author_book,
        ),
        TypeSpec::new(
            "book-multiple",
            "Book (2-3 Authors)",
            "For a book written by two or three authors.",
            vec![
                FieldSpec::text("author1_surname", "First Author Surname")
                    .required()
                    .hint("e.g., Strunk"),
                FieldSpec::text("author1_initials", "First Author Initials")
                    .required()
                    .hint("e.g., W."),
                FieldSpec::text("author2_surname", "Second Author Surname")
                    .required()
                    .hint("e.g., White"),
                FieldSpec::text("author2_initials", "Second Author Initials")
                    .required()
                    .hint("e.g., E.B."),
                FieldSpec::text("author3_surname", "Third Author Surname")
                    .hint("Leave blank if only 2 authors"),
                FieldSpec::text("author3_initials", "Third Author Initials")
                    .hint("Leave blank if only 2 authors"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2023"),
                FieldSpec::text("title", "Book Title")
                    .required()
                    .hint("e.g., The elements of style"),
                FieldSpec::text("edition", "Edition").hint("e.g., 4"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., Massachusetts"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., Allan and Bacon"),
            ],
            |f| {
                let mut names = authors(f, 2);
                if f.has("author3_surname") && f.has("author3_initials") {
                    names.push(person(f.get("author3_surname"), f.get("author3_initials")));
                }
                book(f, &join_authors(&names, ""), f.get("year"))
            },
        ),
        TypeSpec::new(
            "book-four-plus",
            "Book (4+ Authors)",
            "For a book written by four or more authors (use et al. in citations).",
            vec![
                FieldSpec::text("author1_surname", "First Author Surname")
                    .required()
                    .hint("e.g., Green"),
                FieldSpec::text("author1_initials", "First Author Initials")
                    .required()
                    .hint("e.g., G."),
                FieldSpec::text("author2_surname", "Second Author Surname")
                    .required()
                    .hint("e.g., Pecar"),
                FieldSpec::text("author2_initials", "Second Author Initials")
                    .required()
                    .hint("e.g., B."),
                FieldSpec::text("author3_surname", "Third Author Surname")
                    .required()
                    .hint("e.g., Santana"),
                FieldSpec::text("author3_initials", "Third Author Initials")
                    .required()
                    .hint("e.g., L."),
                FieldSpec::text("author4_surname", "Fourth Author Surname")
                    .required()
                    .hint("e.g., Burke"),
                FieldSpec::text("author4_initials", "Fourth Author Initials")
                    .required()
                    .hint("e.g., A."),
                FieldSpec::text("additional_authors", "Additional Authors").hint(
                    "If more than 4, format: Surname, Initials and Surname, Initials",
                ),
                FieldSpec::text("year", "Year").required().hint("e.g., 2014"),
                FieldSpec::text("title", "Book Title")
                    .required()
                    .hint("e.g., Statistics for the social sciences"),
                FieldSpec::text("edition", "Edition").hint("e.g., 2"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., Cape Town"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., Oxford University Press"),
            ],
            |f| {
                let names = authors(f, 4);
                book(
                    f,
                    &join_authors(&names, f.get("additional_authors")),
                    f.get("year"),
                )
            },
        ),
        TypeSpec::new(
            "book-same-author",
            "Books (Same Author, Multiple Publications)",
            "For multiple works by the same author. Use letters (a, b, c) for same year publications.",
            vec![
                FieldSpec::text("surname", "Author Surname")
                    .required()
                    .hint("e.g., Smith"),
                FieldSpec::text("initials", "Author Initials")
                    .required()
                    .hint("e.g., R.G."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2015"),
                FieldSpec::text("year_letter", "Year Letter")
                    .hint("e.g., a (for 2015a, 2015b). Leave blank if not needed"),
                FieldSpec::text("title", "Book Title")
                    .required()
                    .hint("e.g., Changing policy paradigms"),
                FieldSpec::text("edition", "Edition").hint("e.g., 2"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., Cape Town"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., Education House"),
            ],
            |f| {
                let year = format!("{}{}", f.get("year"), f.get("year_letter"));
                book(f, &person(f.get("surname"), f.get("initials")), &year)
            },
        ),
        TypeSpec::new(
            "book-editor",
            "Book (Editor/s)",
            "For a book with editor(s) rather than author(s).",
            vec![
                FieldSpec::text("editor1_surname", "First Editor Surname")
                    .required()
                    .hint("e.g., Loubser"),
                FieldSpec::text("editor1_initials", "First Editor Initials")
                    .required()
                    .hint("e.g., C.P."),
                FieldSpec::text("editor2_surname", "Second Editor Surname")
                    .hint("Leave blank if only one editor"),
                FieldSpec::text("editor2_initials", "Second Editor Initials")
                    .hint("Leave blank if only one editor"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2005"),
                FieldSpec::text("title", "Book Title")
                    .required()
                    .hint("e.g., Environmental education: Some South African perspectives"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., Pretoria"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., Van Schaik"),
            ],
            |f| {
                let mut editors = vec![person(f.get("editor1_surname"), f.get("editor1_initials"))];
                if f.has("editor2_surname") && f.has("editor2_initials") {
                    editors.push(person(f.get("editor2_surname"), f.get("editor2_initials")));
                }
                format!(
                    "{}, {}. {}. {}: {}.",
                    editor_credit(&editors),
                    f.get("year"),
                    em(f.get("title")),
                    f.get("city"),
                    f.get("publisher")
                )
            },
        ),
        TypeSpec::new(
            "chapter",
            "Chapter from Edited Book",
            "For a chapter within an edited book.",
            vec![
                FieldSpec::text("chapter_author_surname", "Chapter Author Surname")
                    .required()
                    .hint("e.g., Davis"),
                FieldSpec::text("chapter_author_initials", "Chapter Author Initials")
                    .required()
                    .hint("e.g., C."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2014"),
                FieldSpec::text("chapter_title", "Chapter Title")
                    .required()
                    .hint("e.g., The aims of research"),
                FieldSpec::text("editor_initials", "Editor Initials")
                    .required()
                    .hint("e.g., F."),
                FieldSpec::text("editor_surname", "Editor Surname")
                    .required()
                    .hint("e.g., du Plooy-Cilliers"),
                FieldSpec::text("additional_editors", "Additional Editors")
                    .hint("e.g., C. Davis and R.M. Bezuidenhout"),
                FieldSpec::text("book_title", "Book Title")
                    .required()
                    .hint("e.g., Research matters"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., Claremont"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., Juta"),
                FieldSpec::text("chapter_number", "Chapter Number").hint("e.g., 5"),
                FieldSpec::text("pages", "Page Numbers")
                    .required()
                    .hint("e.g., 72-81"),
            ],
            |f| {
                let lead = format!("{} {}", f.get("editor_initials"), f.get("editor_surname"));
                let editors = if f.has("additional_editors") {
                    format!("{}, {}, eds.", lead, f.get("additional_editors"))
                } else {
                    format!("{}, ed.", lead)
                };
                format!(
                    "{}, {}. {}. In: {} {}. {}: {}, {}pp.{}.",
                    person(
                        f.get("chapter_author_surname"),
                        f.get("chapter_author_initials")
                    ),
                    f.get("year"),
                    f.get("chapter_title"),
                    editors,
                    em(f.get("book_title")),
                    f.get("city"),
                    f.get("publisher"),
                    clause("Chapter ", f.get("chapter_number"), ": "),
                    f.get("pages")
                )
            },
        ),
        TypeSpec::new(
            "ebook",
            "eBook",
            "For an electronic book accessed online.",
            vec![
                FieldSpec::text("surname", "Author Surname")
                    .required()
                    .hint("e.g., Cox"),
                FieldSpec::text("initials", "Author Initials")
                    .required()
                    .hint("e.g., A."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2008"),
                FieldSpec::text("title", "Book Title")
                    .required()
                    .hint("e.g., The short story"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., Newcastle"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., Cambridge Scholars Publishing"),
                FieldSpec::text("url", "URL")
                    .required()
                    .hint("Paste the permalink"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 31 October 2017"),
            ],
            |f| {
                format!(
                    "{}, {}. {}. [e-book] {}: {}. Available at: &lt;{}&gt; [Accessed {}].",
                    person(f.get("surname"), f.get("initials")),
                    f.get("year"),
                    f.get("title"),
                    f.get("city"),
                    f.get("publisher"),
                    f.get("url"),
                    f.get("access_date")
                )
            },
        ),
        TypeSpec::new(
            "pdf",
            "PDF Document",
            "For a PDF document accessed online.",
            vec![
                FieldSpec::text("author", "Author/Organization")
                    .required()
                    .hint("e.g., Bank of England"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2008"),
                FieldSpec::text("title", "Document Title")
                    .required()
                    .hint("e.g., Inflation Report"),
                FieldSpec::text("city", "City of Publication")
                    .hint("e.g., London (use [s.l.] if unknown)"),
                FieldSpec::text("publisher", "Publisher").hint("e.g., Bank of England"),
                FieldSpec::text("url", "URL")
                    .required()
                    .hint("Paste the PDF URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 20 April 2009"),
            ],
            |f| {
                let city = if f.has("city") { f.get("city") } else { NO_PLACE };
                let publisher = if f.has("publisher") {
                    f.get("publisher")
                } else {
                    f.get("author")
                };
                format!(
                    "{}, {}. {}. [pdf] {}: {}. Available at: &lt;{}&gt; [Accessed {}].",
                    f.get("author"),
                    f.get("year"),
                    f.get("title"),
                    city,
                    publisher,
                    f.get("url"),
                    f.get("access_date")
                )
            },
        ),
        TypeSpec::new(
            "poem",
            "Poem (from book/website)",
            "For a poem from a book or website.",
            vec![
                FieldSpec::text("poet_surname", "Poet Surname")
                    .required()
                    .hint("e.g., Mhlophe"),
                FieldSpec::text("poet_initials", "Poet Initials")
                    .required()
                    .hint("e.g., G."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2013"),
                FieldSpec::text("poem_title", "Poem Title")
                    .required()
                    .hint("e.g., Say no"),
                FieldSpec::select("source_type", "Source Type", &["book", "website"])
                    .required()
                    .hint("Select if from book or website"),
                FieldSpec::text("book_editor", "Book Editor")
                    .hint("e.g., H. Moffett (only if from book)"),
                FieldSpec::text("book_title", "Book Title")
                    .hint("e.g., Seasons come to pass (only if from book)"),
                FieldSpec::text("city", "City").hint("e.g., Cape Town (only if from book)"),
                FieldSpec::text("publisher", "Publisher")
                    .hint("e.g., Oxford University Press (only if from book)"),
                FieldSpec::text("pages", "Pages").hint("e.g., 271-272 (only if from book)"),
                FieldSpec::text("url", "URL").hint("Only if from website"),
                FieldSpec::text("access_date", "Access Date")
                    .hint("e.g., 09 February 2018 (only if from website)"),
            ],
            poem,
        ),
    ]
}

fn single_author_book(f: &Fields<'_>) -> String {
    book(f, &person(f.get("surname"), f.get("initials")), f.get("year"))
}

/// `authorN_surname, authorN_initials` for the first `count` authors.
fn authors(f: &Fields<'_>, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| {
            person(
                f.get(&format!("author{}_surname", n)),
                f.get(&format!("author{}_initials", n)),
            )
        })
        .collect()
}

/// Shared tail of the printed-book formats.
fn book(f: &Fields<'_>, authors: &str, year: &str) -> String {
    format!(
        "{}, {}. {}. {}{}: {}.",
        authors,
        year,
        em(f.get("title")),
        edition_clause(f.get("edition")),
        f.get("city"),
        f.get("publisher")
    )
}

enum PoemSource<'a> {
    Book {
        editor: &'a str,
        title: &'a str,
        city: &'a str,
        publisher: &'a str,
        pages: &'a str,
    },
    Website {
        url: &'a str,
        accessed: &'a str,
    },
}

impl<'a> PoemSource<'a> {
    fn from_fields(f: &Fields<'a>) -> Self {
        if f.get("source_type") == "book" {
            PoemSource::Book {
                editor: f.get("book_editor"),
                title: f.get("book_title"),
                city: f.get("city"),
                publisher: f.get("publisher"),
                pages: f.get("pages"),
            }
        } else {
            PoemSource::Website {
                url: f.get("url"),
                accessed: f.get("access_date"),
            }
        }
    }
}

fn poem(f: &Fields<'_>) -> String {
    let head = format!(
        "{}, {}. {}.",
        person(f.get("poet_surname"), f.get("poet_initials")),
        f.get("year"),
        f.get("poem_title")
    );
    match PoemSource::from_fields(f) {
        PoemSource::Book {
            editor,
            title,
            city,
            publisher,
            pages,
        } => {
            let container = match (editor.is_empty(), title.is_empty()) {
                (false, false) => format!(" In: {}, {}.", editor, em(title)),
                (false, true) => format!(" In: {}.", editor),
                (true, false) => format!(" In: {}.", em(title)),
                (true, true) => String::new(),
            };
            let city = if city.is_empty() { NO_PLACE } else { city };
            let publisher = if publisher.is_empty() {
                NO_PUBLISHER
            } else {
                publisher
            };
            format!(
                "{}{} {}: {}{}.",
                head,
                container,
                city,
                publisher,
                clause(", pp.", pages, "")
            )
        }
        PoemSource::Website { url, accessed } => format!(
            "{} [online poem].{}",
            head,
            trailing_availability(url, accessed)
        ),
    }
}
