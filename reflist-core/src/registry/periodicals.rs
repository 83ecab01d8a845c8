//! Journals, newspapers, websites, videos and blogs.

use super::{FieldSpec, Fields, TypeSpec};
use crate::format::{clause, em, person, trailing_availability};

pub(super) fn types() -> Vec<TypeSpec> {
    vec![
        TypeSpec::new(
            "journal",
            "Journal Article",
            "For a printed journal article.",
            vec![
                FieldSpec::text("surname", "Author Surname")
                    .required()
                    .hint("e.g., Spaull"),
                FieldSpec::text("initials", "Author Initials")
                    .required()
                    .hint("e.g., N."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2013"),
                FieldSpec::text("article_title", "Article Title")
                    .required()
                    .hint("e.g., Poverty and privilege: Primary school inequality"),
                FieldSpec::text("journal_title", "Journal Title")
                    .required()
                    .hint("e.g., International Journal of Educational Development"),
                FieldSpec::text("volume", "Volume").required().hint("e.g., 33"),
                FieldSpec::text("issue", "Issue").required().hint("e.g., 2"),
                FieldSpec::text("pages", "Page Numbers")
                    .required()
                    .hint("e.g., 436-447"),
            ],
            |f| format!("{} pp.{}.", article_head(f, ""), f.get("pages")),
        ),
        TypeSpec::new(
            "journal-online",
            "Journal Article (Online)",
            "For a journal article obtained from an online database.",
            vec![
                FieldSpec::text("surname", "Author Surname")
                    .required()
                    .hint("e.g., Barker"),
                FieldSpec::text("initials", "Author Initials")
                    .required()
                    .hint("e.g., R."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2009"),
                FieldSpec::text("article_title", "Article Title")
                    .required()
                    .hint("e.g., A qualitative thematic analysis"),
                FieldSpec::text("journal_title", "Journal Title")
                    .required()
                    .hint("e.g., Journal of Qualitative Research"),
                FieldSpec::text("volume", "Volume").required().hint("e.g., 42"),
                FieldSpec::text("issue", "Issue").required().hint("e.g., 1"),
                FieldSpec::text("pages", "Page Numbers")
                    .required()
                    .hint("e.g., 7-14"),
                FieldSpec::text("url", "URL")
                    .required()
                    .hint("Paste the permalink/DOI URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 22 July 2023"),
            ],
            |f| {
                format!(
                    "{} pp.{}. Available at: &lt;{}&gt; [Accessed {}].",
                    article_head(f, "[e-journal] "),
                    f.get("pages"),
                    f.get("url"),
                    f.get("access_date")
                )
            },
        ),
        TypeSpec::new(
            "newspaper",
            "Newspaper/Magazine Article",
            "For printed or online newspaper/magazine articles.",
            vec![
                FieldSpec::text("author_surname", "Author Surname")
                    .hint("e.g., Du Preez (leave blank if no author)"),
                FieldSpec::text("author_initials", "Author Initials").hint("e.g., S.P."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2014"),
                FieldSpec::text("article_title", "Article Title")
                    .required()
                    .hint("e.g., Smarter than he looks"),
                FieldSpec::text("publication", "Publication Name")
                    .required()
                    .hint("e.g., Politics Today or Daily Maverick"),
                FieldSpec::select("source_type", "Source Type", &["printed", "online"])
                    .required()
                    .hint("Is this printed or online?"),
                FieldSpec::text("date", "Publication Date")
                    .required()
                    .hint("e.g., 4 October or 18 November"),
                FieldSpec::text("page", "Page").hint("e.g., 4 (only for printed articles)"),
                FieldSpec::text("url", "URL").hint("Only for online articles"),
                FieldSpec::text("access_date", "Access Date")
                    .hint("e.g., 19 November 2015 (only for online)"),
            ],
            newspaper,
        ),
        TypeSpec::new(
            "website",
            "Website",
            "For content from a website.",
            vec![
                FieldSpec::text("author", "Author/Organization")
                    .required()
                    .hint("e.g., World Health Organisation"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2015"),
                FieldSpec::text("title", "Page Title")
                    .required()
                    .hint("e.g., WHO calls on countries to protect health"),
                FieldSpec::text("url", "URL")
                    .required()
                    .hint("Paste the full URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 20 November 2015"),
            ],
            |f| online_work(f, "[online]"),
        ),
        TypeSpec::new(
            "youtube",
            "YouTube/TEDx Video",
            "For videos from YouTube, TEDx, or similar platforms.",
            vec![
                FieldSpec::text("author", "Author/Channel Name")
                    .required()
                    .hint("e.g., Department for Environment, Food and Rural Affairs"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2007"),
                FieldSpec::text("title", "Video Title")
                    .required()
                    .hint("e.g., Sustainable development: the bigger picture"),
                FieldSpec::text("url", "URL")
                    .required()
                    .hint("Paste the YouTube URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 23 June 2012"),
            ],
            |f| online_work(f, "[video online]"),
        ),
        TypeSpec::new(
            "blog",
            "Blog Article",
            "For blog posts and articles.",
            vec![
                FieldSpec::text("author", "Author Name")
                    .required()
                    .hint("e.g., Geezer, D."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2009"),
                FieldSpec::text("title", "Blog Post Title")
                    .required()
                    .hint("e.g., Conservationists are not making themselves heard"),
                FieldSpec::text("blog_name", "Blog Name")
                    .required()
                    .hint("e.g., Guardian.co.uk Science blog"),
                FieldSpec::text("date", "Post Date").required().hint("e.g., 18 June"),
                FieldSpec::text("url", "URL")
                    .required()
                    .hint("Paste the blog post URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 23 June 2009"),
            ],
            |f| {
                format!(
                    "{}, {}. {}. {}, [blog] {}. Available at: &lt;{}&gt; [Accessed {}].",
                    f.get("author"),
                    f.get("year"),
                    f.get("title"),
                    em(f.get("blog_name")),
                    f.get("date"),
                    f.get("url"),
                    f.get("access_date")
                )
            },
        ),
    ]
}

/// `Surname, I., Year. Title. <em>Journal</em>, {marker}Vol(Issue),`
fn article_head(f: &Fields<'_>, marker: &str) -> String {
    format!(
        "{}, {}. {}. {}, {}{}({}),",
        person(f.get("surname"), f.get("initials")),
        f.get("year"),
        f.get("article_title"),
        em(f.get("journal_title")),
        marker,
        f.get("volume"),
        f.get("issue")
    )
}

fn online_work(f: &Fields<'_>, marker: &str) -> String {
    format!(
        "{}, {}. {}. {} Available at: &lt;{}&gt; [Accessed {}].",
        f.get("author"),
        f.get("year"),
        f.get("title"),
        marker,
        f.get("url"),
        f.get("access_date")
    )
}

enum Edition<'a> {
    Printed { page: &'a str },
    Online { url: &'a str, accessed: &'a str },
}

fn newspaper(f: &Fields<'_>) -> String {
    let author = match (f.get("author_surname"), f.get("author_initials")) {
        ("", _) => f.get("publication").to_string(),
        (surname, "") => surname.to_string(),
        (surname, initials) => person(surname, initials),
    };
    let head = format!(
        "{}, {}. {}. {},",
        author,
        f.get("year"),
        f.get("article_title"),
        em(f.get("publication"))
    );
    let edition = if f.get("source_type") == "printed" {
        Edition::Printed { page: f.get("page") }
    } else {
        Edition::Online {
            url: f.get("url"),
            accessed: f.get("access_date"),
        }
    };
    match edition {
        Edition::Printed { page } => {
            format!("{} {}.{}", head, f.get("date"), clause(" p.", page, "."))
        }
        Edition::Online { url, accessed } => format!(
            "{} [online] {}.{}",
            head,
            f.get("date"),
            trailing_availability(url, accessed)
        ),
    }
}
