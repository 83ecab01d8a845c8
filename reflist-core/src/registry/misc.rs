//! Software, sound recordings, broadcasts, podcasts and secondary references.

use super::{FieldSpec, Fields, TypeSpec};
use crate::format::{clause, em, trailing_availability};

pub(super) fn types() -> Vec<TypeSpec> {
    vec![
        TypeSpec::new(
            "code",
            "Code Snippet/Computer Program",
            "For code snippets and computer programs from the internet.",
            vec![
                FieldSpec::text("author", "Author/Company")
                    .required()
                    .hint("e.g., Smith, J. or company name"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2011"),
                FieldSpec::text("title", "Program/Code Title")
                    .required()
                    .hint("e.g., Graphics Drawer source code"),
                FieldSpec::text("version", "Version").hint("e.g., 2.0"),
                FieldSpec::text("url", "URL")
                    .required()
                    .hint("Program or repository URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 10 May 2021"),
            ],
            |f| {
                format!(
                    "{}, {}. {}{} [Source code]. Available at: &lt;{}&gt; [Accessed {}].",
                    f.get("author"),
                    f.get("year"),
                    f.get("title"),
                    clause(" (Version ", f.get("version"), ")"),
                    f.get("url"),
                    f.get("access_date")
                )
            },
        ),
        TypeSpec::new(
            "app",
            "Mobile App",
            "For mobile applications.",
            vec![
                FieldSpec::text("developer", "Developer/Company")
                    .required()
                    .hint("e.g., Skyscape"),
                FieldSpec::text("year", "Year")
                    .required()
                    .hint("e.g., 2010 (use access year if unavailable)"),
                FieldSpec::text("title", "App Title")
                    .required()
                    .hint("e.g., Skyscape medical resources"),
                FieldSpec::text("version", "Version").hint("e.g., 1.9.11"),
                FieldSpec::select(
                    "source",
                    "App Source",
                    &["URL", "Google Play", "Apple App Store"],
                )
                .required()
                .hint("Where is the app available?"),
                FieldSpec::text("url", "URL").hint("Only if source is URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 22 July 2021"),
            ],
            app,
        ),
        TypeSpec::new(
            "sound",
            "Sound Clip/Music",
            "For sound recordings and music tracks.",
            vec![
                FieldSpec::text("artist", "Artist/Composer")
                    .required()
                    .hint("e.g., Lennon, J. and McCartney, P."),
                FieldSpec::text("year", "Year").required().hint("e.g., 1966"),
                FieldSpec::text("title", "Track Title")
                    .required()
                    .hint("e.g., Yellow submarine"),
                FieldSpec::text("album", "Album Title").hint("e.g., Revolver"),
                FieldSpec::text("performer", "Performer")
                    .hint("e.g., The Beatles (if different from artist)"),
                FieldSpec::text("city", "City").required().hint("e.g., Hayes"),
                FieldSpec::text("label", "Record Label").required().hint("e.g., EMI"),
                FieldSpec::select("source_type", "Source Type", &["physical", "online"])
                    .required()
                    .hint("Physical or online?"),
                FieldSpec::text("url", "URL").hint("Only if online"),
                FieldSpec::text("access_date", "Access Date").hint("Only if online"),
            ],
            sound,
        ),
        TypeSpec::new(
            "cd",
            "CD/Album",
            "For complete CD albums.",
            vec![
                FieldSpec::text("artist", "Artist/Band Name")
                    .required()
                    .hint("e.g., Oasis"),
                FieldSpec::text("year", "Year").required().hint("e.g., 1994"),
                FieldSpec::text("title", "Album Title")
                    .required()
                    .hint("e.g., Definitely maybe"),
                FieldSpec::text("city", "City").required().hint("e.g., Manchester"),
                FieldSpec::text("label", "Record Label")
                    .required()
                    .hint("e.g., Creation Records"),
            ],
            |f| {
                format!(
                    "{}, {}. {}. [CD] {}: {}.",
                    f.get("artist"),
                    f.get("year"),
                    em(f.get("title")),
                    f.get("city"),
                    f.get("label")
                )
            },
        ),
        TypeSpec::new(
            "radio",
            "Radio Programme",
            "For radio programmes and broadcasts.",
            vec![
                FieldSpec::text("title", "Programme Title")
                    .required()
                    .hint("e.g., The Sun"),
                FieldSpec::text("year", "Year of Transmission")
                    .required()
                    .hint("e.g., 2015"),
                FieldSpec::text("station", "Radio Station")
                    .required()
                    .hint("e.g., BBC Radio 4"),
                FieldSpec::text("date", "Date of Transmission")
                    .required()
                    .hint("e.g., 1 January"),
                FieldSpec::text("url", "URL").hint("If available online"),
                FieldSpec::text("access_date", "Access Date").hint("e.g., 22 July 2021"),
            ],
            radio,
        ),
        TypeSpec::new(
            "podcast",
            "Podcast",
            "For podcast episodes.",
            vec![
                FieldSpec::text("presenter", "Presenter/Host")
                    .required()
                    .hint("e.g., Yesterday in Parliament"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2015"),
                FieldSpec::text("title", "Episode Title").hint("If applicable"),
                FieldSpec::text("series_title", "Podcast Series Title").hint("If applicable"),
                FieldSpec::text("date", "Post Date").required().hint("e.g., 18 June"),
                FieldSpec::text("url", "URL").required().hint("Podcast URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 22 July 2021"),
            ],
            |f| {
                let series = if f.has("series_title") {
                    format!("{}. ", em(f.get("series_title")))
                } else {
                    String::new()
                };
                format!(
                    "{}, {}. {}{}[podcast]. {}. Available at: &lt;{}&gt; [Accessed {}].",
                    f.get("presenter"),
                    f.get("year"),
                    clause("", f.get("title"), ". "),
                    series,
                    f.get("date"),
                    f.get("url"),
                    f.get("access_date")
                )
            },
        ),
        TypeSpec::new(
            "secondary",
            "Secondary Reference",
            "For citing a source mentioned in another source you have read.",
            vec![
                FieldSpec::text("original_author", "Original Author(s)")
                    .required()
                    .hint("e.g., Barber, M. and Mourshed, M."),
                FieldSpec::text("original_year", "Original Year")
                    .required()
                    .hint("e.g., 2007"),
                FieldSpec::text("original_title", "Original Title")
                    .required()
                    .hint("e.g., How the world's best-performing school systems"),
                FieldSpec::text("original_city", "Original City")
                    .required()
                    .hint("e.g., New York, NY"),
                FieldSpec::text("original_publisher", "Original Publisher")
                    .required()
                    .hint("e.g., McKinsey and Company"),
                FieldSpec::text("cited_author", "Cited In - Author")
                    .required()
                    .hint("e.g., Spaull, N."),
                FieldSpec::text("cited_year", "Cited In - Year")
                    .required()
                    .hint("e.g., 2013"),
                FieldSpec::text("cited_title", "Cited In - Title")
                    .required()
                    .hint("e.g., South Africa's education crisis"),
                FieldSpec::text("cited_city", "Cited In - City")
                    .required()
                    .hint("e.g., Parktown"),
                FieldSpec::text("cited_publisher", "Cited In - Publisher")
                    .required()
                    .hint("e.g., Centre for Development and Enterprise"),
            ],
            |f| {
                format!(
                    "{} Cited in: {}",
                    secondary_work(f, "original"),
                    secondary_work(f, "cited")
                )
            },
        ),
    ]
}

fn app(f: &Fields<'_>) -> String {
    let source = if f.get("source") == "url" {
        clause("Available at: &lt;", f.get("url"), "&gt; ")
    } else {
        format!("Available from {} ", f.choice_label("source"))
    };
    format!(
        "{}, {}. {}.{} [App]. {}[Accessed {}].",
        f.get("developer"),
        f.get("year"),
        f.get("title"),
        clause(" Version ", f.get("version"), "."),
        source,
        f.get("access_date")
    )
}

fn sound(f: &Fields<'_>) -> String {
    let credits = match (f.get("performer"), f.get("album")) {
        ("", "") => String::new(),
        ("", album) => format!(" on the album {}.", album),
        (performer, album) => format!(
            " Performed by {}{}.",
            performer,
            clause(" on the album ", album, "")
        ),
    };
    let recording = format!(
        "{}, {}. {}.{} [sound recording] {}: {}.",
        f.get("artist"),
        f.get("year"),
        f.get("title"),
        credits,
        f.get("city"),
        f.get("label")
    );
    if f.get("source_type") == "online" {
        format!(
            "{}{}",
            recording,
            trailing_availability(f.get("url"), f.get("access_date"))
        )
    } else {
        recording
    }
}

/// A radio programme heard on air, or one with a recording online.
enum Broadcast<'a> {
    OnAir,
    Online { url: &'a str, accessed: &'a str },
}

fn radio(f: &Fields<'_>) -> String {
    let head = format!(
        "{}, {}. {}, {}.",
        f.get("title"),
        f.get("year"),
        f.get("station"),
        f.get("date")
    );
    let broadcast = if f.has("url") {
        Broadcast::Online {
            url: f.get("url"),
            accessed: f.get("access_date"),
        }
    } else {
        Broadcast::OnAir
    };
    match broadcast {
        Broadcast::Online { url, accessed } => {
            format!("{}{}", head, trailing_availability(url, accessed))
        }
        Broadcast::OnAir => head,
    }
}

/// `Author, Year. <em>Title</em>. City: Publisher.` from `{prefix}_*` fields.
fn secondary_work(f: &Fields<'_>, prefix: &str) -> String {
    let field = |suffix: &str| f.get(&format!("{}_{}", prefix, suffix));
    format!(
        "{}, {}. {}. {}: {}.",
        field("author"),
        field("year"),
        em(field("title")),
        field("city"),
        field("publisher")
    )
}
