//! Games, artworks, images, social media posts, film and television.

use super::{FieldSpec, Fields, TypeSpec};
use crate::format::{availability, clause, person};
use crate::normalize::NO_YEAR;

pub(super) fn types() -> Vec<TypeSpec> {
    vec![
        TypeSpec::new(
            "board-game",
            "Card/Board Game",
            "For board games and card games.",
            vec![
                FieldSpec::text("author", "Author/Publisher")
                    .required()
                    .hint("e.g., Horton, M."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2019"),
                FieldSpec::text("title", "Game Title")
                    .required()
                    .hint("e.g., We're doomed! the game of global panic"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., Hillside, NY"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., Breaking Games"),
            ],
            |f| {
                format!(
                    "{}, {}. {} [board game]. {}: {}.",
                    f.get("author"),
                    f.get("year"),
                    f.get("title"),
                    f.get("city"),
                    f.get("publisher")
                )
            },
        ),
        TypeSpec::new(
            "video-game",
            "Computer/Online Video Game",
            "For computer and online video games.",
            vec![
                FieldSpec::text("author", "Author/Publisher")
                    .required()
                    .hint("e.g., Sony"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2017"),
                FieldSpec::text("title", "Game Title")
                    .required()
                    .hint("e.g., Fortnite Battle Royale"),
                FieldSpec::text("platform", "Platform")
                    .required()
                    .hint("e.g., PS4, PC, Xbox"),
                FieldSpec::text("city", "City").required().hint("e.g., Poland"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., Gearbox"),
                FieldSpec::text("url", "URL").required().hint("Game URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 23 March 2025"),
            ],
            |f| {
                format!(
                    "{}, {}. {} [online digital game] {}. {}: {}. Available at: &lt;{}&gt; [Accessed {}].",
                    f.get("author"),
                    f.get("year"),
                    f.get("title"),
                    f.get("platform"),
                    f.get("city"),
                    f.get("publisher"),
                    f.get("url"),
                    f.get("access_date")
                )
            },
        ),
        TypeSpec::new(
            "artwork",
            "Artwork/Image/Figure",
            "For artworks, paintings, and physical images.",
            vec![
                FieldSpec::text("artist_surname", "Artist Surname")
                    .required()
                    .hint("e.g., Picasso"),
                FieldSpec::text("artist_initials", "Artist Initials")
                    .required()
                    .hint("e.g., P."),
                FieldSpec::text("year", "Year").required().hint("e.g., 1907"),
                FieldSpec::text("title", "Artwork Title")
                    .required()
                    .hint("e.g., Les demoiselles d'Avignon"),
                FieldSpec::text("medium", "Medium")
                    .required()
                    .hint("e.g., Oil on canvas"),
                FieldSpec::text("dimensions", "Dimensions").hint("e.g., 243.9 x 233.9cm"),
                FieldSpec::text("location", "Location")
                    .required()
                    .hint("e.g., Museum of Modern Art, New York"),
            ],
            |f| {
                format!(
                    "{}, {}. {}. {}.{} {}.",
                    person(f.get("artist_surname"), f.get("artist_initials")),
                    f.get("year"),
                    f.get("title"),
                    f.get("medium"),
                    clause(" ", f.get("dimensions"), "."),
                    f.get("location")
                )
            },
        ),
        TypeSpec::new(
            "photograph",
            "Photograph",
            "For photographs from books, collections, or online.",
            vec![
                FieldSpec::text("photographer", "Photographer Name")
                    .required()
                    .hint("e.g., Beaton, C."),
                FieldSpec::text("year", "Year").required().hint("e.g., 1956"),
                FieldSpec::text("title", "Photo Title/Description")
                    .required()
                    .hint("e.g., Marilyn Monroe"),
                FieldSpec::select("source_type", "Source Type", &["physical", "online"])
                    .required()
                    .hint("Physical collection or online?"),
                FieldSpec::text("collection", "Collection Details")
                    .hint("e.g., Marilyn Monroe's own private collection"),
                FieldSpec::text("url", "URL").hint("Only if online"),
                FieldSpec::text("access_date", "Access Date")
                    .hint("e.g., 18 June 2008 (only if online)"),
            ],
            photograph,
        ),
        TypeSpec::new(
            "online-image",
            "Online Image/Figure",
            "For images and figures found online.",
            vec![
                FieldSpec::text("creator", "Creator/Author")
                    .hint("e.g., Khokhlov, A. (leave blank if unknown)"),
                FieldSpec::text("year", "Year").hint("e.g., 2015 (use [s.a.] if unknown)"),
                FieldSpec::text("title", "Image Title")
                    .required()
                    .hint("e.g., The Art of Face - Optical Illusion nr.13"),
                FieldSpec::text("url", "URL")
                    .required()
                    .hint("Paste the image URL"),
                FieldSpec::text("access_date", "Access Date")
                    .required()
                    .hint("e.g., 18 June 2015"),
            ],
            |f| {
                let year = if f.has("year") { f.get("year") } else { NO_YEAR };
                format!(
                    "{}{}. {}. [electronic print] Available at: &lt;{}&gt; [Accessed {}].",
                    clause("", f.get("creator"), ", "),
                    year,
                    f.get("title"),
                    f.get("url"),
                    f.get("access_date")
                )
            },
        ),
        social_post(
            "instagram",
            "Instagram Post",
            "For Instagram posts.",
            ("Username/Handle", "e.g., @helmafashionsa or Design Thinking Comic"),
            ["e.g., 2020", "e.g., 11 November", "Instagram post URL", "e.g., 11 November 2010"],
            |f| social_citation(f, " [Instagram]."),
        ),
        social_post(
            "facebook",
            "Facebook Post",
            "For Facebook posts.",
            ("Username/Page Name", "e.g., @helmafashionsa"),
            ["e.g., 2020", "e.g., May 7", "Facebook post URL", "e.g., 22 July 2021"],
            |f| social_citation(f, ". [Facebook]."),
        ),
        social_post(
            "x-post",
            "X (Twitter) Post",
            "For posts on X (formerly Twitter).",
            ("Username/Handle", "e.g., Pixels Graphic Design or @username"),
            ["e.g., 2025", "e.g., June 14", "X post URL", "e.g., 07 February 2025"],
            |f| social_citation(f, " [X]."),
        ),
        social_post(
            "tiktok",
            "TikTok Post",
            "For TikTok videos.",
            ("Username/Creator", "e.g., Deliveroo"),
            ["e.g., 2021", "e.g., 8 April", "TikTok video URL", "e.g., 22 July 2021"],
            |f| social_citation(f, ". [TikTok]."),
        ),
        TypeSpec::new(
            "film",
            "Film (Cinema/DVD/Video)",
            "For films in various formats.",
            vec![
                FieldSpec::text("title", "Film Title")
                    .required()
                    .hint("e.g., The Great Gatsby"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2013"),
                FieldSpec::text("director", "Director Name")
                    .required()
                    .hint("e.g., Baz Luhrmann"),
                FieldSpec::text("city", "City/Country")
                    .required()
                    .hint("e.g., California"),
                FieldSpec::text("distributor", "Distribution Company")
                    .required()
                    .hint("e.g., Warner Bros."),
            ],
            |f| {
                format!(
                    "{}, {}. [film] Directed by {}. {}: {}.",
                    f.get("title"),
                    f.get("year"),
                    f.get("director"),
                    f.get("city"),
                    f.get("distributor")
                )
            },
        ),
        TypeSpec::new(
            "tv-series",
            "TV Series/Episode",
            "For television series and specific episodes.",
            vec![
                FieldSpec::text("series_title", "Series Title")
                    .required()
                    .hint("e.g., Fringe"),
                FieldSpec::text("year", "Year of Broadcast")
                    .required()
                    .hint("e.g., 2012"),
                FieldSpec::text("episode_title", "Episode Title")
                    .required()
                    .hint("e.g., The bullet that saved the world"),
                FieldSpec::text("series_number", "Series Number")
                    .required()
                    .hint("e.g., 5"),
                FieldSpec::text("episode_number", "Episode Number")
                    .required()
                    .hint("e.g., 4"),
                FieldSpec::text("director", "Director")
                    .required()
                    .hint("e.g., David Straiton"),
                FieldSpec::text("writer", "Writer")
                    .required()
                    .hint("e.g., Alison Schapker"),
                FieldSpec::text("city", "City").required().hint("e.g., California"),
                FieldSpec::text("broadcaster", "Broadcasting Organization")
                    .required()
                    .hint("e.g., Fox"),
            ],
            |f| {
                format!(
                    "{}, {}. {}, Series {} episode {}. Directed by {}. Written by {}. [DVD]. First broadcast {}. {}: {}.",
                    f.get("series_title"),
                    f.get("year"),
                    f.get("episode_title"),
                    f.get("series_number"),
                    f.get("episode_number"),
                    f.get("director"),
                    f.get("writer"),
                    f.get("year"),
                    f.get("city"),
                    f.get("broadcaster")
                )
            },
        ),
    ]
}

/// Social media posts share one schema; only labels and hints differ.
///
/// `hints` are for year, post date, URL and access date, in that order.
fn social_post(
    key: &'static str,
    title: &'static str,
    info: &'static str,
    (user_label, user_hint): (&'static str, &'static str),
    hints: [&'static str; 4],
    format: fn(&Fields<'_>) -> String,
) -> TypeSpec {
    let [year_hint, date_hint, url_hint, access_hint] = hints;
    let post_label = if key == "tiktok" {
        "Video Title/Description"
    } else {
        "Post Title/First Words"
    };
    TypeSpec::new(
        key,
        title,
        info,
        vec![
            FieldSpec::text("username", user_label)
                .required()
                .hint(user_hint),
            FieldSpec::text("year", "Year").required().hint(year_hint),
            FieldSpec::text("title", post_label)
                .required()
                .hint("First 20 words or description"),
            FieldSpec::text("date", "Post Date").required().hint(date_hint),
            FieldSpec::text("url", "URL").required().hint(url_hint),
            FieldSpec::text("access_date", "Access Date")
                .required()
                .hint(access_hint),
        ],
        format,
    )
}

/// `platform` is the text between the title and the post date, e.g. `" [X]."`.
fn social_citation(f: &Fields<'_>, platform: &str) -> String {
    format!(
        "{}, {}. {}{} {}. Available at: &lt;{}&gt; [Accessed {}].",
        f.get("username"),
        f.get("year"),
        f.get("title"),
        platform,
        f.get("date"),
        f.get("url"),
        f.get("access_date")
    )
}

enum PhotoSource<'a> {
    Physical { collection: &'a str },
    Online { url: &'a str, accessed: &'a str },
}

fn photograph(f: &Fields<'_>) -> String {
    let head = format!("{}, {}. {}.", f.get("photographer"), f.get("year"), f.get("title"));
    let source = if f.get("source_type") == "physical" {
        PhotoSource::Physical {
            collection: f.get("collection"),
        }
    } else {
        PhotoSource::Online {
            url: f.get("url"),
            accessed: f.get("access_date"),
        }
    };
    match source {
        PhotoSource::Physical { collection } => {
            format!("{} [photograph]{}.", head, clause(" (", collection, ")"))
        }
        PhotoSource::Online { url, accessed } => match availability(url, accessed) {
            Some(avail) => format!("{} [electronic print] {}", head, avail),
            None => format!("{} [electronic print].", head),
        },
    }
}
