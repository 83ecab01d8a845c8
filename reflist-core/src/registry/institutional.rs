//! Interviews, conference papers, theses and official or institutional documents.

use super::{FieldSpec, Fields, TypeSpec};
use crate::format::{clause, em, person, trailing_availability};

pub(super) fn types() -> Vec<TypeSpec> {
    vec![
        TypeSpec::new(
            "interview",
            "Interview/Personal Communication",
            "For interviews and personal communications.",
            vec![
                FieldSpec::text("interviewee_surname", "Interviewee Surname")
                    .required()
                    .hint("e.g., Leon"),
                FieldSpec::text("interviewee_initials", "Interviewee Initials")
                    .required()
                    .hint("e.g., S."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2013"),
                FieldSpec::text("title", "Title/Position")
                    .required()
                    .hint("e.g., Political analyst, Institute for Security Studies"),
                FieldSpec::text("interviewer", "Interviewer Name")
                    .required()
                    .hint("e.g., John Boyd"),
                FieldSpec::select(
                    "medium",
                    "Medium",
                    &[
                        "Personal interview",
                        "Telephonic conversation",
                        "Email conversation",
                        "Radio",
                        "Forum message",
                    ],
                )
                .required()
                .hint("Interview format"),
                FieldSpec::text("broadcaster", "Broadcaster/Station")
                    .hint("e.g., Power FM (only for radio)"),
                FieldSpec::text("date", "Interview Date")
                    .required()
                    .hint("e.g., 10 June 2013"),
                FieldSpec::text("time", "Time").hint("e.g., 08:30 (only for radio)"),
            ],
            interview,
        ),
        TypeSpec::new(
            "conference",
            "Conference Proceedings",
            "For conference papers and proceedings.",
            vec![
                FieldSpec::text("author_surname", "Author Surname")
                    .required()
                    .hint("e.g., Anderson"),
                FieldSpec::text("author_initials", "Author Initials")
                    .required()
                    .hint("e.g., A.A."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2011"),
                FieldSpec::text("paper_title", "Paper Title")
                    .required()
                    .hint("e.g., Public Relations challenges in emerging countries"),
                FieldSpec::text("conference_title", "Conference Title")
                    .required()
                    .hint("e.g., Public Relations Possibilities Conference"),
                FieldSpec::text("location", "Conference Location")
                    .required()
                    .hint("e.g., New York, United States of America"),
                FieldSpec::text("dates", "Conference Dates")
                    .required()
                    .hint("e.g., 19-23 September 2011"),
                FieldSpec::text("city", "Publication City")
                    .required()
                    .hint("e.g., New York, NY"),
                FieldSpec::text("organizer", "Conference Organizer")
                    .required()
                    .hint("e.g., United Nations"),
            ],
            |f| {
                format!(
                    "{}, {}. {}. {}. {}, {}. {}: {}.",
                    person(f.get("author_surname"), f.get("author_initials")),
                    f.get("year"),
                    f.get("paper_title"),
                    em(f.get("conference_title")),
                    f.get("location"),
                    f.get("dates"),
                    f.get("city"),
                    f.get("organizer")
                )
            },
        ),
        TypeSpec::new(
            "thesis",
            "Dissertation/Thesis",
            "For unpublished dissertations and theses.",
            vec![
                FieldSpec::text("author_surname", "Author Surname")
                    .required()
                    .hint("e.g., Siewierski"),
                FieldSpec::text("author_initials", "Author Initials")
                    .required()
                    .hint("e.g., C.L."),
                FieldSpec::text("year", "Year").required().hint("e.g., 2015"),
                FieldSpec::text("title", "Thesis Title")
                    .required()
                    .hint("e.g., What teachers think about teacher unions"),
                FieldSpec::text("qualification", "Qualification")
                    .required()
                    .hint("e.g., MEd dissertation or PhD thesis"),
                FieldSpec::text("institution", "Institution")
                    .required()
                    .hint("e.g., University of the Witwatersrand"),
                FieldSpec::select("source_type", "Source Type", &["physical", "online"])
                    .required()
                    .hint("Physical or online version?"),
                FieldSpec::text("url", "URL").hint("Only if online"),
                FieldSpec::text("access_date", "Access Date")
                    .hint("e.g., 07 February 2025 (only if online)"),
            ],
            thesis,
        ),
        TypeSpec::new(
            "government",
            "Government Publication",
            "For government documents and publications.",
            vec![
                FieldSpec::text("department", "Government Department")
                    .required()
                    .hint("e.g., Department of Basic Education"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2013"),
                FieldSpec::text("title", "Document Title")
                    .required()
                    .hint("e.g., Dinaledi schools and the adopt-a-school programme"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., Pretoria"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("Usually the department name"),
            ],
            |f| {
                format!(
                    "{}, {}. {}. {}: {}.",
                    f.get("department"),
                    f.get("year"),
                    f.get("title"),
                    f.get("city"),
                    f.get("publisher")
                )
            },
        ),
        TypeSpec::new(
            "act",
            "Acts/Bills/White Papers",
            "For government Acts, Bills, and policy papers.",
            vec![
                FieldSpec::select(
                    "type",
                    "Document Type",
                    &["Act", "Bill", "White Paper", "Green Paper"],
                )
                .required()
                .hint("Type of document"),
                FieldSpec::text("title", "Title")
                    .required()
                    .hint("e.g., Higher Education Act or Labour Relations Amendment Bill"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2004"),
                FieldSpec::text("number", "Number/Chapter")
                    .hint("e.g., c.8 or No. 77D of 2001"),
                FieldSpec::text("city", "City of Publication")
                    .required()
                    .hint("e.g., London or Cape Town"),
                FieldSpec::text("publisher", "Publisher")
                    .required()
                    .hint("e.g., HMSO or Government Printers"),
            ],
            |f| {
                format!(
                    "{}{}, {}. {}: {}.",
                    f.get("title"),
                    clause(" ", f.get("number"), ""),
                    f.get("year"),
                    f.get("city"),
                    f.get("publisher")
                )
            },
        ),
        TypeSpec::new(
            "dictionary",
            "Dictionary/Encyclopedia",
            "For dictionaries and encyclopedias (print or online).",
            vec![
                FieldSpec::text("publisher", "Dictionary Publisher")
                    .required()
                    .hint("e.g., Oxford or Chambers"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2010"),
                FieldSpec::text("title", "Dictionary Title")
                    .required()
                    .hint("e.g., Oxford English Dictionary"),
                FieldSpec::select("source_type", "Source Type", &["print", "online"])
                    .required()
                    .hint("Print or online?"),
                FieldSpec::text("city", "City of Publication")
                    .hint("e.g., Oxford (for print only)"),
                FieldSpec::text("publisher_name", "Publisher Name")
                    .hint("e.g., Clarendon (for print only)"),
                FieldSpec::text("url", "URL").hint("Only for online"),
                FieldSpec::text("access_date", "Access Date")
                    .hint("e.g., 12 June 2011 (only for online)"),
            ],
            dictionary,
        ),
        TypeSpec::new(
            "module-guide",
            "Module Outline/Lecture Notes",
            "For institutional module guides and lecture materials.",
            vec![
                FieldSpec::text("institution", "Institution")
                    .required()
                    .hint("e.g., The Independent Institute of Education"),
                FieldSpec::text("year", "Year").required().hint("e.g., 2025"),
                FieldSpec::text("module_title", "Module Title")
                    .required()
                    .hint("e.g., Digital and academic literacies"),
                FieldSpec::text("module_code", "Module Code")
                    .required()
                    .hint("e.g., DIAL5111"),
                FieldSpec::select("source_type", "Source Type", &["print", "online"])
                    .required()
                    .hint("Print or online VLE?"),
                FieldSpec::text("url", "URL").hint("Only if available online"),
                FieldSpec::text("access_date", "Access Date")
                    .hint("e.g., 07 February 2025 (only if online)"),
            ],
            module_guide,
        ),
    ]
}

fn interview(f: &Fields<'_>) -> String {
    let (medium, broadcast) = match (f.get("medium"), f.get("broadcaster")) {
        ("radio", broadcaster) if !broadcaster.is_empty() => {
            ("[radio]".to_string(), format!(" {},", broadcaster))
        }
        (medium, _) => (format!("[{}]", medium), String::new()),
    };
    format!(
        "{}, {}. {}. Interviewed by {}. {}{} {}{}.",
        person(f.get("interviewee_surname"), f.get("interviewee_initials")),
        f.get("year"),
        f.get("title"),
        f.get("interviewer"),
        medium,
        broadcast,
        f.get("date"),
        clause(", ", f.get("time"), "")
    )
}

/// Physical copy vs. online copy of a source with an optional access clause.
enum Access<'a> {
    Physical,
    Online { url: &'a str, accessed: &'a str },
}

impl<'a> Access<'a> {
    fn from_fields(f: &Fields<'a>, online_value: &str) -> Self {
        if f.get("source_type") == online_value {
            Access::Online {
                url: f.get("url"),
                accessed: f.get("access_date"),
            }
        } else {
            Access::Physical
        }
    }
}

fn thesis(f: &Fields<'_>) -> String {
    let head = format!(
        "{}, {}. {}. {}. {}.",
        person(f.get("author_surname"), f.get("author_initials")),
        f.get("year"),
        f.get("title"),
        f.get("qualification"),
        f.get("institution")
    );
    match Access::from_fields(f, "online") {
        Access::Online { url, accessed } => {
            format!("{}{}", head, trailing_availability(url, accessed))
        }
        Access::Physical => head,
    }
}

fn dictionary(f: &Fields<'_>) -> String {
    let head = format!("{}, {}. {}.", f.get("publisher"), f.get("year"), em(f.get("title")));
    let imprint = format!("{}: {}.", f.get("city"), f.get("publisher_name"));
    match Access::from_fields(f, "online") {
        Access::Online { url, accessed } => format!(
            "{} [online] {}{}",
            head,
            imprint,
            trailing_availability(url, accessed)
        ),
        Access::Physical => format!("{} {}", head, imprint),
    }
}

fn module_guide(f: &Fields<'_>) -> String {
    let institution = f.get("institution");
    let lead = format!("{}, {}. {}", institution, f.get("year"), f.get("module_title"));
    match Access::from_fields(f, "online") {
        Access::Online { url, accessed } => format!(
            "{} [{}]. [online via internal VLE] {}.{}",
            lead,
            f.get("module_code"),
            institution,
            trailing_availability(url, accessed)
        ),
        Access::Physical => format!(
            "{} [{} Module Outline]. {}: Unpublished.",
            lead,
            f.get("module_code"),
            institution
        ),
    }
}
