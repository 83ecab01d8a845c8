use super::*;
use insta::assert_snapshot;
use std::collections::HashSet;

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs.iter().copied().collect()
}

fn render(key: &str, pairs: &[(&str, &str)]) -> Result<String, FormatError> {
    let spec = registry().get(key)?;
    let normalized = spec.normalize(&values(pairs))?;
    spec.render(&normalized)
}

/// Required text fields set to "X", optional fields left empty.
fn minimal_input(spec: &TypeSpec) -> FieldValues {
    spec.fields
        .iter()
        .filter(|f| f.required && f.options().is_empty())
        .map(|f| (f.name, "X"))
        .collect()
}

const ARTIFACTS: &[&str] = &[
    "..",
    " ,",
    ",,",
    "  ",
    ". .",
    "()",
    "<em></em>",
    "&lt;&gt;",
    "[Accessed ]",
];

#[test]
fn test_registry_order() {
    let keys: Vec<_> = registry().list().map(|(key, _)| key).collect();
    assert_eq!(keys.len(), 40);
    assert_eq!(
        &keys[..5],
        &["book-one", "book-multiple", "book-four-plus", "book-same-author", "book-editor"]
    );
    assert_eq!(keys.last(), Some(&"secondary"));
    assert_eq!(registry().len(), 40);
}

#[test]
fn test_field_names_unique() {
    for spec in registry().iter() {
        let mut seen = HashSet::new();
        for field in &spec.fields {
            assert!(seen.insert(field.name), "{} repeats {}", spec.key, field.name);
        }
    }
}

#[test]
fn test_every_type_renders_without_artifacts() {
    for spec in registry().iter() {
        let base = minimal_input(spec);
        let select = spec.fields.iter().find(|f| !f.options().is_empty());
        let variants: Vec<FieldValues> = match select {
            Some(field) => field
                .options()
                .iter()
                .map(|opt| {
                    let mut input = base.clone();
                    input.insert(field.name, *opt);
                    input
                })
                .collect(),
            None => vec![base],
        };

        for input in variants {
            let normalized = spec.normalize(&input).unwrap();
            let text = spec.render(&normalized).unwrap();
            for artifact in ARTIFACTS {
                assert!(
                    !text.contains(artifact),
                    "{} rendered {:?} containing {:?}",
                    spec.key,
                    text,
                    artifact
                );
            }
            assert!(text.ends_with('.'), "{} rendered {:?}", spec.key, text);
        }
    }
}

#[test]
fn test_book_one_author() {
    let text = render(
        "book-one",
        &[
            ("surname", "Hüther"),
            ("initials", "G."),
            ("year", "2006"),
            ("title", "The compassionate brain"),
            ("city", "Boston"),
            ("publisher", "Trumpeter"),
        ],
    )
    .unwrap();
    assert_eq!(
        text,
        "Hüther, G., 2006. <em>The compassionate brain</em>. Boston: Trumpeter."
    );
}

#[test]
fn test_website_missing_year() {
    let text = render(
        "website",
        &[
            ("author", "WHO"),
            ("year", ""),
            ("title", "WHO calls on countries"),
            ("url", "http://x"),
            ("access_date", "20 November 2015"),
        ],
    )
    .unwrap();
    assert_eq!(
        text,
        "WHO, [s.a.]. WHO calls on countries. [online] Available at: &lt;http://x&gt; [Accessed 20 November 2015]."
    );
}

#[test]
fn test_book_multiple_with_edition() {
    let text = render(
        "book-multiple",
        &[
            ("author1_surname", "Strunk"),
            ("author1_initials", "W."),
            ("author2_surname", "White"),
            ("author2_initials", "E.B."),
            ("year", "2023"),
            ("title", "The elements of style"),
            ("edition", "2"),
            ("city", "Massachusetts"),
            ("publisher", "Allan and Bacon"),
        ],
    )
    .unwrap();
    assert!(text.contains("2<sup>nd</sup> ed. "));
    assert_snapshot!(text, @"Strunk, W. and White, E.B., 2023. <em>The elements of style</em>. 2<sup>nd</sup> ed. Massachusetts: Allan and Bacon.");
}

#[test]
fn test_journal_online() {
    let text = render(
        "journal-online",
        &[
            ("surname", "Scott"),
            ("initials", "D."),
            ("year", "2009"),
            ("article_title", "Learning in the field"),
            ("journal_title", "Education Review"),
            ("volume", "42"),
            ("issue", "1"),
            ("pages", "5-9"),
            ("url", "http://example.org/a"),
            ("access_date", "22 July 2023"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"Scott, D., 2009. Learning in the field. <em>Education Review</em>, [e-journal] 42(1), pp.5-9. Available at: &lt;http://example.org/a&gt; [Accessed 22 July 2023].");
}

#[test]
fn test_radio_interview_names_broadcaster() {
    let text = render(
        "interview",
        &[
            ("interviewee_surname", "Leon"),
            ("interviewee_initials", "S."),
            ("year", "2013"),
            ("title", "Political analyst"),
            ("interviewer", "John Boyd"),
            ("medium", "Radio"),
            ("broadcaster", "Power FM"),
            ("date", "10 June 2013"),
            ("time", "08:30"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"Leon, S., 2013. Political analyst. Interviewed by John Boyd. [radio] Power FM, 10 June 2013, 08:30.");
}

#[test]
fn test_app_store_label() {
    let text = render(
        "app",
        &[
            ("developer", "Skyscape"),
            ("year", "2010"),
            ("title", "Skyscape medical resources"),
            ("version", "1.9.11"),
            ("source", "google play"),
            ("access_date", "22 July 2021"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"Skyscape, 2010. Skyscape medical resources. Version 1.9.11. [App]. Available from Google Play [Accessed 22 July 2021].");
}

#[test]
fn test_online_newspaper_falls_back_to_publication() {
    let text = render(
        "newspaper",
        &[
            ("year", "2014"),
            ("article_title", "Rates hold"),
            ("publication", "Business Day"),
            ("source_type", "online"),
            ("date", "3 March"),
            ("url", "http://bd.example"),
            ("access_date", "4 March 2014"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"Business Day, 2014. Rates hold. <em>Business Day</em>, [online] 3 March. Available at: &lt;http://bd.example&gt; [Accessed 4 March 2014].");
}

#[test]
fn test_unknown_type_key() {
    assert_eq!(
        registry().get("pamphlet").unwrap_err(),
        FormatError::UnknownTypeKey("pamphlet".to_string())
    );
}

#[test]
fn test_missing_required_field() {
    let err = render("cd", &[("artist", "Oasis"), ("year", "1994")]).unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingRequiredField {
            type_key: "cd".to_string(),
            field: "title".to_string(),
        }
    );
}

#[test]
fn test_unknown_field_rejected() {
    let err = render("cd", &[("artist", "Oasis"), ("colour", "blue")]).unwrap_err();
    assert_eq!(
        err,
        FormatError::UnknownField {
            type_key: "cd".to_string(),
            field: "colour".to_string(),
        }
    );
}

#[test]
fn test_invalid_option() {
    let spec = registry().get("thesis").unwrap();
    let err = spec
        .normalize(&values(&[("source_type", "carrier pigeon")]))
        .unwrap_err();
    assert!(matches!(err, FormatError::InvalidOption { ref field, .. } if field == "source_type"));
}

#[test]
fn test_select_stored_lowercase() {
    let spec = registry().get("interview").unwrap();
    let normalized = spec
        .normalize(&values(&[("medium", "Personal Interview")]))
        .unwrap();
    assert_eq!(normalized.get("medium"), "personal interview");
}

#[test]
fn test_normalize_fills_declared_fields() {
    let spec = registry().get("book-one").unwrap();
    let normalized = spec.normalize(&FieldValues::new()).unwrap();
    assert_eq!(normalized.len(), spec.fields.len());
    assert_eq!(normalized.get("year"), "[s.a.]");
    assert_eq!(normalized.get("city"), "[s.l.]");
    assert_eq!(normalized.get("publisher"), "[s.n.]");
    assert_eq!(normalized.get("edition"), "");
}

#[test]
fn test_type_normalize_idempotent() {
    for spec in registry().iter() {
        let once = spec.normalize(&minimal_input(spec)).unwrap();
        let twice = spec.normalize(&once).unwrap();
        assert_eq!(once, twice, "{}", spec.key);
    }
}

/// Render `base` with `extra` fields added.
fn render_with<'a>(
    key: &str,
    base: &[(&'a str, &'a str)],
    extra: &[(&'a str, &'a str)],
) -> String {
    let pairs: Vec<(&str, &str)> = base.iter().chain(extra).copied().collect();
    render(key, &pairs).unwrap()
}

const LENNON: &[(&str, &str)] = &[
    ("artist", "Lennon, J."),
    ("year", "1970"),
    ("title", "Love"),
    ("city", "London"),
    ("label", "Apple"),
];

#[test]
fn test_sound_credits() {
    let physical = [("source_type", "physical")];
    let album = render_with("sound", LENNON, &[physical[0], ("album", "Plastic Ono Band")]);
    assert_snapshot!(album, @"Lennon, J., 1970. Love. on the album Plastic Ono Band. [sound recording] London: Apple.");

    let performer = render_with("sound", LENNON, &[physical[0], ("performer", "John Lennon")]);
    assert_snapshot!(performer, @"Lennon, J., 1970. Love. Performed by John Lennon. [sound recording] London: Apple.");

    let both = render_with(
        "sound",
        LENNON,
        &[
            physical[0],
            ("performer", "John Lennon"),
            ("album", "Plastic Ono Band"),
        ],
    );
    assert_snapshot!(both, @"Lennon, J., 1970. Love. Performed by John Lennon on the album Plastic Ono Band. [sound recording] London: Apple.");
}

#[test]
fn test_sound_online() {
    let text = render_with(
        "sound",
        LENNON,
        &[
            ("source_type", "online"),
            ("url", "http://music.example"),
            ("access_date", "3 May 2021"),
        ],
    );
    assert_snapshot!(text, @"Lennon, J., 1970. Love. [sound recording] London: Apple. Available at: &lt;http://music.example&gt; [Accessed 3 May 2021].");
}

#[test]
fn test_book_same_author_year_letter() {
    let text = render(
        "book-same-author",
        &[
            ("surname", "Smith"),
            ("initials", "R.G."),
            ("year", "2015"),
            ("year_letter", "a"),
            ("title", "Changing policy paradigms"),
            ("city", "Cape Town"),
            ("publisher", "Education House"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"Smith, R.G., 2015a. <em>Changing policy paradigms</em>. Cape Town: Education House.");
}

#[test]
fn test_book_four_plus_additional_authors() {
    let text = render(
        "book-four-plus",
        &[
            ("author1_surname", "Green"),
            ("author1_initials", "G."),
            ("author2_surname", "Pecar"),
            ("author2_initials", "B."),
            ("author3_surname", "Santana"),
            ("author3_initials", "L."),
            ("author4_surname", "Burke"),
            ("author4_initials", "A."),
            ("additional_authors", "Lee, K."),
            ("year", "2014"),
            ("title", "Statistics for the social sciences"),
            ("city", "Cape Town"),
            ("publisher", "Oxford University Press"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"Green, G., Pecar, B., Santana, L. and Burke, A., Lee, K., 2014. <em>Statistics for the social sciences</em>. Cape Town: Oxford University Press.");
}

const CHAPTER: &[(&str, &str)] = &[
    ("chapter_author_surname", "Davis"),
    ("chapter_author_initials", "C."),
    ("year", "2014"),
    ("chapter_title", "The aims of research"),
    ("editor_initials", "F."),
    ("editor_surname", "du Plooy-Cilliers"),
    ("book_title", "Research matters"),
    ("city", "Claremont"),
    ("publisher", "Juta"),
    ("pages", "72-81"),
];

#[test]
fn test_chapter_editors_and_number() {
    let plain = render_with("chapter", CHAPTER, &[]);
    assert_snapshot!(plain, @"Davis, C., 2014. The aims of research. In: F. du Plooy-Cilliers, ed. <em>Research matters</em>. Claremont: Juta, pp.72-81.");

    let full = render_with(
        "chapter",
        CHAPTER,
        &[
            ("additional_editors", "C. Davis and R.M. Bezuidenhout"),
            ("chapter_number", "5"),
        ],
    );
    assert_snapshot!(full, @"Davis, C., 2014. The aims of research. In: F. du Plooy-Cilliers, C. Davis and R.M. Bezuidenhout, eds. <em>Research matters</em>. Claremont: Juta, Chapter 5: pp.72-81.");
}

const POEM: &[(&str, &str)] = &[
    ("poet_surname", "Mhlophe"),
    ("poet_initials", "G."),
    ("year", "2013"),
    ("poem_title", "Say no"),
];

#[test]
fn test_poem_from_book() {
    let full = render_with(
        "poem",
        POEM,
        &[
            ("source_type", "book"),
            ("book_editor", "H. Moffett"),
            ("book_title", "Seasons come to pass"),
            ("city", "Cape Town"),
            ("publisher", "Oxford University Press"),
            ("pages", "271-272"),
        ],
    );
    assert_snapshot!(full, @"Mhlophe, G., 2013. Say no. In: H. Moffett, <em>Seasons come to pass</em>. Cape Town: Oxford University Press, pp.271-272.");

    let editor_only = render_with(
        "poem",
        POEM,
        &[("source_type", "book"), ("book_editor", "H. Moffett")],
    );
    assert_snapshot!(editor_only, @"Mhlophe, G., 2013. Say no. In: H. Moffett. [s.l.]: [s.n.].");

    let title_only = render_with(
        "poem",
        POEM,
        &[("source_type", "book"), ("book_title", "Seasons come to pass")],
    );
    assert_snapshot!(title_only, @"Mhlophe, G., 2013. Say no. In: <em>Seasons come to pass</em>. [s.l.]: [s.n.].");

    let bare = render_with("poem", POEM, &[("source_type", "book")]);
    assert_snapshot!(bare, @"Mhlophe, G., 2013. Say no. [s.l.]: [s.n.].");
}

#[test]
fn test_poem_from_website() {
    let text = render_with(
        "poem",
        POEM,
        &[
            ("source_type", "website"),
            ("url", "http://poems.example"),
            ("access_date", "09 February 2018"),
        ],
    );
    assert_snapshot!(text, @"Mhlophe, G., 2013. Say no. [online poem]. Available at: &lt;http://poems.example&gt; [Accessed 09 February 2018].");
}

#[test]
fn test_artwork_dimensions() {
    let text = render(
        "artwork",
        &[
            ("artist_surname", "Picasso"),
            ("artist_initials", "P."),
            ("year", "1907"),
            ("title", "Les demoiselles d'Avignon"),
            ("medium", "Oil on canvas"),
            ("dimensions", "243.9 x 233.9cm"),
            ("location", "Museum of Modern Art, New York"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"Picasso, P., 1907. Les demoiselles d'Avignon. Oil on canvas. 243.9 x 233.9cm. Museum of Modern Art, New York.");
}

#[test]
fn test_photograph_collection() {
    let text = render(
        "photograph",
        &[
            ("photographer", "Beaton, C."),
            ("year", "1956"),
            ("title", "Marilyn Monroe"),
            ("source_type", "physical"),
            ("collection", "Marilyn Monroe's own private collection"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"Beaton, C., 1956. Marilyn Monroe. [photograph] (Marilyn Monroe's own private collection).");
}

#[test]
fn test_code_version() {
    let text = render(
        "code",
        &[
            ("author", "Smith, J."),
            ("year", "2011"),
            ("title", "Graphics Drawer source code"),
            ("version", "2.0"),
            ("url", "http://code.example"),
            ("access_date", "10 May 2021"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"Smith, J., 2011. Graphics Drawer source code (Version 2.0) [Source code]. Available at: &lt;http://code.example&gt; [Accessed 10 May 2021].");
}

const SKYSCAPE: &[(&str, &str)] = &[
    ("developer", "Skyscape"),
    ("year", "2010"),
    ("title", "Skyscape medical resources"),
    ("access_date", "22 July 2021"),
];

#[test]
fn test_app_url_source() {
    let text = render_with(
        "app",
        SKYSCAPE,
        &[
            ("version", "1.9.11"),
            ("source", "URL"),
            ("url", "http://app.example"),
        ],
    );
    assert_snapshot!(text, @"Skyscape, 2010. Skyscape medical resources. Version 1.9.11. [App]. Available at: &lt;http://app.example&gt; [Accessed 22 July 2021].");

    let unversioned = render_with("app", SKYSCAPE, &[("source", "apple app store")]);
    assert_snapshot!(unversioned, @"Skyscape, 2010. Skyscape medical resources. [App]. Available from Apple App Store [Accessed 22 July 2021].");
}

#[test]
fn test_act_number() {
    let base = [
        ("type", "Act"),
        ("title", "Higher Education Act"),
        ("year", "2004"),
        ("city", "London"),
        ("publisher", "HMSO"),
    ];
    assert_snapshot!(render_with("act", &base, &[("number", "c.8")]), @"Higher Education Act c.8, 2004. London: HMSO.");
    assert_snapshot!(render_with("act", &base, &[]), @"Higher Education Act, 2004. London: HMSO.");
}

const PODCAST: &[(&str, &str)] = &[
    ("presenter", "Yesterday in Parliament"),
    ("year", "2015"),
    ("date", "18 June"),
    ("url", "http://pod.example"),
    ("access_date", "22 July 2021"),
];

#[test]
fn test_podcast_titles() {
    let both = render_with(
        "podcast",
        PODCAST,
        &[("title", "Lords debate"), ("series_title", "Today in Parliament")],
    );
    assert_snapshot!(both, @"Yesterday in Parliament, 2015. Lords debate. <em>Today in Parliament</em>. [podcast]. 18 June. Available at: &lt;http://pod.example&gt; [Accessed 22 July 2021].");

    let episode = render_with("podcast", PODCAST, &[("title", "Lords debate")]);
    assert_snapshot!(episode, @"Yesterday in Parliament, 2015. Lords debate. [podcast]. 18 June. Available at: &lt;http://pod.example&gt; [Accessed 22 July 2021].");

    let series = render_with("podcast", PODCAST, &[("series_title", "Today in Parliament")]);
    assert_snapshot!(series, @"Yesterday in Parliament, 2015. <em>Today in Parliament</em>. [podcast]. 18 June. Available at: &lt;http://pod.example&gt; [Accessed 22 July 2021].");
}

#[test]
fn test_radio_url_without_access_date() {
    let text = render(
        "radio",
        &[
            ("title", "The Sun"),
            ("year", "2015"),
            ("station", "BBC Radio 4"),
            ("date", "1 January"),
            ("url", "http://radio.example"),
        ],
    )
    .unwrap();
    assert_snapshot!(text, @"The Sun, 2015. BBC Radio 4, 1 January. Available at: &lt;http://radio.example&gt;.");
}

const THESIS: &[(&str, &str)] = &[
    ("author_surname", "Siewierski"),
    ("author_initials", "C.L."),
    ("year", "2015"),
    ("title", "What teachers think about teacher unions"),
    ("qualification", "MEd dissertation"),
    ("institution", "University of the Witwatersrand"),
    ("source_type", "online"),
];

#[test]
fn test_thesis_online_availability() {
    let full = render_with(
        "thesis",
        THESIS,
        &[("url", "http://wiredspace.example"), ("access_date", "07 February 2025")],
    );
    assert_snapshot!(full, @"Siewierski, C.L., 2015. What teachers think about teacher unions. MEd dissertation. University of the Witwatersrand. Available at: &lt;http://wiredspace.example&gt; [Accessed 07 February 2025].");

    let accessed_only = render_with("thesis", THESIS, &[("access_date", "07 February 2025")]);
    assert_snapshot!(accessed_only, @"Siewierski, C.L., 2015. What teachers think about teacher unions. MEd dissertation. University of the Witwatersrand. [Accessed 07 February 2025].");

    let neither = render_with("thesis", THESIS, &[]);
    assert_snapshot!(neither, @"Siewierski, C.L., 2015. What teachers think about teacher unions. MEd dissertation. University of the Witwatersrand.");
}
