//! Tests for grandfathered whole-tag handling.

use langtag::grandfathered::{self, GrandfatheredOutcome};
use langtag::{Language, LanguageTag, ParseError, Script};

#[test]
fn grandfathered_tags_map_to_languages() {
    let cases = [
        ("i-klingon", Language::Tlh),
        ("zh-min-nan", Language::Nan),
        ("zh-xiang", Language::Hsn),
        ("art-lojban", Language::Jbo),
        ("zh-guoyu", Language::Cmn),
        ("zh-hakka", Language::Hak),
        ("i-navajo", Language::Nv),
        ("no-bok", Language::Nb),
        ("sgn-BE-FR", Language::Sfb),
    ];
    for (text, expected) in cases {
        assert_eq!(
            LanguageTag::parse(text).unwrap(),
            LanguageTag::from_language(expected),
            "{text}"
        );
    }
}

#[test]
fn grandfathered_equals_its_replacement() {
    for (text, replacement) in [
        ("i-klingon", "tlh"),
        ("zh-min-nan", "nan"),
        ("zh-xiang", "hsn"),
        ("art-lojban", "jbo"),
        ("zh-CHS", "zh-Hans"),
        ("zh-CHT", "zh-Hant"),
    ] {
        assert_eq!(
            LanguageTag::parse(text).unwrap(),
            LanguageTag::parse(replacement).unwrap(),
            "{text}"
        );
    }
}

#[test]
fn legacy_chinese_culture_names() {
    let simplified = LanguageTag::parse("zh-CHS").unwrap();
    assert_eq!(simplified.language(), Some(Language::Zh));
    assert_eq!(simplified.script(), Some(Script::Hans));
    assert_eq!(LanguageTag::parse("zh-cht").unwrap().to_string(), "zh-Hant");
}

#[test]
fn grandfathered_matching_ignores_case() {
    assert_eq!(
        LanguageTag::parse("I-KLINGON").unwrap(),
        LanguageTag::from_language(Language::Tlh)
    );
    assert_eq!(
        LanguageTag::parse("Art-Lojban").unwrap(),
        LanguageTag::from_language(Language::Jbo)
    );
}

#[test]
fn unsupported_grandfathered_tags() {
    for text in ["en-GB-oed", "i-default", "cel-gaulish", "zh-min", "i-mingo"] {
        let err = LanguageTag::parse(text).unwrap_err();
        assert!(err.is_unsupported(), "'{text}' gave {err:?}");
        assert!(!err.is_invalid_syntax(), "'{text}'");
        assert_eq!(
            err,
            ParseError::UnsupportedTag {
                tag: text.to_string()
            }
        );
        assert_eq!(err.syntax_error(), None);
    }
}

#[test]
fn every_canonical_replacement_parses() {
    for tag in grandfathered::tags() {
        match grandfathered::resolve(tag) {
            GrandfatheredOutcome::Canonical(replacement) => {
                let parsed = LanguageTag::parse(replacement)
                    .unwrap_or_else(|e| panic!("replacement '{replacement}' for '{tag}': {e}"));
                assert_eq!(LanguageTag::parse(tag).unwrap(), parsed);
            }
            GrandfatheredOutcome::RecognizedUnsupported => {
                assert!(LanguageTag::parse(tag).unwrap_err().is_unsupported());
            }
            GrandfatheredOutcome::NotGrandfathered => panic!("'{tag}' is in the table"),
        }
    }
}

#[test]
fn near_misses_use_the_regular_grammar() {
    // `zh-min-nan` is grandfathered, but extending it is not.
    assert!(
        LanguageTag::parse("zh-min-nan-TW")
            .unwrap_err()
            .is_invalid_syntax()
    );
    // `en-GB` alone is an ordinary tag.
    assert_eq!(LanguageTag::parse("en-GB").unwrap().to_string(), "en-GB");
}
