use std::collections::HashSet;

use langtag_registry::grandfathered::{self, GrandfatheredOutcome};
use langtag_registry::{Language, Lookup, Region, Script, Variant};

#[test]
fn lookups_are_case_insensitive() {
    assert_eq!(Language::from_code("EN"), Some(Language::En));
    assert_eq!(Language::from_code("Yue"), Some(Language::Yue));
    assert_eq!(Script::from_code("hANS"), Some(Script::Hans));
    assert_eq!(Region::from_code("tw"), Some(Region::TW));
    assert_eq!(Variant::from_code("ROZAJ"), Some(Variant::Rozaj));
}

#[test]
fn unknown_codes_do_not_resolve() {
    assert_eq!(Language::from_code("xxx"), None);
    assert_eq!(Script::from_code("Abcd"), None);
    assert_eq!(Region::from_code("XY"), None);
    assert_eq!(Variant::from_code("1996"), None);
    assert_eq!(Language::from_code(""), None);
}

#[test]
fn numeric_regions_resolve() {
    assert_eq!(Region::from_code("419"), Some(Region::LatinAmerica));
    assert_eq!(Region::from_code("001"), Some(Region::World));
    assert_eq!(Region::LatinAmerica.code(), "419");
}

#[test]
fn deprecated_codes_redirect_to_replacements() {
    assert_eq!(Language::lookup("iw"), Some(Lookup::Deprecated(Language::He)));
    assert_eq!(Language::lookup("he"), Some(Lookup::Exact(Language::He)));
    assert_eq!(Language::from_code("mo"), Some(Language::Ro));
    assert_eq!(Script::lookup("Qaai"), Some(Lookup::Deprecated(Script::Zinh)));
    assert_eq!(Region::lookup("BU"), Some(Lookup::Deprecated(Region::MM)));
    assert_eq!(Region::from_code("zr"), Some(Region::CD));
    assert!(Region::lookup("FX").is_some_and(Lookup::is_deprecated));
    assert!(!Region::lookup("FR").is_some_and(Lookup::is_deprecated));
}

#[test]
fn codes_use_canonical_casing() {
    assert_eq!(Language::Afb.code(), "afb");
    assert_eq!(Script::Hant.code(), "Hant");
    assert_eq!(Region::GB.code(), "GB");
    assert_eq!(Variant::V1994.code(), "1994");
    assert_eq!(Script::Latn.to_string(), "Latn");
}

#[test]
fn every_code_round_trips_through_lookup() {
    for &language in Language::ALL {
        assert_eq!(Language::lookup(language.code()), Some(Lookup::Exact(language)));
    }
    for &script in Script::ALL {
        assert_eq!(Script::lookup(script.code()), Some(Lookup::Exact(script)));
    }
    for &region in Region::ALL {
        assert_eq!(Region::lookup(region.code()), Some(Lookup::Exact(region)));
    }
    for &variant in Variant::ALL {
        assert_eq!(Variant::lookup(variant.code()), Some(Lookup::Exact(variant)));
    }
}

#[test]
fn codes_are_unique_per_axis() {
    let languages: HashSet<_> = Language::ALL.iter().map(|l| l.code()).collect();
    assert_eq!(languages.len(), Language::ALL.len());
    let variants: HashSet<_> = Variant::ALL.iter().map(|v| v.code()).collect();
    assert_eq!(variants.len(), Variant::ALL.len());
}

#[test]
fn extended_languages_name_their_macrolanguage() {
    assert_eq!(Language::Afb.extended_language_prefix(), Some(Language::Ar));
    assert_eq!(Language::Yue.extended_language_prefix(), Some(Language::Zh));
    assert_eq!(Language::Nan.extended_language_prefix(), Some(Language::Zh));
    assert_eq!(Language::Sfb.extended_language_prefix(), Some(Language::Sgn));
    assert_eq!(Language::En.extended_language_prefix(), None);
    assert!(Language::Hsn.is_extended_language());
    assert!(!Language::Zh.is_extended_language());
}

#[test]
fn macrolanguages_are_never_extended_languages() {
    for &language in Language::ALL {
        if let Some(prefix) = language.extended_language_prefix() {
            assert!(
                !prefix.is_extended_language(),
                "{language} has an extended language as its prefix"
            );
        }
    }
}

#[test]
fn suppress_script_matches_registry() {
    assert_eq!(Language::En.suppress_script(), Some(Script::Latn));
    assert_eq!(Language::Ru.suppress_script(), Some(Script::Cyrl));
    assert_eq!(Language::Ja.suppress_script(), Some(Script::Jpan));
    assert_eq!(Language::Zh.suppress_script(), None);
    assert_eq!(Language::Sr.suppress_script(), None);
}

#[test]
fn variant_prefixes() {
    assert!(Variant::Fonipa.prefixes().is_empty());

    let rozaj = Variant::Rozaj.prefixes();
    assert_eq!(rozaj.len(), 1);
    assert_eq!(rozaj[0].language, Language::Sl);
    assert!(rozaj[0].variants.is_empty());

    let biske = Variant::Biske.prefixes();
    assert_eq!(biske[0].variants, &[Variant::Rozaj]);

    assert!(
        Variant::V1994
            .prefixes()
            .iter()
            .all(|prefix| prefix.variants.first() == Some(&Variant::Rozaj))
    );
    assert_eq!(Variant::Heploc.prefixes()[0].script, Some(Script::Latn));
}

#[test]
fn prefix_variants_are_registered_before_use() {
    // Every variant named in a prefix must itself be reachable, otherwise the
    // dependent variant could never be accepted.
    for &variant in Variant::ALL {
        for prefix in variant.prefixes() {
            for required in prefix.variants {
                assert_ne!(*required, variant, "{variant} requires itself");
            }
        }
    }
}

#[test]
fn grandfathered_canonical_forms() {
    assert_eq!(grandfathered::resolve("i-klingon"), GrandfatheredOutcome::Canonical("tlh"));
    assert_eq!(grandfathered::resolve("zh-min-nan"), GrandfatheredOutcome::Canonical("nan"));
    assert_eq!(grandfathered::resolve("zh-xiang"), GrandfatheredOutcome::Canonical("hsn"));
    assert_eq!(grandfathered::resolve("art-lojban"), GrandfatheredOutcome::Canonical("jbo"));
    assert_eq!(grandfathered::resolve("zh-CHS"), GrandfatheredOutcome::Canonical("zh-Hans"));
    assert_eq!(grandfathered::resolve("ZH-cht"), GrandfatheredOutcome::Canonical("zh-Hant"));
}

#[test]
fn grandfathered_unsupported_forms() {
    for tag in ["en-GB-oed", "i-default", "cel-gaulish", "zh-min", "I-ENOCHIAN"] {
        assert_eq!(
            grandfathered::resolve(tag),
            GrandfatheredOutcome::RecognizedUnsupported,
            "{tag}"
        );
    }
}

#[test]
fn regular_tags_are_not_grandfathered() {
    for tag in ["", "en", "zh-Hans", "zh-min-nan-x", "i"] {
        assert_eq!(grandfathered::resolve(tag), GrandfatheredOutcome::NotGrandfathered, "{tag}");
    }
}

#[test]
fn grandfathered_tags_are_lowercase_and_unique() {
    let tags: Vec<_> = grandfathered::tags().collect();
    let unique: HashSet<_> = tags.iter().collect();
    assert_eq!(unique.len(), tags.len());
    assert!(tags.iter().all(|tag| *tag == tag.to_ascii_lowercase()));
}
