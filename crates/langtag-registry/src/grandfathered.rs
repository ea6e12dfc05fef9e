//! Whole-tag forms registered before the RFC 5646 grammar.
//!
//! Grandfathered tags are matched on the complete input before any subtag
//! parsing, since several of them (`i-klingon`, `zh-min-nan`) do not follow
//! the regular grammar.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Result of checking a whole tag against the grandfathered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrandfatheredOutcome {
    /// Not a grandfathered tag; parse it with the regular grammar.
    NotGrandfathered,
    /// A grandfathered tag with a modern equivalent, given as tag text.
    Canonical(&'static str),
    /// A grandfathered tag with no modern equivalent.
    RecognizedUnsupported,
}

/// Lowercased tag to its replacement; `None` marks an unsupported tag.
const TABLE: &[(&str, Option<&str>)] = &[
    ("art-lojban", Some("jbo")),
    ("cel-gaulish", None),
    ("en-gb-oed", None),
    ("i-ami", Some("ami")),
    ("i-bnn", Some("bnn")),
    ("i-default", None),
    ("i-enochian", None),
    ("i-hak", Some("hak")),
    ("i-klingon", Some("tlh")),
    ("i-lux", Some("lb")),
    ("i-mingo", None),
    ("i-navajo", Some("nv")),
    ("i-pwn", Some("pwn")),
    ("i-tao", Some("tao")),
    ("i-tay", Some("tay")),
    ("i-tsu", Some("tsu")),
    ("no-bok", Some("nb")),
    ("no-nyn", Some("nn")),
    ("sgn-be-fr", Some("sfb")),
    ("sgn-be-nl", Some("vgt")),
    ("sgn-ch-de", Some("sgg")),
    ("zh-guoyu", Some("cmn")),
    ("zh-hakka", Some("hak")),
    ("zh-min", None),
    ("zh-min-nan", Some("nan")),
    ("zh-xiang", Some("hsn")),
    // Legacy .NET culture names for Simplified and Traditional Chinese.
    ("zh-chs", Some("zh-Hans")),
    ("zh-cht", Some("zh-Hant")),
];

static INDEX: LazyLock<HashMap<&'static str, Option<&'static str>>> =
    LazyLock::new(|| TABLE.iter().copied().collect());

/// Checks a whole tag, case-insensitively, against the grandfathered table.
pub fn resolve(tag: &str) -> GrandfatheredOutcome {
    match INDEX.get(tag.to_ascii_lowercase().as_str()) {
        None => GrandfatheredOutcome::NotGrandfathered,
        Some(Some(replacement)) => GrandfatheredOutcome::Canonical(replacement),
        Some(None) => GrandfatheredOutcome::RecognizedUnsupported,
    }
}

/// Every grandfathered tag in the table, lowercased.
pub fn tags() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|&(tag, _)| tag)
}
