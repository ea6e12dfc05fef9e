//! Variant prefix validation.

use langtag_registry::{Language, Prefix, Region, Script, Variant};

/// Whether `variant` may follow the subtags accepted so far.
///
/// A variant without registered prefixes is always accepted. Otherwise one
/// of its prefixes must match: same language, the prefix's script and region
/// (when it names them) equal to the tag's, and the prefix's variants equal
/// to the leading variants already accepted. A variant is never accepted
/// twice.
pub(crate) fn accepts(
    variant: Variant,
    language: Option<Language>,
    script: Option<Script>,
    region: Option<Region>,
    accepted: &[Variant],
) -> bool {
    if accepted.contains(&variant) {
        return false;
    }
    let prefixes = variant.prefixes();
    prefixes.is_empty()
        || prefixes
            .iter()
            .any(|prefix| matches(prefix, language, script, region, accepted))
}

fn matches(
    prefix: &Prefix,
    language: Option<Language>,
    script: Option<Script>,
    region: Option<Region>,
    accepted: &[Variant],
) -> bool {
    language == Some(prefix.language)
        && prefix.script.is_none_or(|required| script == Some(required))
        && prefix.region.is_none_or(|required| region == Some(required))
        && accepted.starts_with(prefix.variants)
}
