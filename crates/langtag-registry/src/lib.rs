//! Static subtag registry tables for BCP-47 language tags.
//!
//! This crate holds the vocabulary the `langtag` parser validates against:
//! languages, scripts, regions and variants, together with the alias,
//! macrolanguage, suppress-script, variant prefix and grandfathered tag
//! tables. Everything here is read-only data; lookups are case-insensitive
//! and safe to call from any thread.

#[macro_use]
mod macros;

pub mod grandfathered;
mod language;
mod region;
mod script;
mod variant;

use std::collections::HashMap;

pub use grandfathered::GrandfatheredOutcome;
pub use language::Language;
pub use region::Region;
pub use script::Script;
pub use variant::{Prefix, Variant};

/// Outcome of resolving a subtag against one of the vocabulary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup<T> {
    /// The subtag is the registered code of `T`.
    Exact(T),
    /// The subtag is a deprecated code; `T` is its preferred replacement.
    Deprecated(T),
}

impl<T: Copy> Lookup<T> {
    /// The resolved value, regardless of how it was reached.
    pub fn value(self) -> T {
        match self {
            Self::Exact(value) | Self::Deprecated(value) => value,
        }
    }

    /// Whether resolution went through a deprecated alias.
    pub fn is_deprecated(self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

/// Builds a lowercase code index over registered values plus their
/// deprecated aliases.
///
/// Registered codes win over aliases if both spell the same subtag.
fn build_index<T: Copy>(
    values: impl IntoIterator<Item = (&'static str, T)>,
    aliases: &[(&'static str, T)],
) -> HashMap<String, Lookup<T>> {
    let mut index = HashMap::new();
    for &(code, value) in aliases {
        index.insert(code.to_ascii_lowercase(), Lookup::Deprecated(value));
    }
    for (code, value) in values {
        index.insert(code.to_ascii_lowercase(), Lookup::Exact(value));
    }
    index
}
