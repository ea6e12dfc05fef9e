use std::fmt;

/// An extension sequence: a singleton followed by its subtags.
///
/// Only the structure is validated; the meaning of the subtags is left to
/// the extension's own registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension {
    singleton: char,
    subtags: Vec<String>,
}

impl Extension {
    /// Both parts are expected lowercased and non-empty.
    pub(crate) fn new(singleton: char, subtags: Vec<String>) -> Self {
        Self { singleton, subtags }
    }

    /// The lowercase singleton introducing this extension (never `x`).
    pub fn singleton(&self) -> char {
        self.singleton
    }

    /// The extension's subtags, lowercased, in input order.
    pub fn subtags(&self) -> &[String] {
        &self.subtags
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singleton)?;
        for subtag in &self.subtags {
            write!(f, "-{subtag}")?;
        }
        Ok(())
    }
}
