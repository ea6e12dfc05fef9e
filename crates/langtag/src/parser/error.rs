//! Error and warning types for language tag parsing.

use langtag_registry::{Language, Script};
use thiserror::Error;

/// An error that occurred while parsing a language tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not follow the BCP-47 grammar.
    #[error("invalid language tag '{tag}' at byte {position}: {reason}")]
    InvalidSyntax {
        tag: String,
        /// Byte offset of the offending subtag.
        position: usize,
        reason: SyntaxError,
    },

    /// The input is a grandfathered tag with no modern equivalent.
    #[error("grandfathered tag '{tag}' has no modern equivalent")]
    UnsupportedTag { tag: String },
}

impl ParseError {
    pub(crate) fn syntax(tag: &str, position: usize, reason: SyntaxError) -> Self {
        Self::InvalidSyntax {
            tag: tag.to_string(),
            position,
            reason,
        }
    }

    /// Whether this error means the input is malformed.
    pub fn is_invalid_syntax(&self) -> bool {
        matches!(self, Self::InvalidSyntax { .. })
    }

    /// Whether this error means the input is a recognized but unsupported
    /// grandfathered tag.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedTag { .. })
    }

    /// The reason for a syntax error; `None` for unsupported tags.
    pub fn syntax_error(&self) -> Option<SyntaxError> {
        match self {
            Self::InvalidSyntax { reason, .. } => Some(*reason),
            Self::UnsupportedTag { .. } => None,
        }
    }
}

/// Why a tag was rejected as syntactically invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SyntaxError {
    #[error("empty subtag")]
    EmptySubtag,

    #[error("subtag longer than 8 characters")]
    SubtagTooLong,

    #[error("subtag contains a character other than ASCII letters and digits")]
    InvalidCharacter,

    #[error("unrecognized primary language subtag")]
    UnknownLanguage,

    #[error("extended language subtag does not belong to the preceding language")]
    MismatchedExtendedLanguage,

    #[error("extension singleton used more than once")]
    DuplicateSingleton,

    #[error("extension singleton without subtags")]
    MissingExtensionPayload,

    #[error("private use marker without subtags")]
    MissingPrivateUsePayload,

    /// Covers unknown subtags, subtags out of order, and variants whose
    /// registered prefix is not satisfied.
    #[error("unexpected subtag")]
    UnexpectedSubtag,
}

/// A non-fatal rewrite applied while parsing.
///
/// The parsed tag is still valid; warnings report where its canonical form
/// differs from the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// A deprecated subtag was replaced by its preferred value.
    #[error("deprecated subtag '{subtag}' replaced by '{replacement}'")]
    DeprecatedSubtag {
        subtag: String,
        replacement: &'static str,
    },

    /// A script subtag was dropped because it is the language's default.
    #[error("script '{script}' is the default for '{language}' and was dropped")]
    SuppressedScript { language: Language, script: Script },

    /// A `<macrolanguage>-<extlang>` pair was collapsed to the extended
    /// language.
    #[error("'{macrolanguage}-{language}' collapsed to '{language}'")]
    ExtendedLanguageCollapsed {
        macrolanguage: Language,
        language: Language,
    },

    /// A grandfathered tag was replaced by its modern equivalent.
    #[error("grandfathered tag '{tag}' replaced by '{replacement}'")]
    GrandfatheredReplaced {
        tag: String,
        replacement: &'static str,
    },
}
