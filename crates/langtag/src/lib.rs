//! Validating parser and structural model for BCP-47 language tags
//! (RFC 5646).
//!
//! ```
//! use langtag::{Language, LanguageTag, Variant};
//!
//! let tag: LanguageTag = "sl-rozaj-biske-1994".parse().unwrap();
//! assert_eq!(tag.language(), Some(Language::Sl));
//! assert_eq!(tag.variants(), &[Variant::Rozaj, Variant::Biske, Variant::V1994]);
//!
//! // Grandfathered tags resolve to their modern equivalents.
//! assert_eq!(LanguageTag::parse("i-klingon").unwrap(), LanguageTag::from(Language::Tlh));
//!
//! // Variants must follow their registered prefix.
//! assert!(LanguageTag::parse("sl-1994").unwrap_err().is_invalid_syntax());
//! ```

pub mod parser;
pub mod types;

pub use langtag_registry::{Language, Region, Script, Variant, grandfathered};
pub use parser::{ParseError, ParseWarning, Parser, SyntaxError};
pub use types::{Extension, LanguageTag};
