//! BCP-47 language tag parser.
//!
//! Parsing runs as a fixed sequence of stages: grandfathered whole-tag
//! check, tokenizing, primary language (collapsing extended languages),
//! script, region, variants, extensions, private use, and a final check that
//! nothing is left over. Each stage consumes zero or more leading subtags and
//! never backtracks into an earlier one.

pub mod error;
mod prefix;
mod tokenizer;

use bon::Builder;
use langtag_registry::grandfathered::{self, GrandfatheredOutcome};
use langtag_registry::{Language, Lookup, Region, Script, Variant};

pub use error::{ParseError, ParseWarning, SyntaxError};

use crate::types::{Extension, LanguageTag};
use tokenizer::{Subtag, tokenize};

/// Language tag parser configuration.
///
/// `LanguageTag::parse` uses the default configuration; build a `Parser`
/// to change it.
///
/// # Example
///
/// ```
/// use langtag::{Language, Parser, Script};
///
/// let parser = Parser::builder().suppress_default_script(false).build();
/// let tag = parser.parse("en-Latn").unwrap();
/// assert_eq!(tag.language(), Some(Language::En));
/// assert_eq!(tag.script(), Some(Script::Latn));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct Parser {
    /// Drop a script subtag that equals the language's Suppress-Script
    /// (`en-Latn` parses as `en`).
    #[builder(default = true)]
    suppress_default_script: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::builder().build()
    }
}

impl Parser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether default scripts are dropped from parsed tags.
    pub fn suppresses_default_script(&self) -> bool {
        self.suppress_default_script
    }

    /// Parse a language tag.
    pub fn parse(&self, text: &str) -> Result<LanguageTag, ParseError> {
        self.parse_with_warnings(text).map(|(tag, _)| tag)
    }

    /// Parse a language tag, also returning the rewrites applied to reach
    /// its canonical form.
    ///
    /// # Example
    ///
    /// ```
    /// use langtag::{Parser, ParseWarning};
    ///
    /// let (tag, warnings) = Parser::new().parse_with_warnings("iw-IL").unwrap();
    /// assert_eq!(tag.to_string(), "he-IL");
    /// assert_eq!(
    ///     warnings,
    ///     vec![ParseWarning::DeprecatedSubtag {
    ///         subtag: "iw".to_string(),
    ///         replacement: "he",
    ///     }]
    /// );
    /// ```
    pub fn parse_with_warnings(
        &self,
        text: &str,
    ) -> Result<(LanguageTag, Vec<ParseWarning>), ParseError> {
        let mut warnings = Vec::new();
        let tag = self.parse_into(text, &mut warnings)?;
        Ok((tag, warnings))
    }

    fn parse_into(
        &self,
        text: &str,
        warnings: &mut Vec<ParseWarning>,
    ) -> Result<LanguageTag, ParseError> {
        match grandfathered::resolve(text) {
            GrandfatheredOutcome::NotGrandfathered => {}
            GrandfatheredOutcome::Canonical(replacement) => {
                warnings.push(ParseWarning::GrandfatheredReplaced {
                    tag: text.to_string(),
                    replacement,
                });
                return self.parse_into(replacement, warnings);
            }
            GrandfatheredOutcome::RecognizedUnsupported => {
                return Err(ParseError::UnsupportedTag {
                    tag: text.to_string(),
                });
            }
        }

        let subtags = tokenize(text)?;
        let mut cursor = Cursor {
            text,
            subtags: &subtags,
            index: 0,
            warnings,
        };
        self.assemble(&mut cursor)
    }

    fn assemble(&self, cursor: &mut Cursor<'_, '_>) -> Result<LanguageTag, ParseError> {
        if cursor.is_done() {
            return Ok(LanguageTag::root());
        }

        // A private use tag (`x-...`) has no language.
        let language = if cursor.peek().is_some_and(|s| s.is("x")) {
            None
        } else {
            Some(primary_language(cursor)?)
        };

        let written_script = cursor.take(Script::lookup);
        let script = match (language, written_script) {
            (Some(language), Some(script))
                if self.suppress_default_script && language.suppress_script() == Some(script) =>
            {
                cursor
                    .warnings
                    .push(ParseWarning::SuppressedScript { language, script });
                None
            }
            _ => written_script,
        };

        let region = cursor.take(Region::lookup);
        let variants = variants(cursor, language, written_script, region);
        let extensions = extensions(cursor)?;
        let private_use = private_use(cursor)?;

        if !cursor.is_done() {
            return Err(cursor.error(SyntaxError::UnexpectedSubtag));
        }

        Ok(LanguageTag::builder()
            .maybe_language(language)
            .maybe_script(script)
            .maybe_region(region)
            .variants(variants)
            .extensions(extensions)
            .private_use(private_use)
            .build())
    }
}

/// Position in the subtag sequence, plus the warnings collected so far.
struct Cursor<'a, 'w> {
    text: &'a str,
    subtags: &'a [Subtag<'a>],
    index: usize,
    warnings: &'w mut Vec<ParseWarning>,
}

impl<'a> Cursor<'a, '_> {
    fn peek(&self) -> Option<Subtag<'a>> {
        self.subtags.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn is_done(&self) -> bool {
        self.index >= self.subtags.len()
    }

    /// Consume the next subtag if `lookup` resolves it, recording a warning
    /// when a deprecated code was followed.
    fn take<T: Copy + Into<&'static str>>(
        &mut self,
        lookup: impl Fn(&str) -> Option<Lookup<T>>,
    ) -> Option<T> {
        let subtag = self.peek()?;
        let found = lookup(subtag.text)?;
        self.advance();
        if let Lookup::Deprecated(replacement) = found {
            self.warnings.push(ParseWarning::DeprecatedSubtag {
                subtag: subtag.text.to_string(),
                replacement: replacement.into(),
            });
        }
        Some(found.value())
    }

    /// Byte offset of the current subtag, or the input length at the end.
    fn position(&self) -> usize {
        self.peek().map_or(self.text.len(), |s| s.offset)
    }

    fn error(&self, reason: SyntaxError) -> ParseError {
        self.error_at(self.position(), reason)
    }

    fn error_at(&self, position: usize, reason: SyntaxError) -> ParseError {
        ParseError::syntax(self.text, position, reason)
    }
}

/// Primary language, collapsing a following extended language subtag onto
/// it when the extended language belongs to this macrolanguage.
fn primary_language(cursor: &mut Cursor<'_, '_>) -> Result<Language, ParseError> {
    let Some(language) = cursor.take(Language::lookup) else {
        return Err(cursor.error(SyntaxError::UnknownLanguage));
    };

    let Some(extlang) = cursor.peek().and_then(|s| Language::from_code(s.text)) else {
        return Ok(language);
    };
    let Some(macrolanguage) = extlang.extended_language_prefix() else {
        return Ok(language);
    };
    if macrolanguage != language {
        return Err(cursor.error(SyntaxError::MismatchedExtendedLanguage));
    }
    cursor.advance();
    cursor.warnings.push(ParseWarning::ExtendedLanguageCollapsed {
        macrolanguage,
        language: extlang,
    });
    Ok(extlang)
}

/// Variants, in order, for as long as each satisfies its prefix rules.
///
/// The first subtag that is not an acceptable variant ends this stage
/// without error; later stages decide what it is.
fn variants(
    cursor: &mut Cursor<'_, '_>,
    language: Option<Language>,
    script: Option<Script>,
    region: Option<Region>,
) -> Vec<Variant> {
    let mut variants = Vec::new();
    while let Some(variant) = cursor.peek().and_then(|s| Variant::from_code(s.text)) {
        if !prefix::accepts(variant, language, script, region, &variants) {
            break;
        }
        cursor.advance();
        variants.push(variant);
    }
    variants
}

fn extensions(cursor: &mut Cursor<'_, '_>) -> Result<Vec<Extension>, ParseError> {
    let mut extensions: Vec<Extension> = Vec::new();
    while let Some(singleton) = cursor.peek().and_then(|s| s.singleton()) {
        if singleton == 'x' {
            break;
        }
        if extensions.iter().any(|e| e.singleton() == singleton) {
            return Err(cursor.error(SyntaxError::DuplicateSingleton));
        }
        let start = cursor.position();
        cursor.advance();

        let mut subtags = Vec::new();
        while let Some(subtag) = cursor.peek().filter(|s| s.singleton().is_none()) {
            subtags.push(subtag.text.to_ascii_lowercase());
            cursor.advance();
        }
        if subtags.is_empty() {
            return Err(cursor.error_at(start, SyntaxError::MissingExtensionPayload));
        }
        extensions.push(Extension::new(singleton, subtags));
    }
    Ok(extensions)
}

fn private_use(cursor: &mut Cursor<'_, '_>) -> Result<Vec<String>, ParseError> {
    if !cursor.peek().is_some_and(|s| s.is("x")) {
        return Ok(Vec::new());
    }
    let start = cursor.position();
    cursor.advance();

    let mut subtags = Vec::new();
    while let Some(subtag) = cursor.peek() {
        subtags.push(subtag.text.to_ascii_lowercase());
        cursor.advance();
    }
    if subtags.is_empty() {
        return Err(cursor.error_at(start, SyntaxError::MissingPrivateUsePayload));
    }
    Ok(subtags)
}
