use std::fmt;
use std::str::FromStr;

use bon::Builder;
use langtag_registry::{Language, Region, Script, Variant};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::parser::{ParseError, Parser};
use crate::types::Extension;

/// A parsed BCP-47 language tag.
///
/// Tags are immutable. Equality compares every field, including the order of
/// variants. `Display` renders the canonical form: lowercase language,
/// titlecase script, uppercase region, lowercase everything else.
///
/// # Example
///
/// ```
/// use langtag::{Language, LanguageTag, Region, Script};
///
/// let tag = LanguageTag::parse("zh-hans-tw").unwrap();
/// assert_eq!(tag.language(), Some(Language::Zh));
/// assert_eq!(tag.script(), Some(Script::Hans));
/// assert_eq!(tag.region(), Some(Region::TW));
/// assert_eq!(tag.to_string(), "zh-Hans-TW");
///
/// // Extended languages collapse onto the extended subtag.
/// assert_eq!(LanguageTag::parse("zh-yue").unwrap(), LanguageTag::from(Language::Yue));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Builder)]
#[builder(start_fn(vis = "pub(crate)"))]
pub struct LanguageTag {
    language: Option<Language>,
    script: Option<Script>,
    region: Option<Region>,
    #[builder(default)]
    variants: Vec<Variant>,
    #[builder(default)]
    extensions: Vec<Extension>,
    #[builder(default)]
    private_use: Vec<String>,
}

impl LanguageTag {
    /// Parse a tag with the default [`Parser`] configuration.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Parser::default().parse(text)
    }

    /// Parse a tag, treating malformed or unsupported input as absent.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// The root tag: no language and no other subtags. Parsed from `""`.
    pub fn root() -> Self {
        Self::default()
    }

    /// A tag consisting of a single language.
    pub fn from_language(language: Language) -> Self {
        Self::builder().language(language).build()
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn script(&self) -> Option<Script> {
        self.script
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Variants in the order they appeared.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Extensions in the order they appeared.
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// The extension introduced by `singleton`, matched case-insensitively.
    pub fn extension(&self, singleton: char) -> Option<&Extension> {
        let singleton = singleton.to_ascii_lowercase();
        self.extensions.iter().find(|e| e.singleton() == singleton)
    }

    /// Private use subtags (those after `x`), lowercased.
    pub fn private_use(&self) -> &[String] {
        &self.private_use
    }

    /// Whether this is the root tag.
    pub fn is_root(&self) -> bool {
        *self == Self::root()
    }
}

impl From<Language> for LanguageTag {
    fn from(language: Language) -> Self {
        Self::from_language(language)
    }
}

impl FromStr for LanguageTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        let mut segment = |part: &dyn fmt::Display| {
            let result = write!(f, "{separator}{part}");
            separator = "-";
            result
        };

        if let Some(language) = self.language {
            segment(&language)?;
        }
        if let Some(script) = self.script {
            segment(&script)?;
        }
        if let Some(region) = self.region {
            segment(&region)?;
        }
        for variant in &self.variants {
            segment(variant)?;
        }
        for extension in &self.extensions {
            segment(extension)?;
        }
        if !self.private_use.is_empty() {
            segment(&'x')?;
            for subtag in &self.private_use {
                segment(subtag)?;
            }
        }
        Ok(())
    }
}

impl Serialize for LanguageTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LanguageTagVisitor;

        impl Visitor<'_> for LanguageTagVisitor {
            type Value = LanguageTag;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "a BCP-47 language tag")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                LanguageTag::parse(s).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(LanguageTagVisitor)
    }
}
