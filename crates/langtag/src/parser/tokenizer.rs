//! Splits a raw tag into subtags.

use winnow::combinator::separated;
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::{ParseError, SyntaxError};

/// Longest subtag the grammar allows.
const MAX_SUBTAG_LEN: usize = 8;

/// One `-` delimited segment of a tag, case preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Subtag<'a> {
    pub(crate) text: &'a str,
    /// Byte offset of the subtag in the input.
    pub(crate) offset: usize,
}

impl Subtag<'_> {
    /// The lowercased singleton character, if this subtag is one character.
    pub(crate) fn singleton(&self) -> Option<char> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }

    pub(crate) fn is(&self, text: &str) -> bool {
        self.text.eq_ignore_ascii_case(text)
    }
}

/// Tokenize a tag into subtags.
///
/// The empty string is the root tag and yields no subtags.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Subtag<'_>>, ParseError> {
    let mut remaining = input;
    let texts: Vec<&str> = separated(0.., subtag, '-')
        .parse_next(&mut remaining)
        .map_err(|_| reject(input, remaining))?;
    if !remaining.is_empty() {
        return Err(reject(input, remaining));
    }

    let mut offset = 0;
    let subtags = texts
        .into_iter()
        .map(|text| {
            let subtag = Subtag { text, offset };
            offset += text.len() + 1;
            subtag
        })
        .collect();
    Ok(subtags)
}

/// Parse a single subtag: 1 to 8 ASCII alphanumerics.
fn subtag<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1..=MAX_SUBTAG_LEN, |c: char| c.is_ascii_alphanumeric()).parse_next(input)
}

/// Explain why tokenizing stopped at `remaining`.
fn reject(input: &str, remaining: &str) -> ParseError {
    let offset = input.len() - remaining.len();
    let mut chars = remaining.chars();
    let (position, reason) = match chars.next() {
        // The previous subtag ran past the length limit.
        Some(c) if c.is_ascii_alphanumeric() => {
            let start = input[..offset].rfind('-').map_or(0, |i| i + 1);
            (start, SyntaxError::SubtagTooLong)
        }
        Some('-') if offset == 0 => (0, SyntaxError::EmptySubtag),
        Some('-') => match chars.next() {
            None | Some('-') => (offset + 1, SyntaxError::EmptySubtag),
            Some(_) => (offset + 1, SyntaxError::InvalidCharacter),
        },
        _ => (offset, SyntaxError::InvalidCharacter),
    };
    ParseError::syntax(input, position, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).unwrap().iter().map(|s| s.text).collect()
    }

    fn failure(input: &str) -> (usize, SyntaxError) {
        match tokenize(input).unwrap_err() {
            ParseError::InvalidSyntax {
                position, reason, ..
            } => (position, reason),
            ParseError::UnsupportedTag { .. } => panic!("tokenizer never reports unsupported tags"),
        }
    }

    #[test]
    fn empty_input_is_zero_subtags() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn splits_on_hyphen_preserving_case() {
        assert_eq!(texts("zh-Hans-TW"), vec!["zh", "Hans", "TW"]);
        assert_eq!(texts("sl-rozaj-biske-1994"), vec!["sl", "rozaj", "biske", "1994"]);
    }

    #[test]
    fn records_offsets() {
        let subtags = tokenize("en-GB-x-abc").unwrap();
        let offsets: Vec<usize> = subtags.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 3, 6, 8]);
    }

    #[test]
    fn accepts_eight_character_subtags() {
        assert_eq!(texts("de-abcdefgh"), vec!["de", "abcdefgh"]);
    }

    #[test]
    fn rejects_empty_subtags() {
        assert_eq!(failure("-"), (0, SyntaxError::EmptySubtag));
        assert_eq!(failure("-en"), (0, SyntaxError::EmptySubtag));
        assert_eq!(failure("ar-"), (3, SyntaxError::EmptySubtag));
        assert_eq!(failure("en--US"), (3, SyntaxError::EmptySubtag));
        assert_eq!(failure("xx-xxx-"), (7, SyntaxError::EmptySubtag));
    }

    #[test]
    fn rejects_long_subtags() {
        assert_eq!(failure("abcdefghi"), (0, SyntaxError::SubtagTooLong));
        assert_eq!(failure("en-abcdefghi-US"), (3, SyntaxError::SubtagTooLong));
    }

    #[test]
    fn rejects_non_alphanumeric_characters() {
        assert_eq!(failure("en_US"), (2, SyntaxError::InvalidCharacter));
        assert_eq!(failure("en-Ü"), (3, SyntaxError::InvalidCharacter));
        assert_eq!(failure(" en"), (0, SyntaxError::InvalidCharacter));
    }

    #[test]
    fn singleton_detection() {
        let subtags = tokenize("en-U-ca-X").unwrap();
        assert_eq!(subtags[0].singleton(), None);
        assert_eq!(subtags[1].singleton(), Some('u'));
        assert_eq!(subtags[2].singleton(), None);
        assert_eq!(subtags[3].singleton(), Some('x'));
        assert!(subtags[3].is("x"));
    }
}
