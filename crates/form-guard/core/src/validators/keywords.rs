//! Keywords field parsing

use crate::error::InputError;

/// Characters that separate keywords
pub const KEYWORD_SEPARATORS: [char; 2] = ['\n', ','];

/// Whitespace as browsers trim it: ECMAScript WhiteSpace and LineTerminator.
///
/// Differs from `char::is_whitespace` on U+FEFF (trimmed here) and U+0085
/// (kept here).
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' ' | '\u{00A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Ordered, trimmed, non-empty keywords taken from a raw field value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordList<'a>(Vec<&'a str>);

impl<'a> KeywordList<'a> {
    /// Split on newlines and commas, trim each token and drop empty ones
    pub fn parse(raw: &'a str) -> Self {
        Self(
            raw.split(KEYWORD_SEPARATORS)
                .map(|token| token.trim_matches(is_form_whitespace))
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<&'a str> {
        self.0
    }
}

/// Shorthand for `KeywordList::parse(raw).into_vec()`
pub fn parse_keywords(raw: &str) -> Vec<&str> {
    KeywordList::parse(raw).into_vec()
}

/// Parse `raw` and require at least one keyword
pub fn validate_keywords(raw: &str) -> Result<KeywordList<'_>, InputError> {
    let keywords = KeywordList::parse(raw);
    if keywords.is_empty() {
        Err(InputError::EmptyKeywords)
    } else {
        Ok(keywords)
    }
}
