//! Highlighted keyword value type

use serde::Serialize;

use crate::error::HighlightError;
use crate::util::is_identifier_shape;

/// A highlighted identifier (not a language reserved word)
///
/// Always non-empty and made of ASCII letters and underscores. Comparison is
/// exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    /// Validate and wrap a candidate word
    pub fn new(word: impl Into<String>) -> Result<Self, HighlightError> {
        let word = word.into();
        if is_identifier_shape(&word) {
            Ok(Self(word))
        } else {
            Err(HighlightError::InvalidKeyword(word))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Keyword {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Keyword {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keyword() {
        let kw = Keyword::new("alpha").unwrap();
        assert_eq!(kw.as_str(), "alpha");
        assert_eq!(kw.char_count(), 5);
        assert_eq!(kw, "alpha");
    }

    #[test]
    fn test_rejects_digits_and_empty() {
        assert_eq!(
            Keyword::new("x1"),
            Err(HighlightError::InvalidKeyword("x1".to_string()))
        );
        assert!(Keyword::new("").is_err());
        assert!(Keyword::new("foo bar").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let kw = Keyword::new("beta").unwrap();
        assert_eq!(serde_json::to_string(&kw).unwrap(), "\"beta\"");
    }
}
