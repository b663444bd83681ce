//! Utility functions for locating words in a line of text
//!
//! Two notions of "word" live here:
//! - [`word_at`] is the delimiter-based word used to decide what the cursor
//!   is touching. It only splits on [`is_delimiter`] characters.
//! - [`word_range_at`] is the editor-style word selection (double-click
//!   semantics) used by the explicit toggle command. It groups characters by
//!   [`CharType`].

/// Check if a character splits words for auto-highlighting
///
/// Whitespace plus `; . ? * + ^ $ [ ] \ ( ) { } | -`.
pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            ';' | '.'
                | '?'
                | '*'
                | '+'
                | '^'
                | '$'
                | '['
                | ']'
                | '\\'
                | '('
                | ')'
                | '{'
                | '}'
                | '|'
                | '-'
        )
}

/// Byte index of the `char_offset`-th character, clamped to the end of `line`
fn byte_index(line: &str, char_offset: usize) -> usize {
    line.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// Return the word touching `offset` (a character column) in `line`
///
/// The word is the trailing run of non-delimiters before `offset` joined with
/// the leading run of non-delimiters at/after `offset`. Offsets past the end of
/// the line are clamped. A line of only delimiters yields an empty string.
pub fn word_at(line: &str, offset: usize) -> &str {
    let split = byte_index(line, offset);
    let (left, right) = line.split_at(split);

    let start = left
        .char_indices()
        .rev()
        .find(|(_, ch)| is_delimiter(*ch))
        .map(|(idx, ch)| idx + ch.len_utf8())
        .unwrap_or(0);

    let end = right
        .char_indices()
        .find(|(_, ch)| is_delimiter(*ch))
        .map(|(idx, _)| split + idx)
        .unwrap_or(line.len());

    &line[start..end]
}

/// Check if `word` looks like an identifier worth highlighting
///
/// ASCII letters and underscores only; digits are rejected.
pub fn is_identifier_shape(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|ch| ch.is_ascii_alphabetic() || ch == '_')
}

/// Check if a character is a punctuation/symbol boundary (not whitespace)
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '/' | ':'
            | ','
            | '.'
            | '-'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ';'
            | '"'
            | '\''
            | '<'
            | '>'
            | '='
            | '+'
            | '*'
            | '&'
            | '|'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '~'
            | '`'
            | '\\'
            | '?'
    )
}

/// Character type for editor-style word selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters
    Whitespace,
    /// Alphanumeric characters (word characters)
    WordChar,
    /// Punctuation and symbols
    Punctuation,
}

/// Get the character type for word selection
pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if is_punctuation(ch) {
        CharType::Punctuation
    } else {
        CharType::WordChar
    }
}

/// Character range `(start, end)` of the word an editor would select at `column`
///
/// Prefers the word character under the cursor, then the one just before it
/// (cursor sitting at the end of a word). Returns `None` when neither side is
/// a word character.
pub fn word_range_at(line: &str, column: usize) -> Option<(usize, usize)> {
    let chars: Vec<char> = line.chars().collect();
    let column = column.min(chars.len());

    let anchor = if chars
        .get(column)
        .is_some_and(|ch| char_type(*ch) == CharType::WordChar)
    {
        column
    } else if column > 0 && char_type(chars[column - 1]) == CharType::WordChar {
        column - 1
    } else {
        return None;
    };

    let mut start = anchor;
    while start > 0 && char_type(chars[start - 1]) == CharType::WordChar {
        start -= 1;
    }

    let mut end = anchor + 1;
    while end < chars.len() && char_type(chars[end]) == CharType::WordChar {
        end += 1;
    }

    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_at_documented_cases() {
        assert_eq!(word_at("foo.bar", 1), "foo");
        assert_eq!(word_at("foo.bar", 5), "bar");
        assert_eq!(word_at("  x  ", 2), "x");
    }

    #[test]
    fn test_word_at_line_edges() {
        assert_eq!(word_at("hello world", 0), "hello");
        assert_eq!(word_at("hello world", 11), "world");
        assert_eq!(word_at("", 0), "");
    }

    #[test]
    fn test_word_at_only_delimiters() {
        assert_eq!(word_at(" .;( ", 2), "");
        assert_eq!(word_at("---", 0), "");
    }

    #[test]
    fn test_word_at_offset_past_end_is_clamped() {
        assert_eq!(word_at("abc", 99), "abc");
        assert_eq!(word_at("a b", 99), "b");
    }

    #[test]
    fn test_word_at_trailing_single_delimiter() {
        assert_eq!(word_at("call(x)", 5), "x");
        assert_eq!(word_at("end.", 1), "end");
        assert_eq!(word_at("end.", 4), "");
    }

    #[test]
    fn test_word_at_cursor_on_delimiter_takes_left_run() {
        // Cursor right after "foo", sitting on the dot
        assert_eq!(word_at("foo.bar", 3), "foo");
        assert_eq!(word_at("foo.bar", 4), "bar");
    }

    #[test]
    fn test_word_at_multibyte() {
        assert_eq!(word_at("é.abc", 3), "abc");
        assert_eq!(word_at("naïve x", 2), "naïve");
    }

    #[test]
    fn test_word_at_keeps_non_delimiter_punctuation() {
        // Comma and quotes are not delimiters here
        assert_eq!(word_at("a,b c", 1), "a,b");
    }

    #[test]
    fn test_is_identifier_shape() {
        assert!(is_identifier_shape("foo"));
        assert!(is_identifier_shape("_private"));
        assert!(is_identifier_shape("CamelCase"));
        assert!(!is_identifier_shape(""));
        assert!(!is_identifier_shape("x1"));
        assert!(!is_identifier_shape("a,b"));
        assert!(!is_identifier_shape("héllo"));
    }

    #[test]
    fn test_word_range_at_inside_word() {
        assert_eq!(word_range_at("let value = 1;", 6), Some((4, 9)));
    }

    #[test]
    fn test_word_range_at_end_of_word() {
        assert_eq!(word_range_at("let value = 1;", 9), Some((4, 9)));
    }

    #[test]
    fn test_word_range_at_whitespace() {
        assert_eq!(word_range_at("a  b", 2), None);
        assert_eq!(word_range_at("", 0), None);
    }

    #[test]
    fn test_char_type() {
        assert_eq!(char_type(' '), CharType::Whitespace);
        assert_eq!(char_type('_'), CharType::WordChar);
        assert_eq!(char_type('.'), CharType::Punctuation);
    }
}
