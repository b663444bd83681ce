//! Utility modules

pub mod text;

pub use text::{
    char_type, is_delimiter, is_identifier_shape, is_punctuation, word_at, word_range_at, CharType,
};
