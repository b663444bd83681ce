//! Language detection and reserved-word filtering

mod languages;

pub use languages::{is_reserved, reserved_words_for, LanguageId};
