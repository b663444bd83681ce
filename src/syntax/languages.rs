//! Language identification and reserved-word tables
//!
//! Maps file extensions (with the leading dot) to a language and that
//! language's reserved words. Reserved words are never auto-highlighted.

use std::path::Path;

/// Languages with a built-in reserved-word table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    /// JavaScript family; also the fallback for unmapped extensions
    #[default]
    JavaScript,
    Java,
    Python,
}

const JAVASCRIPT_RESERVED: &[&str] = &[
    "abstract", "arguments", "async", "await", "boolean", "break", "byte", "case", "catch",
    "char", "class", "const", "continue", "debugger", "default", "delete", "do", "double",
    "else", "enum", "eval", "export", "extends", "false", "final", "finally", "float", "for",
    "function", "goto", "if", "implements", "import", "in", "instanceof", "int", "interface",
    "let", "long", "native", "new", "null", "of", "package", "private", "protected", "public",
    "return", "short", "static", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "typeof", "undefined", "var", "void", "volatile", "while",
    "with", "yield",
];

const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
    "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
    "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
    "public", "record", "return", "sealed", "short", "static", "strictfp", "super", "switch",
    "synchronized", "this", "throw", "throws", "transient", "true", "try", "var", "void",
    "volatile", "while", "yield",
];

const PYTHON_RESERVED: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "self", "try", "while", "with", "yield",
];

impl LanguageId {
    /// Detect language from a dotted extension (e.g. `.py`)
    ///
    /// Matching is exact and case-sensitive. Anything unmapped, including the
    /// empty string, falls back to [`LanguageId::JavaScript`].
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            ".java" => LanguageId::Java,
            ".py" => LanguageId::Python,
            _ => LanguageId::JavaScript,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| Self::from_extension(&format!(".{}", ext)))
            .unwrap_or_default()
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Java => "Java",
            LanguageId::Python => "Python",
        }
    }

    /// Reserved words of this language
    pub fn reserved_words(&self) -> &'static [&'static str] {
        match self {
            LanguageId::JavaScript => JAVASCRIPT_RESERVED,
            LanguageId::Java => JAVA_RESERVED,
            LanguageId::Python => PYTHON_RESERVED,
        }
    }
}

/// Reserved words for a dotted file extension
pub fn reserved_words_for(ext: &str) -> &'static [&'static str] {
    LanguageId::from_extension(ext).reserved_words()
}

/// Check if `word` must be kept out of auto-highlighting for this file
///
/// Only applies when the file actually has an extension (starts with `.`);
/// files without one never filter anything.
pub fn is_reserved(ext: Option<&str>, word: &str) -> bool {
    match ext {
        Some(ext) if ext.starts_with('.') => reserved_words_for(ext).contains(&word),
        _ => false,
    }
}
