//! Error types for the highlight engine

/// Failures reading state from the host editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The editor was closed or detached from its buffer
    Detached,
    /// Requested row does not exist in the buffer
    RowOutOfRange { row: usize, line_count: usize },
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Detached => write!(f, "editor is detached"),
            Self::RowOutOfRange { row, line_count } => {
                write!(f, "row {} out of range ({} lines)", row, line_count)
            }
        }
    }
}

impl std::error::Error for HostError {}

/// Errors surfaced by the highlight engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// Operation on a destroyed keyword manager or deactivated engine.
    /// This is a programming error on the caller's side.
    Destroyed,
    /// Candidate is not letters/underscores only
    InvalidKeyword(String),
}

impl std::fmt::Display for HighlightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Destroyed => write!(f, "highlight engine has been destroyed"),
            Self::InvalidKeyword(word) => write!(f, "not a highlightable keyword: {:?}", word),
        }
    }
}

impl std::error::Error for HighlightError {}
