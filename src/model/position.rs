//! Cursor positions and cursor-move events

/// A position in the document (row and column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Row number (0-indexed)
    pub row: usize,
    /// Column number in characters (0-indexed)
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A single cursor movement reported by the host editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorMoveEvent {
    pub old_position: Position,
    pub new_position: Position,
    /// Full text of the row at `new_position`
    pub line_text: String,
    /// The move was caused by an edit rather than navigation
    pub text_changed: bool,
}

impl CursorMoveEvent {
    pub fn new(
        old_position: Position,
        new_position: Position,
        line_text: impl Into<String>,
        text_changed: bool,
    ) -> Self {
        Self {
            old_position,
            new_position,
            line_text: line_text.into(),
            text_changed,
        }
    }

    /// Old and new positions share a row
    pub fn same_row(&self) -> bool {
        self.old_position.row == self.new_position.row
    }
}
