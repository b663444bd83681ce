//! Decides whether a cursor move changed the word under the cursor
//!
//! Column moves inside the same word must not re-evaluate, otherwise the word
//! that was just toggled on would be toggled off by the next arrow press.

use crate::model::CursorMoveEvent;
use crate::util::word_at;

/// Why a move counts as a word change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordChange {
    /// Cursor moved to another row
    RowChanged,
    /// The move came from an edit
    TextChanged,
    /// Same row, different word at the new column
    WordDiffers,
}

/// Classify a move; `None` means the word under the cursor is unchanged
pub fn classify(event: &CursorMoveEvent) -> Option<WordChange> {
    if !event.same_row() {
        return Some(WordChange::RowChanged);
    }
    if event.text_changed {
        return Some(WordChange::TextChanged);
    }

    let old_word = word_at(&event.line_text, event.old_position.column);
    let new_word = word_at(&event.line_text, event.new_position.column);
    (old_word != new_word).then_some(WordChange::WordDiffers)
}

/// Whether the move requires a toggle evaluation
pub fn has_word_changed(event: &CursorMoveEvent) -> bool {
    classify(event).is_some()
}
