//! Seam between the highlight engine and the editor hosting it
//!
//! The engine never touches a text buffer directly. Everything it needs from
//! an editor goes through [`HostEditor`], and any of it may fail (for example
//! when the editor has been closed under us).

use crate::error::HostError;

/// Read access to one editor, as seen by the highlight engine
pub trait HostEditor {
    /// Text of `row` without its line terminator
    fn line_text(&self, row: usize) -> Result<String, HostError>;

    /// Word the editor would toggle for the explicit command
    ///
    /// The selected text if there is a non-empty selection, otherwise the word
    /// an editor word-selection would pick around the cursor (empty if none).
    /// Must not move the cursor.
    fn cursor_word(&self) -> Result<String, HostError>;

    /// File extension including the leading dot (e.g. `.py`), if any
    fn file_extension(&self) -> Option<String>;
}
