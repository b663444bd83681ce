//! Document model - a text buffer with a single cursor/selection
//!
//! This is the editor the replay binary drives, and the [`HostEditor`] used in
//! tests. Real editors implement [`HostEditor`] on their own buffer types.

use ropey::Rope;
use std::path::{Path, PathBuf};

use super::position::Position;
use crate::error::HostError;
use crate::host::HostEditor;
use crate::syntax::LanguageId;
use crate::util::word_range_at;

/// Text buffer, file path, and cursor state
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for unsaved buffers)
    pub file_path: Option<PathBuf>,
    /// Cursor (selection head)
    pub cursor: Position,
    /// Selection anchor; `None` or equal to `cursor` means no selection
    pub anchor: Option<Position>,
    /// Closed editors fail every host read
    detached: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            cursor: Position::default(),
            anchor: None,
            detached: false,
        }
    }

    /// Attach a file path (drives extension and language)
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Load a document from a file path
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::with_text(&content).with_path(path))
    }

    /// Language whose reserved words apply to this document
    pub fn language(&self) -> LanguageId {
        self.file_path
            .as_deref()
            .map(LanguageId::from_path)
            .unwrap_or_default()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get a line by index, without its trailing newline
    pub fn get_line(&self, row: usize) -> Option<String> {
        if row >= self.buffer.len_lines() {
            return None;
        }
        let mut line = self.buffer.line(row).to_string();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Some(line)
    }

    /// Move the cursor, dropping any selection. Returns the previous position.
    pub fn set_cursor(&mut self, position: Position) -> Position {
        let old = self.cursor;
        self.cursor = position;
        self.anchor = None;
        old
    }

    /// Select from `anchor` to `head`; the cursor ends at `head`
    pub fn select(&mut self, anchor: Position, head: Position) {
        self.anchor = Some(anchor);
        self.cursor = head;
    }

    /// Text of the current selection (empty when none)
    ///
    /// Columns past the end of a line are clamped to its end.
    pub fn selected_text(&self) -> String {
        let Some(anchor) = self.anchor.filter(|a| *a != self.cursor) else {
            return String::new();
        };
        let (start, end) = if anchor < self.cursor {
            (anchor, self.cursor)
        } else {
            (self.cursor, anchor)
        };
        let start = self.char_offset(start);
        let end = self.char_offset(end);
        self.buffer.slice(start..end).to_string()
    }

    fn char_offset(&self, position: Position) -> usize {
        if position.row >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(position.row);
        let line_len = self.get_line(position.row).map_or(0, |l| l.chars().count());
        line_start + position.column.min(line_len)
    }

    /// Simulate the editor being closed
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

impl HostEditor for Document {
    fn line_text(&self, row: usize) -> Result<String, HostError> {
        if self.detached {
            return Err(HostError::Detached);
        }
        self.get_line(row).ok_or(HostError::RowOutOfRange {
            row,
            line_count: self.line_count(),
        })
    }

    fn cursor_word(&self) -> Result<String, HostError> {
        if self.detached {
            return Err(HostError::Detached);
        }

        let selected = self.selected_text();
        if !selected.is_empty() {
            return Ok(selected);
        }

        let line = self.line_text(self.cursor.row)?;
        Ok(word_range_at(&line, self.cursor.column)
            .map(|(start, end)| line.chars().skip(start).take(end - start).collect())
            .unwrap_or_default())
    }

    fn file_extension(&self) -> Option<String> {
        self.file_path
            .as_deref()
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
    }
}
