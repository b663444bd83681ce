//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use auto_highlight::model::{Document, Keyword, Position};
use auto_highlight::{HighlightConfig, HighlightEngine, HighlightEventChannel, Msg};

/// Every notification a subscriber saw, as plain strings
#[derive(Clone, Default)]
pub struct Recorder {
    seen: Arc<Mutex<Vec<Vec<String>>>>,
}

impl Recorder {
    /// Subscribe a new recorder to `channel`
    pub fn attach(channel: &HighlightEventChannel) -> Self {
        let recorder = Self::default();
        let seen = Arc::clone(&recorder.seen);
        channel
            .subscribe(move |keywords: &[Keyword]| {
                seen.lock()
                    .unwrap()
                    .push(keywords.iter().map(|kw| kw.as_str().to_string()).collect());
            })
            .unwrap();
        recorder
    }

    pub fn notifications(&self) -> Vec<Vec<String>> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<Vec<String>> {
        self.seen.lock().unwrap().last().cloned()
    }
}

/// Config with explicit limits, highlighting enabled
pub fn config(min_length: usize, max_words: usize) -> HighlightConfig {
    HighlightConfig {
        highlight_selection: true,
        highlight_selection_minimum_length: min_length,
        highlight_selection_max_number_of_word: max_words,
    }
}

/// Engine plus a recorder on its channel
pub fn engine_with(config: HighlightConfig) -> (HighlightEngine, Recorder) {
    let engine = HighlightEngine::new(config);
    let recorder = Recorder::attach(engine.channel());
    (engine, recorder)
}

/// Document with `text`, optionally named with a path for its extension
pub fn doc(text: &str, path: Option<&str>) -> Document {
    let document = Document::with_text(text);
    match path {
        Some(path) => document.with_path(path),
        None => document,
    }
}

/// Move the document cursor and build the matching message
pub fn move_to(document: &mut Document, row: usize, column: usize) -> Msg {
    let new = Position::new(row, column);
    let old = document.set_cursor(new);
    Msg::CursorMoved {
        old,
        new,
        text_changed: false,
    }
}

/// Keyword strings of a snapshot
pub fn names(keywords: &[Keyword]) -> Vec<String> {
    keywords.iter().map(|kw| kw.as_str().to_string()).collect()
}
