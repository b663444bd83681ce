//! The highlight engine: one instance per editing session
//!
//! Owns the configuration, the notification channel, and the keyword manager.
//! The manager is created on first need (or eagerly when `highlightSelection`
//! is on) and lives until [`HighlightEngine::deactivate`]. Several editors may
//! feed the same engine; their cursor history travels inside each event.

use crate::classifier::classify;
use crate::config::HighlightConfig;
use crate::error::HighlightError;
use crate::events::{HighlightEventChannel, Subscription};
use crate::model::{CursorMoveEvent, Keyword, ToggleSetManager};
use crate::syntax::is_reserved;
use crate::util::word_at;

/// What happened to a cursor-move event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorDecision {
    /// `highlightSelection` is off
    Disabled,
    /// Still on the same word
    WordUnchanged,
    /// Word has characters other than letters/underscore (or is empty)
    NotIdentifier,
    /// Shorter than `highlightSelectionMinimumLength`
    TooShort,
    /// Reserved word of the file's language
    Reserved,
    /// The word was toggled; carries the resulting set
    Toggled(Vec<Keyword>),
}

/// Cursor-driven toggle engine for one editing session
#[derive(Debug)]
pub struct HighlightEngine {
    config: HighlightConfig,
    channel: HighlightEventChannel,
    manager: Option<ToggleSetManager>,
    deactivated: bool,
}

impl Default for HighlightEngine {
    fn default() -> Self {
        Self::new(HighlightConfig::default())
    }
}

impl HighlightEngine {
    /// Activate a session with `config`
    pub fn new(config: HighlightConfig) -> Self {
        let config = config.sanitized();
        let channel = HighlightEventChannel::new();
        let manager = config.highlight_selection.then(|| {
            ToggleSetManager::new(
                config.highlight_selection_max_number_of_word,
                channel.clone(),
            )
        });
        tracing::info!(
            enabled = config.highlight_selection,
            min_length = config.highlight_selection_minimum_length,
            max_words = config.highlight_selection_max_number_of_word,
            "highlight engine activated"
        );
        Self {
            config,
            channel,
            manager,
            deactivated: false,
        }
    }

    fn ensure_active(&self) -> Result<(), HighlightError> {
        if self.deactivated {
            Err(HighlightError::Destroyed)
        } else {
            Ok(())
        }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn channel(&self) -> &HighlightEventChannel {
        &self.channel
    }

    pub fn is_active(&self) -> bool {
        !self.deactivated
    }

    /// Keyword manager has been created
    pub fn is_initialized(&self) -> bool {
        self.manager.is_some()
    }

    /// Listen for `did-change-highlight`
    pub fn subscribe<F>(&self, handler: F) -> Result<Subscription, HighlightError>
    where
        F: FnMut(&[Keyword]) + Send + 'static,
    {
        self.ensure_active()?;
        self.channel.subscribe(handler)
    }

    /// The keyword manager, created on first access
    pub fn keyword_manager(&mut self) -> Result<&mut ToggleSetManager, HighlightError> {
        self.ensure_active()?;
        let capacity = self.config.highlight_selection_max_number_of_word;
        let channel = &self.channel;
        Ok(self.manager.get_or_insert_with(|| {
            tracing::debug!("keyword manager initialized");
            ToggleSetManager::new(capacity, channel.clone())
        }))
    }

    /// Current highlight set (empty before the manager exists)
    pub fn keywords(&self) -> Result<Vec<Keyword>, HighlightError> {
        self.ensure_active()?;
        match &self.manager {
            Some(manager) => Ok(manager.keywords()?.to_vec()),
            None => Ok(Vec::new()),
        }
    }

    /// Swap in new options
    ///
    /// Capacity changes apply from the next toggle. Turning
    /// `highlightSelection` on initializes the keyword manager.
    pub fn apply_config(&mut self, config: HighlightConfig) -> Result<(), HighlightError> {
        self.ensure_active()?;
        let config = config.sanitized();
        if let Some(manager) = self.manager.as_mut() {
            manager.set_max_capacity(config.highlight_selection_max_number_of_word);
        }
        let enable = config.highlight_selection;
        self.config = config;
        if enable {
            self.keyword_manager()?;
        }
        tracing::debug!(config = ?self.config, "config applied");
        Ok(())
    }

    /// Evaluate one cursor move and toggle the word under the cursor if it
    /// qualifies
    ///
    /// `extension` is the file's dotted extension, used for reserved words.
    /// Nothing is mutated unless every check passes.
    pub fn on_cursor_moved(
        &mut self,
        event: &CursorMoveEvent,
        extension: Option<&str>,
    ) -> Result<CursorDecision, HighlightError> {
        self.ensure_active()?;

        if !self.config.highlight_selection {
            return Ok(CursorDecision::Disabled);
        }

        let Some(change) = classify(event) else {
            return Ok(CursorDecision::WordUnchanged);
        };

        let word = word_at(&event.line_text, event.new_position.column);
        tracing::debug!(?change, word, "word under cursor changed");

        let Ok(keyword) = Keyword::new(word) else {
            return Ok(CursorDecision::NotIdentifier);
        };
        if keyword.char_count() < self.config.highlight_selection_minimum_length {
            return Ok(CursorDecision::TooShort);
        }
        if is_reserved(extension, keyword.as_str()) {
            tracing::debug!(word, extension, "skipping reserved word");
            return Ok(CursorDecision::Reserved);
        }

        let keywords = self.keyword_manager()?.toggle(keyword)?;
        Ok(CursorDecision::Toggled(keywords))
    }

    /// Toggle `word` directly, bypassing the cursor classifier and the
    /// length/reserved-word filters
    pub fn toggle_word(&mut self, word: &str) -> Result<Vec<Keyword>, HighlightError> {
        self.ensure_active()?;
        let keyword = Keyword::new(word)?;
        self.keyword_manager()?.toggle(keyword)
    }

    /// Drop every highlight. Does nothing before the manager exists.
    pub fn clear(&mut self) -> Result<(), HighlightError> {
        self.ensure_active()?;
        match self.manager.as_mut() {
            Some(manager) => manager.clear(),
            None => Ok(()),
        }
    }

    /// Tear down the session: destroy the manager and drop all subscribers
    pub fn deactivate(&mut self) -> Result<(), HighlightError> {
        self.ensure_active()?;
        if let Some(mut manager) = self.manager.take() {
            manager.destroy()?;
        }
        self.channel.dispose();
        self.deactivated = true;
        tracing::info!("highlight engine deactivated");
        Ok(())
    }
}
