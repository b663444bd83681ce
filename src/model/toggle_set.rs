//! Bounded set of highlighted keywords
//!
//! Eviction is a hard reset: once `max_capacity` toggles have happened since
//! the last clear, the next toggle empties the whole set before adding. There
//! is no per-item LRU.

use crate::error::HighlightError;
use crate::events::HighlightEventChannel;

use super::keyword::Keyword;

#[derive(Debug, Default)]
struct ToggleState {
    /// Insertion-ordered, no duplicates
    keywords: Vec<Keyword>,
    /// Toggles since the last clear
    toggle_count: usize,
}

/// Owns the highlighted keyword set and announces membership changes
#[derive(Debug)]
pub struct ToggleSetManager {
    /// `None` once destroyed
    state: Option<ToggleState>,
    max_capacity: usize,
    channel: HighlightEventChannel,
}

impl ToggleSetManager {
    /// Create an empty set publishing to `channel`. Capacity is at least 1.
    pub fn new(max_capacity: usize, channel: HighlightEventChannel) -> Self {
        Self {
            state: Some(ToggleState::default()),
            max_capacity: max_capacity.max(1),
            channel,
        }
    }

    fn state(&self) -> Result<&ToggleState, HighlightError> {
        self.state.as_ref().ok_or(HighlightError::Destroyed)
    }

    fn state_mut(&mut self) -> Result<&mut ToggleState, HighlightError> {
        self.state.as_mut().ok_or(HighlightError::Destroyed)
    }

    /// Add `word` if absent, remove it if present
    ///
    /// When the toggle count has reached capacity the set is emptied and the
    /// count reset first, so `word` always ends up as the only member.
    /// Returns the resulting set. Subscribers see the same snapshot, but only
    /// when membership actually changed.
    pub fn toggle(&mut self, word: Keyword) -> Result<Vec<Keyword>, HighlightError> {
        let max_capacity = self.max_capacity;
        let state = self.state_mut()?;

        if state.toggle_count >= max_capacity {
            if state.keywords.len() == 1 && state.keywords[0] == word {
                // Reset and re-add would leave the set as it is
                tracing::debug!(keyword = %word, "toggle limit reached, set unchanged");
                state.toggle_count = 1;
                return Ok(state.keywords.clone());
            }
            tracing::debug!(
                evicted = state.keywords.len(),
                "toggle limit {} reached, clearing highlights",
                max_capacity
            );
            state.keywords.clear();
            state.toggle_count = 0;
        }

        if let Some(idx) = state.keywords.iter().position(|kw| *kw == word) {
            tracing::debug!(keyword = %word, "toggle off");
            state.keywords.remove(idx);
        } else {
            tracing::debug!(keyword = %word, "toggle on");
            state.keywords.push(word);
        }
        state.toggle_count += 1;

        let snapshot = state.keywords.clone();
        self.channel.publish(&snapshot);
        Ok(snapshot)
    }

    /// Empty the set and reset the toggle count
    ///
    /// Only notifies if something was actually removed.
    pub fn clear(&mut self) -> Result<(), HighlightError> {
        let state = self.state_mut()?;
        let had_keywords = !state.keywords.is_empty();
        state.keywords.clear();
        state.toggle_count = 0;

        if had_keywords {
            tracing::debug!("highlights cleared");
            self.channel.publish(&[]);
        }
        Ok(())
    }

    /// Release all state; every later call fails with [`HighlightError::Destroyed`]
    pub fn destroy(&mut self) -> Result<(), HighlightError> {
        self.state.take().ok_or(HighlightError::Destroyed)?;
        tracing::debug!("keyword manager destroyed");
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.is_none()
    }

    /// Current set in insertion order
    pub fn keywords(&self) -> Result<&[Keyword], HighlightError> {
        Ok(&self.state()?.keywords)
    }

    pub fn contains(&self, word: &str) -> Result<bool, HighlightError> {
        Ok(self.state()?.keywords.iter().any(|kw| kw == word))
    }

    pub fn len(&self) -> Result<usize, HighlightError> {
        Ok(self.state()?.keywords.len())
    }

    pub fn is_empty(&self) -> Result<bool, HighlightError> {
        Ok(self.state()?.keywords.is_empty())
    }

    /// Toggles since the last clear
    pub fn toggle_count(&self) -> Result<usize, HighlightError> {
        Ok(self.state()?.toggle_count)
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Takes effect from the next toggle; the current set is left alone
    pub fn set_max_capacity(&mut self, max_capacity: usize) {
        self.max_capacity = max_capacity.max(1);
    }
}
