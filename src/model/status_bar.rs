//! Status bar segment for the highlight set
//!
//! Keeps a short text summary ("2 highlighted: foo, bar") current by
//! listening on the highlight channel. Painting it is the host's job.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::keyword::Keyword;
use crate::error::HighlightError;
use crate::events::{HighlightEventChannel, Subscription};

/// Summary of the highlighted keywords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightStatus {
    keywords: Vec<String>,
}

impl HighlightStatus {
    pub fn from_keywords(keywords: &[Keyword]) -> Self {
        Self {
            keywords: keywords.iter().map(|kw| kw.as_str().to_owned()).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.keywords.len()
    }

    /// Text to show; empty when nothing is highlighted
    pub fn display_text(&self) -> String {
        if self.keywords.is_empty() {
            String::new()
        } else {
            format!(
                "{} highlighted: {}",
                self.keywords.len(),
                self.keywords.join(", ")
            )
        }
    }
}

/// A [`HighlightStatus`] kept in sync with a channel
#[derive(Debug)]
pub struct StatusBarItem {
    status: Arc<Mutex<HighlightStatus>>,
    subscription: Subscription,
}

impl StatusBarItem {
    pub fn attach(channel: &HighlightEventChannel) -> Result<Self, HighlightError> {
        let status = Arc::new(Mutex::new(HighlightStatus::default()));
        let target = Arc::clone(&status);
        let subscription = channel.subscribe(move |keywords| {
            *lock(&target) = HighlightStatus::from_keywords(keywords);
        })?;
        Ok(Self {
            status,
            subscription,
        })
    }

    /// Latest status
    pub fn status(&self) -> HighlightStatus {
        lock(&self.status).clone()
    }

    /// Stop listening
    pub fn detach(self) {
        self.subscription.unsubscribe();
    }
}

fn lock(status: &Mutex<HighlightStatus>) -> MutexGuard<'_, HighlightStatus> {
    status.lock().unwrap_or_else(PoisonError::into_inner)
}
