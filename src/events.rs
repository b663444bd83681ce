//! `did-change-highlight` notification channel
//!
//! Subscribers receive the ordered keyword set every time its membership
//! changes. Publishing snapshots the subscriber list first, so handlers may
//! subscribe or unsubscribe while a publish is in flight. A handler removed
//! mid-publish is not called for the remainder of that publish.
//!
//! Publishing is not re-entrant. Each handler runs while holding its own
//! lock, so a handler that publishes on this channel (or a clone of it)
//! deadlocks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::error::HighlightError;
use crate::model::Keyword;

/// Callback invoked with the current highlight set
pub type HighlightHandler = Box<dyn FnMut(&[Keyword]) + Send>;

struct Entry {
    id: u64,
    active: AtomicBool,
    handler: Mutex<HighlightHandler>,
}

#[derive(Default)]
struct ChannelState {
    next_id: u64,
    entries: Vec<Arc<Entry>>,
    disposed: bool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Fan-out channel for highlight changes
///
/// Cloning yields another handle to the same channel.
#[derive(Clone, Default)]
pub struct HighlightEventChannel {
    state: Arc<Mutex<ChannelState>>,
}

impl std::fmt::Debug for HighlightEventChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("HighlightEventChannel")
            .field("subscribers", &state.entries.len())
            .field("disposed", &state.disposed)
            .finish()
    }
}

impl HighlightEventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it is called in subscription order
    pub fn subscribe<F>(&self, handler: F) -> Result<Subscription, HighlightError>
    where
        F: FnMut(&[Keyword]) + Send + 'static,
    {
        let mut state = lock(&self.state);
        if state.disposed {
            return Err(HighlightError::Destroyed);
        }

        let id = state.next_id;
        state.next_id += 1;
        state.entries.push(Arc::new(Entry {
            id,
            active: AtomicBool::new(true),
            handler: Mutex::new(Box::new(handler)),
        }));
        tracing::trace!(id, subscribers = state.entries.len(), "subscribed");

        Ok(Subscription {
            id,
            channel: Arc::downgrade(&self.state),
        })
    }

    /// Deliver `keywords` to every current subscriber
    ///
    /// Must not be called from inside a handler.
    pub fn publish(&self, keywords: &[Keyword]) {
        let snapshot: Vec<Arc<Entry>> = {
            let state = lock(&self.state);
            if state.disposed {
                return;
            }
            state.entries.clone()
        };

        tracing::debug!(
            subscribers = snapshot.len(),
            keywords = keywords.len(),
            "did-change-highlight"
        );

        for entry in snapshot {
            if entry.active.load(Ordering::Acquire) {
                let mut handler = lock(&entry.handler);
                (*handler)(keywords);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.state).entries.len()
    }

    pub fn is_disposed(&self) -> bool {
        lock(&self.state).disposed
    }

    /// Drop all subscribers and refuse new ones
    pub fn dispose(&self) {
        let mut state = lock(&self.state);
        for entry in state.entries.drain(..) {
            entry.active.store(false, Ordering::Release);
        }
        state.disposed = true;
    }
}

fn remove_entry(state: &Mutex<ChannelState>, id: u64) {
    let mut state = lock(state);
    if let Some(idx) = state.entries.iter().position(|entry| entry.id == id) {
        let entry = state.entries.remove(idx);
        entry.active.store(false, Ordering::Release);
    }
}

/// Handle returned by [`HighlightEventChannel::subscribe`]
///
/// Dropping the handle keeps the handler registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    channel: Weak<Mutex<ChannelState>>,
}

impl Subscription {
    /// Remove the handler. No-op if the channel is already gone.
    pub fn unsubscribe(self) {
        if let Some(state) = self.channel.upgrade() {
            remove_entry(&state, self.id);
        }
    }
}
