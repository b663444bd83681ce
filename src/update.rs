//! Update function for the Elm-style architecture
//!
//! This is the handler boundary: host reads happen here, and a failing host
//! read drops the event (logged) before the engine sees it. Only
//! [`HighlightError::Destroyed`] escapes, since using a torn-down engine is a
//! caller bug.

use tracing::{debug, span, warn, Level};

use crate::commands::CommandId;
use crate::engine::{CursorDecision, HighlightEngine};
use crate::error::{HighlightError, HostError};
use crate::host::HostEditor;
use crate::messages::Msg;
use crate::model::{CursorMoveEvent, Keyword};

/// Result of handling one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A cursor move was evaluated
    Cursor(CursorDecision),
    /// `toggle-current-word` toggled a keyword; carries the resulting set
    Toggled(Vec<Keyword>),
    /// `toggle-current-word` found nothing highlightable
    Ignored,
    /// `clear-highlights` ran
    Cleared,
    /// New options are in effect
    ConfigApplied,
    /// The host could not supply the data for this event
    Dropped(HostError),
}

/// Main update function
pub fn update(
    engine: &mut HighlightEngine,
    host: &dyn HostEditor,
    msg: Msg,
) -> Result<UpdateOutcome, HighlightError> {
    let span = span!(Level::DEBUG, "update", msg = ?msg);
    let _guard = span.enter();

    if !engine.is_active() {
        return Err(HighlightError::Destroyed);
    }

    match msg {
        Msg::CursorMoved {
            old,
            new,
            text_changed,
        } => {
            // Skip the host read entirely when highlighting is off
            if !engine.config().highlight_selection {
                return Ok(UpdateOutcome::Cursor(CursorDecision::Disabled));
            }

            let line_text = match host.line_text(new.row) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Dropping cursor event: {}", e);
                    return Ok(UpdateOutcome::Dropped(e));
                }
            };
            let event = CursorMoveEvent::new(old, new, line_text, text_changed);
            let extension = host.file_extension();
            let decision = engine.on_cursor_moved(&event, extension.as_deref())?;
            debug!(?decision, "cursor evaluated");
            Ok(UpdateOutcome::Cursor(decision))
        }
        Msg::Command(CommandId::ToggleCurrentWord) => {
            let word = match host.cursor_word() {
                Ok(word) => word,
                Err(e) => {
                    warn!("Dropping toggle command: {}", e);
                    return Ok(UpdateOutcome::Dropped(e));
                }
            };
            match engine.toggle_word(&word) {
                Ok(keywords) => Ok(UpdateOutcome::Toggled(keywords)),
                Err(HighlightError::InvalidKeyword(word)) => {
                    debug!(word, "nothing to toggle");
                    Ok(UpdateOutcome::Ignored)
                }
                Err(e) => Err(e),
            }
        }
        Msg::Command(CommandId::ClearHighlights) => {
            engine.clear()?;
            Ok(UpdateOutcome::Cleared)
        }
        Msg::ConfigChanged(config) => {
            engine.apply_config(config)?;
            Ok(UpdateOutcome::ConfigApplied)
        }
    }
}
