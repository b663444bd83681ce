//! Message types for the Elm-style architecture
//!
//! Everything the host tells the engine arrives as a [`Msg`].

use crate::commands::CommandId;
use crate::config::HighlightConfig;
use crate::model::Position;

/// Host-to-engine messages
#[derive(Debug, Clone)]
pub enum Msg {
    /// The cursor moved; the line text is read from the host on handling
    CursorMoved {
        old: Position,
        new: Position,
        /// Move was caused by an edit
        text_changed: bool,
    },
    /// A registered command was invoked
    Command(CommandId),
    /// Options changed in the host's settings
    ConfigChanged(HighlightConfig),
}
