//! Auto-highlight - cursor-driven keyword highlighting
//!
//! As the cursor moves through a document, the word under it is toggled into
//! a small set of highlighted keywords. The set is bounded: after a
//! configurable number of toggles it is reset. Renderers learn about changes
//! through a `did-change-highlight` channel.
//!
//! Hosts feed [`Msg`] values into [`update::update`] together with a
//! [`host::HostEditor`] for the editor the message came from.

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod engine;
pub mod error;
pub mod events;
pub mod host;
pub mod messages;
pub mod model;
pub mod syntax;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::CommandId;
pub use config::HighlightConfig;
pub use engine::{CursorDecision, HighlightEngine};
pub use error::{HighlightError, HostError};
pub use events::{HighlightEventChannel, Subscription};
pub use host::HostEditor;
pub use messages::Msg;
pub use model::{CursorMoveEvent, Document, Keyword, Position, ToggleSetManager};
pub use update::UpdateOutcome;
