//! Model types: positions, keywords, the toggle set, and the host document

pub mod document;
pub mod keyword;
pub mod position;
pub mod status_bar;
pub mod toggle_set;

pub use document::Document;
pub use keyword::Keyword;
pub use position::{CursorMoveEvent, Position};
pub use status_bar::{HighlightStatus, StatusBarItem};
pub use toggle_set::ToggleSetManager;
