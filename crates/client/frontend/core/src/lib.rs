//! Cross-frontend primitives for presenting the game.
//!
//! Houses the frontend trait, message logging and the side panel view model
//! that both the CLI and future graphical clients can reuse.
pub mod config;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, TypewriterConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLog};
pub use view_model::{InfoLine, PresentationMapper, SidePanelView, StatLine};
