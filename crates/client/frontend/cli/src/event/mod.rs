//! Event handling for CLI client.
//!
//! This module contains the event loop orchestrator that coordinates log
//! entries, user input, the typewriter animation and UI updates.

mod handlers;
mod r#loop;
mod typewriter;

pub use r#loop::EventLoop;
pub use typewriter::Typewriter;
