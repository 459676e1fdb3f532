//! Event handler implementations for EventLoop.
//!
//! - `input`: keyboard input and scene transitions
//! - `rendering`: terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod input;
mod rendering;
