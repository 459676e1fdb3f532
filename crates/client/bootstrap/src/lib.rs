//! Shared bootstrap utilities for client front-ends.
//!
//! Reads environment configuration, loads game content and assembles a
//! ready-to-play [`runtime::GameSession`] plus its [`runtime::SceneManager`].
pub mod builder;
pub mod config;

pub use builder::{SessionBuilder, SessionSetup};
pub use config::{RuntimeConfig, default_data_dir};
