//! Terminal UI frontend for Astral Nexus.
//!
//! This crate implements the `client_frontend_core::Frontend` trait with a
//! ratatui interface: the active scene on the left, logs, quests,
//! inventory, stats and player information on the right.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the game session and scene manager from the client
//! - Forwards key presses to the scene manager
//! - Mirrors log entries into the side panel via a log subscription

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
