//! Session runtime for Astral Nexus.
//!
//! This crate turns the pure definitions of `game-core` into a playable
//! session: it owns the game state and player profile, journals everything
//! that happens, persists saves, and drives the interactive scenes.
//!
//! Modules are organized by responsibility:
//! - [`session`] holds per-run state, profile and save handling
//! - [`manager`] registers scenes and performs transitions
//! - [`scenes`] hosts the menu, info, adventure and prompt scenes
//! - [`log`] provides the event log with pub/sub and export
//! - [`repository`] provides key-value storage backends
pub mod error;
pub mod log;
pub mod manager;
pub mod repository;
pub mod scenes;
pub mod session;

pub use error::{Result, RuntimeError};
pub use log::{
    DEFAULT_RECENT_COUNT, ExportFormat, LogEntry, LogKind, LogManager, LogOptions,
    LogSubscription,
};
pub use manager::SceneManager;
pub use repository::{
    FileStorage, InMemoryStorage, RepositoryError, Storage, StorageExt, StorageKeys,
};
pub use scenes::{
    AdventureScene, InfoKind, InfoScene, Key, MenuScene, PromptScene, Scene, Transition,
};
pub use session::GameSession;
