//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Narrative scenes (data-driven via RON, built-ins embedded in the binary)
//! - Game configuration (data-driven via TOML)
//! - Menu text and the title logo
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod config;
pub mod menu;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use config::{GameConfig, LogConfig};
pub use menu::{
    BoxChars, GAME_LOGO, GAME_TITLE, GAME_VERSION, GOODBYE, MENU_HINT, MenuOption, TAGLINE,
};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, SceneLoader};
