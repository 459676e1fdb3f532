//! Game tuning loaded from `game.toml`.
use game_core::SceneId;
use indexmap::IndexMap;
use game_core::state::{DEFAULT_STAT_VALUE, ENERGY, HEALTH};

/// Top-level game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Scene activated at startup.
    pub start_scene: SceneId,
    /// Stats a fresh game starts with.
    pub starting_stats: IndexMap<String, i64>,
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    pub max_logs: usize,
    pub persist_logs: bool,
    pub storage_key: String,
}

impl LogConfig {
    pub const DEFAULT_MAX_LOGS: usize = 500;
    pub const DEFAULT_STORAGE_KEY: &'static str = "astralNexusGameLogs";
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_logs: Self::DEFAULT_MAX_LOGS,
            persist_logs: false,
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_scene: SceneId::MENU,
            starting_stats: IndexMap::from([
                (HEALTH.to_string(), DEFAULT_STAT_VALUE),
                (ENERGY.to_string(), DEFAULT_STAT_VALUE),
            ]),
            log: LogConfig::default(),
        }
    }
}
