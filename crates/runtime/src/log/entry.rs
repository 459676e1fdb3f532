//! Log entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a log entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogKind {
    Interaction,
    Inventory,
    Profile,
    System,
    Combat,
}

/// A single game event as shown in the side panel and exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl LogEntry {
    pub fn new(kind: LogKind, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            message: message.into(),
            data,
        }
    }

    /// Case-insensitive match against the message and the serialized data.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.message.to_lowercase().contains(&query)
            || self.data.to_string().to_lowercase().contains(&query)
    }
}

/// Capacity and persistence settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Oldest entries are evicted beyond this many.
    pub max_logs: usize,
    pub persist_logs: bool,
    pub storage_key: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            max_logs: 500,
            persist_logs: false,
            storage_key: "astralNexusGameLogs".to_string(),
        }
    }
}

impl From<&game_content::LogConfig> for LogOptions {
    fn from(config: &game_content::LogConfig) -> Self {
        Self {
            max_logs: config.max_logs,
            persist_logs: config.persist_logs,
            storage_key: config.storage_key.clone(),
        }
    }
}
