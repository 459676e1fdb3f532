//! Descriptions of individual state mutations.
//!
//! Every mutator on [`GameState`](super::GameState) returns a [`StateChange`]
//! so callers can journal what happened without the state knowing about any
//! log sink.
use super::{QuestStatus, Value};

/// A single mutation applied to the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateChange {
    ItemAdded {
        item: String,
    },
    ItemRemoved {
        item: String,
    },
    FlagSet {
        flag: String,
    },
    FlagCleared {
        flag: String,
    },
    StatChanged {
        stat: String,
        old: Option<i64>,
        new: i64,
    },
    VariableSet {
        key: String,
        value: Value,
    },
    QuestChanged {
        quest: String,
        status: QuestStatus,
    },
}

impl StateChange {
    /// Returns true for inventory mutations.
    pub fn is_inventory(&self) -> bool {
        matches!(self, Self::ItemAdded { .. } | Self::ItemRemoved { .. })
    }
}
