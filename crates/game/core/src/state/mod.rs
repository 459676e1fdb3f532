//! Mutable game state shared by every scene.
//!
//! The state is a plain bag of stats, flags, inventory, variables and quests.
//! Scenes read it to evaluate choice conditions and mutate it through effects.
//! Mutators never log on their own; they return a [`StateChange`] that the
//! runtime turns into log entries.
mod change;
mod value;

use indexmap::{IndexMap, IndexSet};

pub use change::StateChange;
pub use value::{QuestStatus, Value};

/// Stat every new game starts with.
pub const HEALTH: &str = "health";
/// Stat every new game starts with.
pub const ENERGY: &str = "energy";

/// Starting value for [`HEALTH`] and [`ENERGY`].
pub const DEFAULT_STAT_VALUE: i64 = 100;

/// Canonical game state.
///
/// Collections keep insertion order so the side panel lists items and quests
/// in the order the player obtained them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    inventory: IndexSet<String>,
    stats: IndexMap<String, i64>,
    flags: IndexSet<String>,
    variables: IndexMap<String, Value>,
    quests: IndexMap<String, QuestStatus>,
}

impl GameState {
    /// Creates a state with the default `health` and `energy` stats.
    pub fn new() -> Self {
        Self::with_stats([
            (HEALTH.to_string(), DEFAULT_STAT_VALUE),
            (ENERGY.to_string(), DEFAULT_STAT_VALUE),
        ])
    }

    /// Creates a state seeded with the given stats.
    pub fn with_stats(stats: impl IntoIterator<Item = (String, i64)>) -> Self {
        Self {
            inventory: IndexSet::new(),
            stats: stats.into_iter().collect(),
            flags: IndexSet::new(),
            variables: IndexMap::new(),
            quests: IndexMap::new(),
        }
    }

    // ===== inventory =====

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    pub fn add_item(&mut self, item: impl Into<String>) -> StateChange {
        let item = item.into();
        self.inventory.insert(item.clone());
        StateChange::ItemAdded { item }
    }

    /// Removes an item. Removing an absent item still reports the change.
    pub fn remove_item(&mut self, item: impl Into<String>) -> StateChange {
        let item = item.into();
        self.inventory.shift_remove(&item);
        StateChange::ItemRemoved { item }
    }

    pub fn inventory(&self) -> impl Iterator<Item = &str> {
        self.inventory.iter().map(String::as_str)
    }

    // ===== flags =====

    pub fn set_flag(&mut self, flag: impl Into<String>) -> StateChange {
        let flag = flag.into();
        self.flags.insert(flag.clone());
        StateChange::FlagSet { flag }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn clear_flag(&mut self, flag: impl Into<String>) -> StateChange {
        let flag = flag.into();
        self.flags.shift_remove(&flag);
        StateChange::FlagCleared { flag }
    }

    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    // ===== stats =====

    pub fn set_stat(&mut self, stat: impl Into<String>, value: i64) -> StateChange {
        let stat = stat.into();
        let old = self.stats.insert(stat.clone(), value);
        StateChange::StatChanged {
            stat,
            old,
            new: value,
        }
    }

    pub fn get_stat(&self, stat: &str) -> Option<i64> {
        self.stats.get(stat).copied()
    }

    /// Adds `delta` to a stat, treating a missing stat as zero.
    pub fn adjust_stat(&mut self, stat: impl Into<String>, delta: i64) -> StateChange {
        let stat = stat.into();
        let current = self.get_stat(&stat).unwrap_or(0);
        self.set_stat(stat, current.saturating_add(delta))
    }

    pub fn stats(&self) -> impl Iterator<Item = (&str, i64)> {
        self.stats.iter().map(|(name, value)| (name.as_str(), *value))
    }

    // ===== variables =====

    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<Value>) -> StateChange {
        let key = key.into();
        let value = value.into();
        self.variables.insert(key.clone(), value.clone());
        StateChange::VariableSet { key, value }
    }

    pub fn get_variable(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    // ===== quests =====

    pub fn start_quest(&mut self, quest: impl Into<String>) -> StateChange {
        self.set_quest(quest.into(), QuestStatus::Active)
    }

    pub fn complete_quest(&mut self, quest: impl Into<String>) -> StateChange {
        self.set_quest(quest.into(), QuestStatus::Completed)
    }

    pub fn fail_quest(&mut self, quest: impl Into<String>) -> StateChange {
        self.set_quest(quest.into(), QuestStatus::Failed)
    }

    pub fn quest(&self, quest: &str) -> Option<QuestStatus> {
        self.quests.get(quest).copied()
    }

    pub fn quests(&self) -> impl Iterator<Item = (&str, QuestStatus)> {
        self.quests.iter().map(|(name, status)| (name.as_str(), *status))
    }

    fn set_quest(&mut self, quest: String, status: QuestStatus) -> StateChange {
        self.quests.insert(quest.clone(), status);
        StateChange::QuestChanged { quest, status }
    }

    // ===== persistence =====

    /// Captures the state in its persisted shape.
    pub fn snapshot(&self) -> SaveData {
        SaveData {
            inventory: self.inventory.iter().cloned().collect(),
            stats: self.stats.clone(),
            flags: self.flags.iter().cloned().collect(),
            variables: self
                .variables
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            quests: self.quests.clone(),
        }
    }

    /// Replaces the whole state with previously saved data.
    pub fn restore(&mut self, data: SaveData) {
        self.inventory = data.inventory.into_iter().collect();
        self.stats = data.stats;
        self.flags = data.flags.into_iter().collect();
        self.variables = data.variables.into_iter().collect();
        self.quests = data.quests;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted representation of [`GameState`].
///
/// Variables are stored as `[key, value]` pairs to keep the on-disk shape of
/// earlier saves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveData {
    pub inventory: Vec<String>,
    pub stats: IndexMap<String, i64>,
    pub flags: Vec<String>,
    pub variables: Vec<(String, Value)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quests: IndexMap<String, QuestStatus>,
}
