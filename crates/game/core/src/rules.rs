//! Declarative guards and side effects attached to scenes and choices.
//!
//! Conditions are pure predicates over [`GameState`]. Effects describe a
//! mutation; state effects are applied here, while profile and save effects
//! need storage and are carried out by the runtime.
use crate::profile::ProfileField;
use crate::state::{GameState, QuestStatus, StateChange, Value};

/// Guard deciding whether a choice is offered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    HasFlag(String),
    MissingFlag(String),
    HasItem(String),
    MissingItem(String),
    StatAtLeast { stat: String, value: i64 },
    StatBelow { stat: String, value: i64 },
    VariableEquals { key: String, value: Value },
    QuestIs { quest: String, status: QuestStatus },
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    /// Evaluates the condition. A missing stat never satisfies a comparison.
    pub fn evaluate(&self, state: &GameState) -> bool {
        match self {
            Condition::HasFlag(flag) => state.has_flag(flag),
            Condition::MissingFlag(flag) => !state.has_flag(flag),
            Condition::HasItem(item) => state.has_item(item),
            Condition::MissingItem(item) => !state.has_item(item),
            Condition::StatAtLeast { stat, value } => {
                state.get_stat(stat).is_some_and(|current| current >= *value)
            }
            Condition::StatBelow { stat, value } => {
                state.get_stat(stat).is_some_and(|current| current < *value)
            }
            Condition::VariableEquals { key, value } => state.get_variable(key) == Some(value),
            Condition::QuestIs { quest, status } => state.quest(quest) == Some(*status),
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(state)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(state)),
            Condition::Not(condition) => !condition.evaluate(state),
        }
    }
}

/// Side effect run when a choice is selected or a scene is entered/left.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    SetFlag(String),
    ClearFlag(String),
    AddItem(String),
    RemoveItem(String),
    SetStat { stat: String, value: i64 },
    AdjustStat { stat: String, delta: i64 },
    SetVariable { key: String, value: Value },
    StartQuest(String),
    CompleteQuest(String),
    FailQuest(String),
    SetProfile { field: ProfileField, value: String },
    SaveGame,
}

/// What applying an effect to the state produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    /// The state changed.
    State(StateChange),
    /// The effect touches the profile; the caller must persist it.
    Profile { field: ProfileField, value: String },
    /// The caller must persist the game state.
    Save,
}

impl Effect {
    /// Applies the state part of the effect.
    pub fn apply(&self, state: &mut GameState) -> EffectOutcome {
        let change = match self {
            Effect::SetFlag(flag) => state.set_flag(flag.as_str()),
            Effect::ClearFlag(flag) => state.clear_flag(flag.as_str()),
            Effect::AddItem(item) => state.add_item(item.as_str()),
            Effect::RemoveItem(item) => state.remove_item(item.as_str()),
            Effect::SetStat { stat, value } => state.set_stat(stat.as_str(), *value),
            Effect::AdjustStat { stat, delta } => state.adjust_stat(stat.as_str(), *delta),
            Effect::SetVariable { key, value } => state.set_variable(key.as_str(), value.clone()),
            Effect::StartQuest(quest) => state.start_quest(quest.as_str()),
            Effect::CompleteQuest(quest) => state.complete_quest(quest.as_str()),
            Effect::FailQuest(quest) => state.fail_quest(quest.as_str()),
            Effect::SetProfile { field, value } => {
                return EffectOutcome::Profile {
                    field: *field,
                    value: value.clone(),
                };
            }
            Effect::SaveGame => return EffectOutcome::Save,
        };
        EffectOutcome::State(change)
    }
}
