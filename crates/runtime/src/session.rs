//! Per-run game session.
//!
//! [`GameSession`] owns everything scenes read and mutate: the game state,
//! the player profile, the event log and the storage backing saves. Scenes
//! receive it explicitly instead of reaching for globals.
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use game_core::{
    Effect, EffectOutcome, GameState, PlayerProfile, ProfileUpdate, SaveData, StateChange,
};

use crate::error::Result;
use crate::log::{LogManager, LogOptions};
use crate::repository::{InMemoryStorage, Storage, StorageExt, StorageKeys};

pub struct GameSession {
    state: GameState,
    profile: Option<PlayerProfile>,
    player_id: Option<String>,
    log: LogManager,
    storage: Arc<dyn Storage>,
}

impl GameSession {
    /// Creates a session, restoring the player id and profile from storage.
    ///
    /// Unreadable records are traced and skipped, so the player starts over
    /// instead of being locked out.
    pub fn new(state: GameState, log: LogManager, storage: Arc<dyn Storage>) -> Result<Self> {
        let player_id: Option<String> = load_or_skip(storage.as_ref(), StorageKeys::PLAYER_ID);
        let profile: Option<PlayerProfile> =
            load_or_skip(storage.as_ref(), StorageKeys::PLAYER_PROFILE);
        if profile.is_some() {
            log.log_system_event("Player profile loaded");
        }

        Ok(Self {
            state,
            profile,
            player_id,
            log,
            storage,
        })
    }

    /// Session with default state and throwaway in-memory storage.
    pub fn ephemeral() -> Self {
        Self {
            state: GameState::new(),
            profile: None,
            player_id: None,
            log: LogManager::new(LogOptions::default()),
            storage: Arc::new(InMemoryStorage::new()),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &LogManager {
        &self.log
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // ===== effects =====

    /// Applies an effect and journals what it changed.
    pub fn apply_effect(&mut self, effect: &Effect) -> Result<()> {
        match effect.apply(&mut self.state) {
            EffectOutcome::State(change) => {
                self.journal(&change);
                Ok(())
            }
            EffectOutcome::Profile { field, value } => {
                self.save_profile(ProfileUpdate::single(field, value))
            }
            EffectOutcome::Save => self.save_game(),
        }
    }

    pub fn apply_effects<'a>(&mut self, effects: impl IntoIterator<Item = &'a Effect>) -> Result<()> {
        for effect in effects {
            self.apply_effect(effect)?;
        }
        Ok(())
    }

    fn journal(&self, change: &StateChange) {
        match change {
            StateChange::ItemAdded { item } => {
                self.log.log_inventory("Added", item, 1);
            }
            StateChange::ItemRemoved { item } => {
                self.log.log_inventory("Removed", item, 1);
            }
            StateChange::FlagSet { flag } => {
                self.log.log_system_event(format!("Flag set: {}", flag));
            }
            StateChange::FlagCleared { flag } => {
                self.log.log_system_event(format!("Flag cleared: {}", flag));
            }
            StateChange::StatChanged { stat, old, new } => {
                let old = old.map_or_else(|| "unset".to_string(), |old| old.to_string());
                self.log
                    .log_system_event(format!("Stat {} changed: {} → {}", stat, old, new));
            }
            StateChange::VariableSet { key, value } => {
                self.log
                    .log_system_event(format!("Variable {} set to: {}", key, value));
            }
            StateChange::QuestChanged { quest, status } => {
                self.log
                    .log_system_event(format!("Quest {}: {}", status, quest));
            }
        }
    }

    // ===== profile =====

    pub fn profile(&self) -> Option<&PlayerProfile> {
        self.profile.as_ref()
    }

    pub fn player_id(&self) -> Option<&str> {
        self.player_id.as_deref()
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    /// True once the origin-story interview is finished.
    pub fn profile_complete(&self) -> bool {
        self.profile.as_ref().is_some_and(PlayerProfile::is_complete)
    }

    /// Merges answers into the profile, logging every changed field.
    ///
    /// The first save assigns and persists a player id.
    pub fn save_profile(&mut self, update: ProfileUpdate) -> Result<()> {
        let player_id = match &self.player_id {
            Some(id) => id.clone(),
            None => {
                let id = format!("player_{}", Utc::now().timestamp_millis());
                self.storage.set_json(StorageKeys::PLAYER_ID, &id)?;
                self.log.log_system_event("New player ID generated");
                self.player_id = Some(id.clone());
                id
            }
        };

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut profile = self.profile.clone().unwrap_or_default();
        for change in profile.merge(update, &player_id, &timestamp) {
            self.log.log_profile_update(&change.field, &change.value);
        }

        self.storage.set_json(StorageKeys::PLAYER_PROFILE, &profile)?;
        self.profile = Some(profile);
        Ok(())
    }

    // ===== save games =====

    pub fn save_game(&mut self) -> Result<()> {
        self.storage
            .set_json(StorageKeys::GAME_STATE, &self.state.snapshot())?;
        self.log.log_system_event("Game state saved");
        Ok(())
    }

    /// Restores the saved game. Returns false when there is none.
    pub fn load_game(&mut self) -> Result<bool> {
        let Some(data) = self.storage.get_json::<SaveData>(StorageKeys::GAME_STATE)? else {
            return Ok(false);
        };
        self.state.restore(data);
        self.log.log_system_event("Game state loaded");
        Ok(true)
    }

    pub fn has_saved_game(&self) -> Result<bool> {
        Ok(self.storage.contains(StorageKeys::GAME_STATE)?)
    }
}

fn load_or_skip<T: serde::de::DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    match storage.get_json(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, key, "Ignoring unreadable stored record");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogKind;
    use game_core::ProfileField;

    fn messages(session: &GameSession) -> Vec<String> {
        session
            .log()
            .recent(100)
            .into_iter()
            .map(|entry| entry.message)
            .collect()
    }

    #[test]
    fn corrupt_profile_is_ignored_at_startup() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.set(StorageKeys::PLAYER_PROFILE, "{broken").unwrap();
        storage.set(StorageKeys::PLAYER_ID, "\"player_7\"").unwrap();

        let session = GameSession::new(
            GameState::new(),
            LogManager::new(LogOptions::default()),
            storage,
        )
        .unwrap();

        assert!(session.profile().is_none());
        assert!(!session.profile_complete());
        assert_eq!(session.player_id(), Some("player_7"));
        assert!(session.log().search("Player profile loaded").is_empty());
    }

    #[test]
    fn state_effects_are_journaled() {
        let mut session = GameSession::ephemeral();
        session
            .apply_effects(&[
                Effect::AddItem("medkit".into()),
                Effect::SetFlag("has-medkit".into()),
                Effect::SetStat {
                    stat: "health".into(),
                    value: 80,
                },
                Effect::SetStat {
                    stat: "oxygen".into(),
                    value: 5,
                },
            ])
            .unwrap();

        assert_eq!(
            messages(&session),
            [
                "Added: medkit (x1)",
                "Flag set: has-medkit",
                "Stat health changed: 100 → 80",
                "Stat oxygen changed: unset → 5",
            ]
        );
        assert_eq!(session.log().by_kind(LogKind::Inventory, None).len(), 1);
    }

    #[test]
    fn first_profile_save_assigns_player_id() {
        let mut session = GameSession::ephemeral();
        assert!(!session.has_profile());

        session
            .save_profile(ProfileUpdate::single(ProfileField::Path, "warrior"))
            .unwrap();

        let id = session.player_id().unwrap().to_string();
        assert!(id.starts_with("player_"));
        let stored: Option<String> = session.storage().get_json(StorageKeys::PLAYER_ID).unwrap();
        assert_eq!(stored.as_deref(), Some(id.as_str()));

        let log = messages(&session);
        assert_eq!(log[0], "New player ID generated");
        assert!(log.contains(&"Updated path".to_string()));
        assert!(log.contains(&"Updated playerId".to_string()));
        assert!(session.has_profile());
        assert!(!session.profile_complete());
    }

    #[test]
    fn profile_effect_goes_through_save_profile() {
        let mut session = GameSession::ephemeral();
        session
            .apply_effect(&Effect::SetProfile {
                field: ProfileField::Motivation,
                value: "knowledge".into(),
            })
            .unwrap();
        assert_eq!(
            session.profile().and_then(|p| p.answer(ProfileField::Motivation)),
            Some("knowledge")
        );
    }

    #[test]
    fn profile_is_restored_from_storage() {
        let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
        let mut first =
            GameSession::new(GameState::new(), LogManager::default(), Arc::clone(&storage))
                .unwrap();
        first
            .save_profile(ProfileUpdate::single(ProfileField::Path, "mystic"))
            .unwrap();

        let second = GameSession::new(GameState::new(), LogManager::default(), storage).unwrap();
        assert_eq!(second.player_id(), first.player_id());
        assert_eq!(
            second.profile().and_then(|p| p.answer(ProfileField::Path)),
            Some("mystic")
        );
        assert_eq!(messages(&second), ["Player profile loaded"]);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut session = GameSession::ephemeral();
        assert!(!session.load_game().unwrap());
        assert!(!session.has_saved_game().unwrap());

        session.apply_effect(&Effect::AddItem("keycard".into())).unwrap();
        session.apply_effect(&Effect::SaveGame).unwrap();
        session.apply_effect(&Effect::RemoveItem("keycard".into())).unwrap();
        assert!(!session.state().has_item("keycard"));

        assert!(session.load_game().unwrap());
        assert!(session.state().has_item("keycard"));
        let log = messages(&session);
        assert!(log.contains(&"Game state saved".to_string()));
        assert_eq!(log.last().map(String::as_str), Some("Game state loaded"));
    }

    #[test]
    fn saved_game_uses_entry_pairs_for_variables() {
        let mut session = GameSession::ephemeral();
        session
            .apply_effect(&Effect::SetVariable {
                key: "door".into(),
                value: "open".into(),
            })
            .unwrap();
        session.save_game().unwrap();

        let raw = session.storage().get(StorageKeys::GAME_STATE).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["variables"], serde_json::json!([["door", "open"]]));
        assert_eq!(json["stats"]["health"], 100);
    }
}
