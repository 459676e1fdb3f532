//! Storage contract and typed helpers on top of it.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Result;

/// Well-known storage keys.
pub struct StorageKeys;

impl StorageKeys {
    pub const GAME_STATE: &'static str = "gameState";
    pub const PLAYER_PROFILE: &'static str = "playerProfile";
    pub const PLAYER_ID: &'static str = "playerId";
}

/// String key/value store.
///
/// Values are opaque strings; callers decide the encoding (JSON everywhere
/// in this crate).
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// JSON helpers for any [`Storage`].
pub trait StorageExt: Storage {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}
