//! File-based Storage implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{RepositoryError, Result, Storage};

/// Stores each key as `<key>.json` under a base directory.
///
/// Writes go to a temporary file first and are then renamed over the target,
/// so a crash never leaves a half-written value behind.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a new file storage, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path)?;
        tracing::trace!("Read {} from {}", key, path.display());
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted {}", key);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{StorageExt, StorageKeys};
    use tempfile::TempDir;

    #[test]
    fn set_get_remove() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get(StorageKeys::PLAYER_ID).unwrap(), None);
        storage.set(StorageKeys::PLAYER_ID, "player_1").unwrap();
        assert_eq!(
            storage.get(StorageKeys::PLAYER_ID).unwrap().as_deref(),
            Some("player_1")
        );
        assert!(dir.path().join("playerId.json").exists());
        assert!(!dir.path().join("playerId.json.tmp").exists());

        storage.remove(StorageKeys::PLAYER_ID).unwrap();
        storage.remove(StorageKeys::PLAYER_ID).unwrap();
        assert!(!storage.contains(StorageKeys::PLAYER_ID).unwrap());
    }

    #[test]
    fn values_survive_reopening() {
        let dir = TempDir::new().unwrap();
        FileStorage::new(dir.path())
            .unwrap()
            .set_json("scores", &vec![1, 2, 3])
            .unwrap();

        let reopened = FileStorage::new(dir.path()).unwrap();
        let scores: Option<Vec<i32>> = reopened.get_json("scores").unwrap();
        assert_eq!(scores, Some(vec![1, 2, 3]));
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(matches!(
            storage.set("../escape", "x"),
            Err(RepositoryError::InvalidKey(_))
        ));
    }

    #[test]
    fn corrupted_json_is_reported() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set(StorageKeys::GAME_STATE, "{not json").unwrap();
        let loaded: Result<Option<Vec<String>>> = storage.get_json(StorageKeys::GAME_STATE);
        assert!(matches!(loaded, Err(RepositoryError::Json(_))));
    }
}
