//! Builds the session and scene manager used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::{ConfigLoader, GameConfig, SceneLoader};
use game_core::GameState;
use runtime::{
    FileStorage, GameSession, InMemoryStorage, LogManager, LogOptions, SceneManager, Storage,
};

use crate::config::RuntimeConfig;

/// Builder that assembles storage, content and the session for clients.
pub struct SessionBuilder {
    config: RuntimeConfig,
}

impl SessionBuilder {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Loads content, opens storage and activates the start scene.
    pub fn build(self) -> Result<SessionSetup> {
        let mut game_config = self.load_game_config()?;
        if let Some(persist_logs) = self.config.persist_logs {
            game_config.log.persist_logs = persist_logs;
        }
        if let Some(max_logs) = self.config.max_logs {
            game_config.log.max_logs = max_logs;
        }

        let storage = self.open_storage()?;
        let log = LogManager::with_storage(LogOptions::from(&game_config.log), storage.clone());
        let state = GameState::with_stats(game_config.starting_stats.clone());
        let mut session =
            GameSession::new(state, log, storage).context("Failed to open game session")?;

        let mut graph = SceneLoader::load_builtin()?;
        if let Some(dir) = &self.config.content_dir {
            graph.extend(SceneLoader::load_dir(dir)?);
        }
        tracing::info!(scenes = graph.len(), "content loaded");

        let mut manager =
            SceneManager::with_content(graph).context("Failed to assemble scenes")?;
        manager
            .switch_scene(game_config.start_scene.clone(), &mut session)
            .with_context(|| format!("Failed to enter scene {}", game_config.start_scene))?;

        Ok(SessionSetup {
            config: self.config,
            game_config,
            session,
            manager,
        })
    }

    fn load_game_config(&self) -> Result<GameConfig> {
        match &self.config.config_path {
            Some(path) => ConfigLoader::load(path),
            None => ConfigLoader::load_builtin(),
        }
    }

    fn open_storage(&self) -> Result<Arc<dyn Storage>> {
        if !self.config.persist {
            return Ok(Arc::new(InMemoryStorage::new()));
        }
        let storage = FileStorage::new(&self.config.data_dir).with_context(|| {
            format!(
                "Failed to open data directory {}",
                self.config.data_dir.display()
            )
        })?;
        tracing::info!(dir = %self.config.data_dir.display(), "using file storage");
        Ok(Arc::new(storage))
    }
}

pub struct SessionSetup {
    pub config: RuntimeConfig,
    pub game_config: GameConfig,
    pub session: GameSession,
    pub manager: SceneManager,
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::SceneId;

    fn config_in(dir: &std::path::Path) -> RuntimeConfig {
        RuntimeConfig {
            data_dir: dir.to_path_buf(),
            ..RuntimeConfig::default()
        }
    }

    #[test]
    fn builds_session_on_the_menu() {
        let dir = tempfile::tempdir().unwrap();
        let setup = SessionBuilder::new(config_in(dir.path())).build().unwrap();

        assert_eq!(setup.manager.current(), Some(&SceneId::MENU));
        assert_eq!(setup.session.state().get_stat("health"), Some(100));
        assert_eq!(setup.session.log().search("Switched to scene: menu").len(), 1);
    }

    #[test]
    fn log_overrides_apply() {
        let dir = tempfile::tempdir().unwrap();
        let config = RuntimeConfig {
            persist_logs: Some(true),
            max_logs: Some(3),
            ..config_in(dir.path())
        };
        let setup = SessionBuilder::new(config).build().unwrap();
        assert!(setup.game_config.log.persist_logs);
        assert_eq!(setup.session.log().options().max_logs, 3);
    }

    #[test]
    fn extra_content_can_replace_scenes() {
        let dir = tempfile::tempdir().unwrap();
        let content = tempfile::tempdir().unwrap();
        std::fs::write(
            content.path().join("game.ron"),
            r#"[Adventure((id: "game", narrative: "A quieter station.", choices: [(text: "Leave", next_scene: Some("menu"))]))]"#,
        )
        .unwrap();

        let config = RuntimeConfig {
            persist: false,
            content_dir: Some(content.path().to_path_buf()),
            ..config_in(dir.path())
        };
        let setup = SessionBuilder::new(config).build().unwrap();
        assert_eq!(setup.manager.current(), Some(&SceneId::MENU));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn dangling_content_fails_to_build() {
        let content = tempfile::tempdir().unwrap();
        std::fs::write(
            content.path().join("broken.ron"),
            r#"[Adventure((id: "bridge", narrative: "", choices: [(text: "Jump", next_scene: Some("nowhere"))]))]"#,
        )
        .unwrap();

        let config = RuntimeConfig {
            persist: false,
            content_dir: Some(content.path().to_path_buf()),
            ..RuntimeConfig::default()
        };
        assert!(SessionBuilder::new(config).build().is_err());
    }
}
