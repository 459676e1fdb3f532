//! Top-level client wiring the game session to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ GameSession (state, profile, logs, storage)
//!   ├─→ SceneManager (active scene and transitions)
//!   └─→ Frontend (UI layer - CLI, ...)
//! ```
//!
//! The client is the composition root: every layer is built independently
//! and injected through [`ClientBuilder`]. The frontend takes ownership of
//! the session and scenes for the lifetime of the UI.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::{GameSession, SceneManager};

/// Top-level client container.
pub struct Client {
    session: GameSession,
    scenes: SceneManager,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Transfers control to the frontend until the player quits.
    pub async fn run(self) -> Result<()> {
        let Client {
            session,
            scenes,
            mut frontend,
        } = self;

        tracing::info!(scene = ?scenes.current(), "Handing control to frontend");
        let result = frontend.run(session, scenes).await;
        if let Err(err) = &result {
            tracing::error!("Frontend error: {}", err);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use game_core::SceneId;
    use runtime::Key;
    use std::sync::{Arc, Mutex};

    /// Frontend that presses Down to reach Exit and then Enter.
    struct ScriptedFrontend {
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, mut session: GameSession, mut scenes: SceneManager) -> Result<()> {
            let start = scenes.current().map(ToString::to_string).unwrap_or_default();
            for _ in 0..4 {
                scenes.handle_input(Key::Down, &mut session)?;
            }
            let quit = scenes.handle_input(Key::Enter, &mut session)?;
            self.seen
                .lock()
                .unwrap()
                .extend([start, format!("quit={quit}")]);
            Ok(())
        }
    }

    fn menu_only() -> (GameSession, SceneManager) {
        let mut session = GameSession::ephemeral();
        let mut scenes = SceneManager::new();
        scenes
            .register(Box::new(runtime::MenuScene::new()))
            .unwrap();
        scenes.switch_scene(SceneId::MENU, &mut session).unwrap();
        (session, scenes)
    }

    #[tokio::test]
    async fn run_hands_session_to_frontend() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (session, scenes) = menu_only();
        let client = Client::builder()
            .session(session)
            .scenes(scenes)
            .frontend(ScriptedFrontend { seen: seen.clone() })
            .build()
            .unwrap();

        client.run().await.unwrap();
        assert_eq!(*seen.lock().unwrap(), ["menu", "quit=true"]);
    }

    #[test]
    fn build_requires_every_layer() {
        let (session, _) = menu_only();
        let err = Client::builder().session(session).build().err().unwrap();
        assert!(err.to_string().contains("Scene manager is required"));
    }
}
