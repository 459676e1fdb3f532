//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use client_bootstrap::SessionSetup;
use runtime::{GameSession, SceneManager};

/// Builder for constructing a Client with proper validation.
///
/// Session, scene manager and frontend are all required; `build()` fails
/// fast when one is missing.
#[derive(Default)]
pub struct ClientBuilder {
    session: Option<GameSession>,
    scenes: Option<SceneManager>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game session (required).
    pub fn session(mut self, session: GameSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the scene manager (required).
    ///
    /// It should already have an active scene, as produced by
    /// `SessionBuilder` from the `client-bootstrap` crate.
    pub fn scenes(mut self, scenes: SceneManager) -> Self {
        self.scenes = Some(scenes);
        self
    }

    /// Take session and scenes from a bootstrap result.
    pub fn setup(self, setup: SessionSetup) -> Self {
        self.session(setup.session).scenes(setup.manager)
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the session, the scene manager or the frontend
    /// is not set.
    pub fn build(self) -> Result<Client> {
        let session = self
            .session
            .context("Session is required. Use .session() to set it.")?;

        let scenes = self
            .scenes
            .context("Scene manager is required. Use .scenes() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            session,
            scenes,
            frontend,
        })
    }
}
