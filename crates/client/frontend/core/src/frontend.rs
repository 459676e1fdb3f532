//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::{GameSession, SceneManager};

/// Frontend abstraction for UI layers.
///
/// A frontend owns the session for the duration of the run: it feeds key
/// presses to the [`SceneManager`], draws the active scene and mirrors the
/// session in its side panel.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the player quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, session: GameSession, scenes: SceneManager) -> Result<()>;
}
