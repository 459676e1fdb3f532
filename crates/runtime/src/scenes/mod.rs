//! Interactive scenes.
//!
//! A scene draws itself into a [`Screen`] and turns key presses into a
//! [`Transition`]. Scenes never hold a reference to the manager; the manager
//! performs the transition they return.
mod adventure;
mod info;
mod menu;
mod prompt;

pub use adventure::AdventureScene;
pub use info::{InfoKind, InfoScene};
pub use menu::MenuScene;
pub use prompt::PromptScene;

use game_core::{Screen, SceneId};

use crate::error::Result;
use crate::session::GameSession;

/// Normalized key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Esc,
    Backspace,
    Char(char),
}

/// What the manager should do after a scene handled input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Stay,
    /// The scene changed and should be drawn again.
    Redraw,
    Switch(SceneId),
    Quit,
}

pub trait Scene: Send {
    fn id(&self) -> &SceneId;

    fn is_active(&self) -> bool;

    fn activate(&mut self, session: &mut GameSession) -> Result<()>;

    fn deactivate(&mut self, session: &mut GameSession) -> Result<()>;

    fn draw(&self, session: &GameSession, screen: &mut Screen);

    /// Handles a key press. Inactive scenes return [`Transition::Stay`].
    fn handle_input(&mut self, key: Key, session: &mut GameSession) -> Result<Transition>;
}
