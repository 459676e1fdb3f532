//! Scene registry and transitions.
use std::collections::HashMap;

use game_core::{SceneDef, SceneGraph, SceneId, Screen};
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};
use crate::scenes::{
    AdventureScene, InfoKind, InfoScene, Key, MenuScene, PromptScene, Scene, Transition,
};
use crate::session::GameSession;

/// Scenes provided by the runtime rather than by content.
const BUILTIN_SCENES: [SceneId; 3] = [SceneId::MENU, SceneId::SETTINGS, SceneId::ABOUT];

/// Owns every scene and tracks which one is active.
///
/// At most one scene is active at a time. Switching to [`SceneId::GAME`]
/// while the player profile is incomplete lands on
/// [`SceneId::ORIGIN_STORY`] instead.
#[derive(Default)]
pub struct SceneManager {
    scenes: HashMap<SceneId, Box<dyn Scene>>,
    current: Option<SceneId>,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a manager holding the built-in scenes plus every scene in
    /// `graph`. The graph must be closed over itself and the built-ins.
    pub fn with_content(graph: SceneGraph) -> Result<Self> {
        graph.validate(BUILTIN_SCENES.iter())?;
        for required in [SceneId::GAME, SceneId::ORIGIN_STORY] {
            if !graph.contains(&required) {
                return Err(RuntimeError::UnknownScene(required));
            }
        }

        let mut manager = Self::new();
        manager.register(Box::new(MenuScene::new()))?;
        manager.register(Box::new(InfoScene::new(InfoKind::Settings)))?;
        manager.register(Box::new(InfoScene::new(InfoKind::About)))?;
        for def in graph {
            let scene: Box<dyn Scene> = match def {
                SceneDef::Adventure(def) => Box::new(AdventureScene::new(def)),
                SceneDef::Prompt(def) => Box::new(PromptScene::new(def)),
            };
            manager.register(scene)?;
        }
        Ok(manager)
    }

    pub fn register(&mut self, scene: Box<dyn Scene>) -> Result<()> {
        let id = scene.id().clone();
        if self.scenes.contains_key(&id) {
            return Err(RuntimeError::DuplicateScene(id));
        }
        debug!(scene = %id, "registered scene");
        self.scenes.insert(id, scene);
        Ok(())
    }

    pub fn contains(&self, id: &SceneId) -> bool {
        self.scenes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn current(&self) -> Option<&SceneId> {
        self.current.as_ref()
    }

    /// Deactivates the current scene and activates `id`.
    ///
    /// An unknown id fails before anything is deactivated. Once the target
    /// is known the switch always happens: an error from an exit or entry
    /// effect is returned after `id` has become the active scene.
    pub fn switch_scene(&mut self, id: SceneId, session: &mut GameSession) -> Result<()> {
        let target = if id == SceneId::GAME && !session.profile_complete() {
            SceneId::ORIGIN_STORY
        } else {
            id
        };
        if !self.scenes.contains_key(&target) {
            return Err(RuntimeError::UnknownScene(target));
        }

        let exited = match self
            .current
            .take()
            .and_then(|previous| self.scenes.get_mut(&previous))
        {
            Some(scene) => scene.deactivate(session),
            None => Ok(()),
        };

        let scene = self
            .scenes
            .get_mut(&target)
            .ok_or_else(|| RuntimeError::UnknownScene(target.clone()))?;
        let entered = scene.activate(session);

        session
            .log()
            .log_system_event(format!("Switched to scene: {target}"));
        info!(scene = %target, "scene switched");
        self.current = Some(target);
        exited.and(entered)
    }

    /// Routes a key to the active scene and performs its transition.
    ///
    /// Returns `true` when the player asked to quit.
    pub fn handle_input(&mut self, key: Key, session: &mut GameSession) -> Result<bool> {
        let current = self.current.clone().ok_or(RuntimeError::NoActiveScene)?;
        let scene = self
            .scenes
            .get_mut(&current)
            .ok_or(RuntimeError::NoActiveScene)?;

        match scene.handle_input(key, session)? {
            Transition::Stay | Transition::Redraw => Ok(false),
            Transition::Switch(next) => {
                self.switch_scene(next, session)?;
                Ok(false)
            }
            Transition::Quit => Ok(true),
        }
    }

    /// Draws the active scene. Leaves `screen` cleared when none is active.
    pub fn draw(&self, session: &GameSession, screen: &mut Screen) {
        match self.current.as_ref().and_then(|id| self.scenes.get(id)) {
            Some(scene) => scene.draw(session, screen),
            None => screen.clear(),
        }
    }
}
