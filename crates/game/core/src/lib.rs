//! Pure narrative engine types shared by the runtime and content loaders.
//!
//! `game-core` owns the game state bag, the player profile, declarative
//! conditions and effects, scene definitions, narrative markup and the
//! terminal screen model. It performs no I/O; persistence, logging and
//! interaction live in the `runtime` crate.
pub mod profile;
pub mod rules;
pub mod scene;
pub mod screen;
pub mod state;
pub mod text;

pub use profile::{PlayerProfile, ProfileChange, ProfileField, ProfileUpdate};
pub use rules::{Condition, Effect, EffectOutcome};
pub use scene::{
    AdventureDef, Choice, DanglingEdge, PromptDef, SceneDef, SceneGraph, SceneGraphError, SceneId,
    available_choices,
};
pub use screen::{Align, Reveal, Screen, ScreenLine};
pub use state::{GameState, QuestStatus, SaveData, StateChange, Value};
pub use text::{Span, TextColor, TextStyle};
