//! Narrative scene definitions and the choice graph they form.
//!
//! Definitions are plain data (usually loaded from RON by `game-content`).
//! The runtime wraps them in interactive scenes; this module only answers
//! graph questions such as "which choices are offered right now" and "does
//! every edge point somewhere".
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;

use crate::profile::ProfileField;
use crate::rules::{Condition, Effect};
use crate::state::GameState;

/// String key identifying a scene.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SceneId(Cow<'static, str>);

impl SceneId {
    pub const MENU: Self = Self::from_static("menu");
    /// Entry point of the adventure proper.
    pub const GAME: Self = Self::from_static("game");
    pub const SETTINGS: Self = Self::from_static("settings");
    pub const ABOUT: Self = Self::from_static("about");
    /// First node of the origin-story interview.
    pub const ORIGIN_STORY: Self = Self::from_static("origin-story");

    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An outgoing edge of an adventure scene.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub next_scene: Option<SceneId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: Option<Condition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
}

impl Choice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next_scene: None,
            condition: None,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn to(mut self, scene: SceneId) -> Self {
        self.next_scene = Some(scene);
        self
    }

    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    #[must_use]
    pub fn effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// True when the choice has no guard or its guard holds.
    pub fn is_available(&self, state: &GameState) -> bool {
        self.condition
            .as_ref()
            .is_none_or(|condition| condition.evaluate(state))
    }
}

/// Choices currently offered, in declaration order.
///
/// The player picks by 1-based position in this filtered list, so the
/// numbering shifts when a guarded choice disappears.
pub fn available_choices<'a>(choices: &'a [Choice], state: &GameState) -> Vec<&'a Choice> {
    choices
        .iter()
        .filter(|choice| choice.is_available(state))
        .collect()
}

/// A narrative node with numbered choices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdventureDef {
    pub id: SceneId,
    /// Narrative in color markup (see [`crate::text`]).
    pub narrative: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub choices: Vec<Choice>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_enter: Vec<Effect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_exit: Vec<Effect>,
}

/// A free-form question whose answer is stored in the player profile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromptDef {
    pub id: SceneId,
    pub narrative: String,
    pub field: ProfileField,
    pub next_scene: SceneId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneDef {
    Adventure(AdventureDef),
    Prompt(PromptDef),
}

impl SceneDef {
    pub fn id(&self) -> &SceneId {
        match self {
            SceneDef::Adventure(def) => &def.id,
            SceneDef::Prompt(def) => &def.id,
        }
    }

    /// Every scene this definition can lead to.
    pub fn targets(&self) -> Vec<&SceneId> {
        match self {
            SceneDef::Adventure(def) => def
                .choices
                .iter()
                .filter_map(|choice| choice.next_scene.as_ref())
                .collect(),
            SceneDef::Prompt(def) => vec![&def.next_scene],
        }
    }
}

/// An edge pointing at a scene that does not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingEdge {
    pub from: SceneId,
    pub to: SceneId,
}

impl fmt::Display for DanglingEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("scene graph has {} dangling edge(s): {}", .edges.len(), format_edges(.edges))]
pub struct SceneGraphError {
    pub edges: Vec<DanglingEdge>,
}

fn format_edges(edges: &[DanglingEdge]) -> String {
    edges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Narrative scenes keyed by id. Later inserts replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    scenes: IndexMap<SceneId, SceneDef>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scene: SceneDef) -> Option<SceneDef> {
        self.scenes.insert(scene.id().clone(), scene)
    }

    pub fn extend(&mut self, scenes: impl IntoIterator<Item = SceneDef>) {
        for scene in scenes {
            self.insert(scene);
        }
    }

    pub fn get(&self, id: &SceneId) -> Option<&SceneDef> {
        self.scenes.get(id)
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

    pub fn iter(&self) -> impl Iterator<Item = &SceneDef> {
        self.scenes.values()
    }

    /// Checks that every edge resolves to a graph scene or one of `external`.
    pub fn validate<'a>(
        &self,
        external: impl IntoIterator<Item = &'a SceneId>,
    ) -> Result<(), SceneGraphError> {
        let external: BTreeSet<&SceneId> = external.into_iter().collect();
        let edges: Vec<DanglingEdge> = self
            .scenes
            .values()
            .flat_map(|scene| {
                scene
                    .targets()
                    .into_iter()
                    .map(move |target| (scene.id(), target))
            })
            .filter(|(_, target)| !self.contains(target) && !external.contains(target))
            .map(|(from, to)| DanglingEdge {
                from: from.clone(),
                to: to.clone(),
            })
            .collect();

        if edges.is_empty() {
            Ok(())
        } else {
            Err(SceneGraphError { edges })
        }
    }
}

impl IntoIterator for SceneGraph {
    type Item = SceneDef;
    type IntoIter = indexmap::map::IntoValues<SceneId, SceneDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenes.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_scene() -> AdventureDef {
        AdventureDef {
            id: SceneId::GAME,
            narrative: "[cyan]Emergency lights flicker./]".into(),
            choices: vec![
                Choice::new("Check the terminal")
                    .to(SceneId::from("computer-room"))
                    .effect(Effect::SetFlag("checked-computer".into())),
                Choice::new("Head to the medical bay")
                    .to(SceneId::from("medical-bay"))
                    .when(Condition::MissingFlag("has-medkit".into())),
                Choice::new("Investigate the cargo hold").to(SceneId::from("cargo-hold")),
            ],
            on_enter: Vec::new(),
            on_exit: Vec::new(),
        }
    }

    #[test]
    fn guarded_choice_disappears_and_numbering_shifts() {
        let scene = start_scene();
        let mut state = GameState::new();
        assert_eq!(available_choices(&scene.choices, &state).len(), 3);

        state.set_flag("has-medkit");
        let offered = available_choices(&scene.choices, &state);
        assert_eq!(offered.len(), 2);
        assert_eq!(offered[1].text, "Investigate the cargo hold");
    }

    #[test]
    fn scene_ids_compare_by_content() {
        assert_eq!(SceneId::new("menu"), SceneId::MENU);
        assert_eq!(SceneId::ORIGIN_STORY.to_string(), "origin-story");
    }

    #[test]
    fn validate_reports_dangling_edges() {
        let mut graph = SceneGraph::new();
        graph.insert(SceneDef::Adventure(start_scene()));

        let err = graph.validate([]).unwrap_err();
        assert_eq!(err.edges.len(), 3);
        assert!(err.to_string().contains("game -> medical-bay"));

        for id in ["computer-room", "medical-bay", "cargo-hold"] {
            graph.insert(SceneDef::Adventure(AdventureDef {
                id: SceneId::from(id),
                narrative: String::new(),
                choices: vec![Choice::new("Back").to(SceneId::GAME)],
                on_enter: Vec::new(),
                on_exit: Vec::new(),
            }));
        }
        assert!(graph.validate([]).is_ok());
    }

    #[test]
    fn external_scenes_satisfy_validation() {
        let mut graph = SceneGraph::new();
        graph.insert(SceneDef::Prompt(PromptDef {
            id: SceneId::from("origin-fear"),
            narrative: "What is your greatest fear?".into(),
            field: ProfileField::GreatestFear,
            next_scene: SceneId::MENU,
        }));
        assert!(graph.validate([&SceneId::MENU]).is_ok());
    }
}
