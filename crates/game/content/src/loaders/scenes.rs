//! Narrative scene loader.

use std::path::Path;

use game_core::{SceneDef, SceneGraph};

use crate::loaders::{LoadResult, read_file};

/// Embedded scene files, loaded in order.
const BUILTIN_SCENES: [(&str, &str); 2] = [
    ("origin.ron", include_str!("../../data/scenes/origin.ron")),
    ("station.ron", include_str!("../../data/scenes/station.ron")),
];

/// Loader for scene definitions stored as a RON list of `SceneDef`.
///
/// Example:
/// ```ron
/// [
///     Adventure((
///         id: "game",
///         narrative: "[cyan]Emergency lights flicker./]",
///         choices: [(text: "Look around", next_scene: Some("corridor"))],
///     )),
/// ]
/// ```
pub struct SceneLoader;

impl SceneLoader {
    /// Loads the scenes shipped with the game.
    pub fn load_builtin() -> LoadResult<SceneGraph> {
        let mut graph = SceneGraph::new();
        for (name, content) in BUILTIN_SCENES {
            graph.extend(Self::parse(name, content)?);
        }
        Ok(graph)
    }

    /// Loads a single RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<SceneDef>> {
        let content = read_file(path)?;
        Self::parse(&path.display().to_string(), &content)
    }

    /// Loads every `*.ron` file in `dir`, sorted by file name.
    ///
    /// Later files replace scenes with the same id.
    pub fn load_dir(dir: &Path) -> LoadResult<SceneGraph> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read scene dir {}: {}", dir.display(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut graph = SceneGraph::new();
        for path in paths {
            let scenes = Self::load(&path)?;
            tracing::debug!(path = %path.display(), count = scenes.len(), "Loaded scene file");
            graph.extend(scenes);
        }
        Ok(graph)
    }

    fn parse(name: &str, content: &str) -> LoadResult<Vec<SceneDef>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenes RON {}: {}", name, e))
    }
}
