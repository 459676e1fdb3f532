//! Unified error type surfaced by the runtime API.
use game_core::{SceneGraphError, SceneId};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown scene: {0}")]
    UnknownScene(SceneId),

    #[error("scene {0} registered twice")]
    DuplicateScene(SceneId),

    #[error("no scene is active")]
    NoActiveScene,

    #[error(transparent)]
    InvalidSceneGraph(#[from] SceneGraphError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Unsupported export format: {0}")]
    UnsupportedExportFormat(String),
}
