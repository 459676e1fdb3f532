//! Content loaders for reading game data from files.
//!
//! Built-in content is embedded at compile time; every loader also accepts
//! files on disk so content can be extended without rebuilding.

pub mod config;
pub mod scenes;

pub use config::ConfigLoader;
pub use scenes::SceneLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
