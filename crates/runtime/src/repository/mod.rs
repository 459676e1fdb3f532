//! Repository layer for data that outlives a session.
//!
//! Everything persisted by the game (save data, player profile, player id and
//! optionally the event log) goes through a [`Storage`] as JSON strings under
//! a handful of well-known keys.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStorage;
pub use memory::InMemoryStorage;
pub use traits::{Storage, StorageExt, StorageKeys};
