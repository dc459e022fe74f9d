//! Key-value storage adapters behind the `GameStore` trait.

pub mod file_backend;
pub mod kv_store;
pub mod memory_backend;

use thiserror::Error;

pub use file_backend::FileBackend;
pub use kv_store::KvGameStore;
pub use memory_backend::MemoryBackend;

/// Key holding the current game as a single JSON object.
pub const CURRENT_GAME_KEY: &str = "upDownRiver_currentGame";
/// Key holding the game history as a JSON array.
pub const GAME_HISTORY_KEY: &str = "upDownRiver_gameHistory";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not lock storage: {0}")]
    Lock(String),
}

/// String key-value storage with an availability probe.
pub trait KvBackend {
    fn is_available(&self) -> bool;

    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Replace the value under `key` with `f(current)`. No other writer to
    /// the same storage runs between the read and the write.
    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<String>) -> Result<String, StorageError>,
    ) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
