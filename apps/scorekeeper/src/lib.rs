#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use adapters::{FileBackend, KvBackend, KvGameStore, MemoryBackend, StorageError};
pub use codec::{decode_game, decode_game_str, encode_game, DecodeError};
pub use config::logging::LogFormat;
pub use config::storage::{StorageConfig, StoreKind};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use repos::{GameStore, IdGenerator, UuidIdGenerator};
pub use services::game_flow::{BidOutcome, GameFlowService, GameSession};
pub use services::games::{GameSetup, GamesService, MaxCardsSetting};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
