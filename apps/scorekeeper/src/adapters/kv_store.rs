//! `GameStore` over any [`KvBackend`].
//!
//! Reads pass through the codec gate; entries that fail it are skipped with
//! a warning. History upserts and deletes edit the raw stored array inside a
//! single backend update, so entries this build cannot decode are preserved
//! and concurrent writers do not drop each other's games.
//! Storage failures are logged and swallowed.

use serde_json::Value;
use tracing::{debug, error, warn};

use super::{KvBackend, StorageError, CURRENT_GAME_KEY, GAME_HISTORY_KEY};
use crate::codec::decode_game;
use crate::domain::state::Game;
use crate::repos::games::GameStore;

#[derive(Debug)]
pub struct KvGameStore<B> {
    backend: B,
}

impl<B: KvBackend> KvGameStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read_json(&self, key: &str) -> Result<Option<Value>, StorageError> {
        match self.backend.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write_json(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    fn raw_history(&self) -> Result<Vec<Value>, StorageError> {
        history_entries(self.backend.get(GAME_HISTORY_KEY)?.as_deref())
    }

    /// Apply `edit` to the raw history array as one backend update.
    fn update_history(&self, edit: impl Fn(&mut Vec<Value>)) -> Result<(), StorageError> {
        self.backend.update(GAME_HISTORY_KEY, &mut |raw: Option<String>| {
            let mut entries = history_entries(raw.as_deref())?;
            edit(&mut entries);
            Ok(serde_json::to_string(&entries)?)
        })
    }

    fn try_save_to_history(&self, game: &Game) -> Result<(), StorageError> {
        let encoded = serde_json::to_value(game)?;
        self.update_history(|entries| {
            match entries.iter().position(|entry| entry_id(entry) == Some(game.id.as_str())) {
                Some(index) => entries[index] = encoded.clone(),
                None => entries.push(encoded.clone()),
            }
        })
    }

    fn try_delete(&self, game_id: &str) -> Result<(), StorageError> {
        self.update_history(|entries| entries.retain(|entry| entry_id(entry) != Some(game_id)))
    }

    fn try_clear(&self) -> Result<(), StorageError> {
        self.backend.remove(CURRENT_GAME_KEY)?;
        self.backend.remove(GAME_HISTORY_KEY)
    }
}

/// Anything that is not an array counts as empty.
fn history_entries(raw: Option<&str>) -> Result<Vec<Value>, StorageError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(raw)? {
        Value::Array(entries) => Ok(entries),
        _ => {
            warn!(key = GAME_HISTORY_KEY, "stored history is not an array; ignoring it");
            Ok(Vec::new())
        }
    }
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

impl<B: KvBackend> GameStore for KvGameStore<B> {
    fn load_current_game(&self) -> Option<Game> {
        if !self.backend.is_available() {
            return None;
        }
        let value = match self.read_json(CURRENT_GAME_KEY) {
            Ok(value) => value?,
            Err(e) => {
                error!(error = %e, "failed to load current game");
                return None;
            }
        };
        match decode_game(value) {
            Ok(game) => Some(game),
            Err(e) => {
                warn!(error = %e, "stored current game is invalid; ignoring it");
                None
            }
        }
    }

    fn save_current_game(&self, game: &Game) {
        if !self.backend.is_available() {
            return;
        }
        let result = serde_json::to_value(game)
            .map_err(StorageError::from)
            .and_then(|value| self.write_json(CURRENT_GAME_KEY, &value));
        match result {
            Ok(()) => debug!(game_id = %game.id, "saved current game"),
            Err(e) => error!(game_id = %game.id, error = %e, "failed to save current game"),
        }
    }

    fn load_game_history(&self) -> Vec<Game> {
        if !self.backend.is_available() {
            return Vec::new();
        }
        let entries = match self.raw_history() {
            Ok(entries) => entries,
            Err(e) => {
                error!(error = %e, "failed to load game history");
                return Vec::new();
            }
        };
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match decode_game(entry) {
                Ok(game) => Some(game),
                Err(e) => {
                    warn!(index, error = %e, "skipping invalid history entry");
                    None
                }
            })
            .collect()
    }

    fn save_game_to_history(&self, game: &Game) {
        if !self.backend.is_available() {
            return;
        }
        match self.try_save_to_history(game) {
            Ok(()) => debug!(game_id = %game.id, "saved game to history"),
            Err(e) => error!(game_id = %game.id, error = %e, "failed to save game to history"),
        }
    }

    fn delete_game(&self, game_id: &str) {
        if !self.backend.is_available() {
            return;
        }
        if let Err(e) = self.try_delete(game_id) {
            error!(game_id, error = %e, "failed to delete game");
        }
    }

    fn clear_all(&self) {
        if !self.backend.is_available() {
            return;
        }
        if let Err(e) = self.try_clear() {
            error!(error = %e, "failed to clear stored games");
        }
    }
}
