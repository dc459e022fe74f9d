//! Game store trait used by services.
//!
//! Two logical slots are kept: the current game (at most one) and the game
//! history (every game ever saved, keyed by id). Implementations never fail
//! the caller: an unavailable or broken backend turns writes into no-ops and
//! reads into "nothing stored", with the failure logged.

use std::sync::Arc;

use crate::domain::state::Game;

pub trait GameStore {
    /// The game in the current slot, if a valid one is stored.
    fn load_current_game(&self) -> Option<Game>;

    /// Replace the current slot.
    fn save_current_game(&self, game: &Game);

    /// Every valid game in history, in stored order.
    fn load_game_history(&self) -> Vec<Game>;

    /// Insert or replace the history entry with the same id.
    fn save_game_to_history(&self, game: &Game);

    /// Remove the history entry with this id. The current slot is untouched.
    fn delete_game(&self, game_id: &str);

    /// Remove both slots.
    fn clear_all(&self);
}

impl<T: GameStore + ?Sized> GameStore for &T {
    fn load_current_game(&self) -> Option<Game> {
        (**self).load_current_game()
    }

    fn save_current_game(&self, game: &Game) {
        (**self).save_current_game(game)
    }

    fn load_game_history(&self) -> Vec<Game> {
        (**self).load_game_history()
    }

    fn save_game_to_history(&self, game: &Game) {
        (**self).save_game_to_history(game)
    }

    fn delete_game(&self, game_id: &str) {
        (**self).delete_game(game_id)
    }

    fn clear_all(&self) {
        (**self).clear_all()
    }
}

impl<T: GameStore + ?Sized> GameStore for Arc<T> {
    fn load_current_game(&self) -> Option<Game> {
        (**self).load_current_game()
    }

    fn save_current_game(&self, game: &Game) {
        (**self).save_current_game(game)
    }

    fn load_game_history(&self) -> Vec<Game> {
        (**self).load_game_history()
    }

    fn save_game_to_history(&self, game: &Game) {
        (**self).save_game_to_history(game)
    }

    fn delete_game(&self, game_id: &str) {
        (**self).delete_game(game_id)
    }

    fn clear_all(&self) {
        (**self).clear_all()
    }
}

/// Find a game by id: the current slot first, then history.
pub fn find_game<S: GameStore + ?Sized>(store: &S, game_id: &str) -> Option<Game> {
    if let Some(game) = store.load_current_game().filter(|game| game.id == game_id) {
        return Some(game);
    }
    store
        .load_game_history()
        .into_iter()
        .find(|game| game.id == game_id)
}

/// Persist a game to both slots.
pub fn save_everywhere<S: GameStore + ?Sized>(store: &S, game: &Game) {
    store.save_current_game(game);
    store.save_game_to_history(game);
}
