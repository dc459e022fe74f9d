use tracing::{debug, info};

use super::{GameFlowService, GameSession};
use crate::domain::lifecycle::new_round;
use crate::domain::snapshot::derive_phase;
use crate::domain::state::Game;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::{find_game, GameStore};

/// Rebuild a session from a stored game without changing it.
///
/// A current round that has not been created yet is built in memory only; it
/// reaches the store with the first commit.
pub fn resume(game: Game) -> GameSession {
    let stored = game.round(game.current_round).cloned();
    let phase = derive_phase(&game, stored.as_ref());
    let round = stored
        .or_else(|| {
            if game.is_complete {
                game.rounds.last().cloned()
            } else {
                None
            }
        })
        .unwrap_or_else(|| new_round(game.current_round, &game));

    GameSession { game, round, phase }
}

/// Resume a stored game, restarting at round 1 when no rounds were ever
/// saved. Only the in-memory copy is adjusted.
fn resume_stored(mut game: Game) -> GameSession {
    if game.rounds.is_empty() && game.current_round != 1 {
        debug!(
            game_id = %game.id,
            current_round = game.current_round,
            "Game has no rounds; restarting at round 1"
        );
        game.current_round = 1;
    }

    let session = resume(game);
    info!(
        game_id = %session.game.id,
        round = session.game.current_round,
        phase = ?session.phase,
        "Resumed game"
    );
    session
}

impl<S: GameStore> GameFlowService<S> {
    /// Load a game by id (current slot first, then history) and resume it.
    pub fn load(&self, game_id: &str) -> Result<GameSession, DomainError> {
        let game = find_game(&self.store, game_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
        })?;
        Ok(resume_stored(game))
    }

    /// Resume the game in the current slot, if any.
    pub fn load_current(&self) -> Option<GameSession> {
        self.store.load_current_game().map(resume_stored)
    }
}
