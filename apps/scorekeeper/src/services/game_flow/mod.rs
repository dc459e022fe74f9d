//! Game session controller.
//!
//! Drives one game through `TrumpSelection -> Bidding -> TrickEntry` per
//! round until `Complete`. Every commit is validated first, then persisted to
//! both store slots, and only then applied to the in-memory session.

mod mutation;
mod orchestration;
mod player_actions;
mod round_lifecycle;

use crate::domain::snapshot::{snapshot, GameSnapshot, Phase};
use crate::domain::state::{Game, Round};

pub use orchestration::resume;
pub use player_actions::BidOutcome;

/// Game flow service, generic over the persistence store.
pub struct GameFlowService<S> {
    store: S,
}

impl<S> GameFlowService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-memory state of a game being played.
///
/// `round` is the record for `game.current_round`; once the game is complete
/// it is the final round.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub game: Game,
    pub round: Round,
    pub phase: Phase,
}

impl GameSession {
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.game, &self.round, self.phase)
    }
}
