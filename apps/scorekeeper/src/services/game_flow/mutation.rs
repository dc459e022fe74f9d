use time::OffsetDateTime;
use tracing::debug;

use super::{GameFlowService, GameSession};
use crate::domain::snapshot::Phase;
use crate::domain::state::{Game, Round};
use crate::errors::domain::DomainError;
use crate::repos::games::{save_everywhere, GameStore};

impl<S: GameStore> GameFlowService<S> {
    /// Run `mutation` against copies of the session's game and round.
    ///
    /// On success the updated game is stamped, written to the current slot
    /// and history, and then swapped into `session`. On error nothing is
    /// written and `session` is left as it was.
    pub(super) fn run_mutation<F>(
        &self,
        session: &mut GameSession,
        mutation: F,
    ) -> Result<Phase, DomainError>
    where
        F: FnOnce(&mut Game, &mut Round) -> Result<Phase, DomainError>,
    {
        let mut game = session.game.clone();
        let mut round = session.round.clone();

        let phase = mutation(&mut game, &mut round)?;

        game.updated_at = OffsetDateTime::now_utc();
        save_everywhere(&self.store, &game);
        debug!(game_id = %game.id, round = round.number, ?phase, "Committed game mutation");

        session.game = game;
        session.round = round;
        session.phase = phase;
        Ok(phase)
    }
}
