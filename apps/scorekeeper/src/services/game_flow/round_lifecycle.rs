use tracing::info;

use super::GameFlowService;
use crate::domain::lifecycle::{new_round, next_round_number, winner};
use crate::domain::scoring::{score_round, total_score, ScoringRuleConfig};
use crate::domain::snapshot::Phase;
use crate::domain::state::{Game, Round};
use crate::errors::domain::{DomainError, ValidationKind};

impl<S> GameFlowService<S> {
    /// Record tricks and per-player scores on `round`.
    pub(super) fn score_round(
        round: &mut Round,
        tricks: &[u8],
        config: &ScoringRuleConfig,
    ) -> Result<(), DomainError> {
        for (result, &taken) in round.player_results.iter_mut().zip(tricks) {
            let bid = result.bid.ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    "All bids must be entered before tricks",
                )
            })?;
            result.tricks_taken = taken;
            result.round_score = score_round(bid, taken, config);
        }
        Ok(())
    }

    /// Move `game` past its current round.
    ///
    /// Fetches or creates the next round and points `round` at it, or marks
    /// the game complete when no rounds remain. A winner is only recorded
    /// when the top total is positive.
    pub(super) fn advance(game: &mut Game, round: &mut Round) -> Phase {
        match next_round_number(game.current_round, game.max_rounds) {
            Some(next) => {
                let next_round = game
                    .round(next)
                    .cloned()
                    .unwrap_or_else(|| new_round(next, game));
                game.current_round = next;
                game.upsert_round(next_round.clone());
                *round = next_round;
                Phase::TrumpSelection
            }
            None => {
                let leader = winner(game)
                    .filter(|leader| total_score(game.results_for(&leader.id)) > 0);
                game.is_complete = true;
                game.winner = leader;
                info!(
                    game_id = %game.id,
                    winner = game.winner.as_ref().map(|p| p.name.as_str()),
                    "Game complete"
                );
                Phase::Complete
            }
        }
    }
}
