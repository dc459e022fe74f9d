use serde::Serialize;
use tracing::{debug, info};

use super::{GameFlowService, GameSession};
use crate::domain::bidding::{is_hook, validate_bids};
use crate::domain::snapshot::Phase;
use crate::domain::tricks::validate_tricks;
use crate::domain::trump::Trump;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::GameStore;

/// Result of a bidding commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BidOutcome {
    pub phase: Phase,
    /// Bids total the cards dealt. Reported, never enforced.
    pub hook: bool,
}

fn expect_phase(session: &GameSession, expected: Phase, action: &str) -> Result<(), DomainError> {
    if session.phase == Phase::Complete {
        return Err(DomainError::validation(
            ValidationKind::GameComplete,
            "Game is already complete",
        ));
    }
    if session.phase != expected {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Cannot {action} during {:?}", session.phase),
        ));
    }
    Ok(())
}

impl<S: GameStore> GameFlowService<S> {
    /// Commit the trump (or no trump) for the current round.
    pub fn set_trump(&self, session: &mut GameSession, trump: Trump) -> Result<Phase, DomainError> {
        expect_phase(session, Phase::TrumpSelection, "choose trump")?;

        let phase = self.run_mutation(session, |game, round| {
            round.trump_suit = Some(trump);
            game.upsert_round(round.clone());
            Ok(Phase::Bidding)
        })?;

        info!(
            game_id = %session.game.id,
            round = session.round.number,
            %trump,
            "Trump chosen"
        );
        Ok(phase)
    }

    /// Commit one bid per player, in seating order.
    pub fn submit_bids(
        &self,
        session: &mut GameSession,
        bids: &[u8],
    ) -> Result<BidOutcome, DomainError> {
        expect_phase(session, Phase::Bidding, "submit bids")?;
        validate_bids(&session.round, bids)?;

        let hook = is_hook(bids, session.round.cards_per_player);
        let phase = self.run_mutation(session, |game, round| {
            for (result, &bid) in round.player_results.iter_mut().zip(bids) {
                result.bid = Some(bid);
            }
            game.upsert_round(round.clone());
            Ok(Phase::TrickEntry)
        })?;

        if hook {
            debug!(game_id = %session.game.id, round = session.round.number, "Bids are on the hook");
        }
        info!(
            game_id = %session.game.id,
            round = session.round.number,
            ?bids,
            "Bids committed"
        );
        Ok(BidOutcome { phase, hook })
    }

    /// Commit tricks taken per player, score the round and move on.
    ///
    /// Returns `TrumpSelection` for the next round or `Complete` after the
    /// final round.
    pub fn submit_tricks(
        &self,
        session: &mut GameSession,
        tricks: &[u8],
    ) -> Result<Phase, DomainError> {
        expect_phase(session, Phase::TrickEntry, "enter tricks")?;
        validate_tricks(&session.round, tricks)?;

        let finished_round = session.round.number;
        let phase = self.run_mutation(session, |game, round| {
            Self::score_round(round, tricks, &game.scoring_rule.config)?;
            game.upsert_round(round.clone());
            Ok(Self::advance(game, round))
        })?;

        info!(
            game_id = %session.game.id,
            round = finished_round,
            ?tricks,
            next = ?phase,
            "Tricks committed"
        );
        Ok(phase)
    }
}
