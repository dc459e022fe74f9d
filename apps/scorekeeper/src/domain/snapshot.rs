//! Phase derivation and a serializable view of a game in progress.

use serde::Serialize;

use crate::domain::bidding::is_hook;
use crate::domain::lifecycle::is_round_bids_complete;
use crate::domain::standings::{standings, Standing};
use crate::domain::state::{Game, Player, Round};
use crate::domain::trump::Trump;

/// Per-round entry phases, in commit order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    TrumpSelection,
    Bidding,
    TrickEntry,
    /// Terminal.
    Complete,
}

/// Phase implied by persisted state. Reads only; never mutates.
///
/// `round` is the record for `game.current_round`, if it has been created.
pub fn derive_phase(game: &Game, round: Option<&Round>) -> Phase {
    if game.is_complete {
        return Phase::Complete;
    }
    match round {
        None => Phase::TrumpSelection,
        Some(round) if round.trump_suit.is_none() => Phase::TrumpSelection,
        Some(round) if !is_round_bids_complete(round) => Phase::Bidding,
        Some(_) => Phase::TrickEntry,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: String,
    pub phase: Phase,
    pub round_no: u16,
    pub max_rounds: u16,
    pub cards_per_player: u8,
    pub trump: Option<Trump>,
    pub bids: Vec<Option<u8>>,
    /// Bids add up to the cards dealt; informational only.
    pub hook: bool,
    pub standings: Vec<Standing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Player>,
}

pub fn snapshot(game: &Game, round: &Round, phase: Phase) -> GameSnapshot {
    let bids: Vec<Option<u8>> = round.player_results.iter().map(|r| r.bid).collect();
    let entered: Vec<u8> = bids.iter().flatten().copied().collect();
    let hook = entered.len() == bids.len() && is_hook(&entered, round.cards_per_player);

    GameSnapshot {
        game_id: game.id.clone(),
        phase,
        round_no: round.number,
        max_rounds: game.max_rounds,
        cards_per_player: round.cards_per_player,
        trump: round.trump_suit,
        bids,
        hook,
        standings: standings(game),
        winner: game.winner.clone(),
    }
}
