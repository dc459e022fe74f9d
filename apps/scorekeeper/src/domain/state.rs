//! Game, round and player records. Field names follow the persisted JSON.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::rules::{compute_structure, GameStructure, RoundPattern};
use crate::domain::scoring::ScoringRule;
use crate::domain::trump::Trump;

pub type PlayerId = String;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// One player's entry in one round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundResult {
    pub player_id: PlayerId,
    /// `None` until the bidding phase commits.
    #[serde(default, with = "crate::codec::bid_serde")]
    pub bid: Option<u8>,
    pub tricks_taken: u8,
    /// May be negative under the penalty rule.
    pub round_score: i32,
}

impl PlayerRoundResult {
    pub fn empty(player_id: impl Into<PlayerId>) -> Self {
        Self {
            player_id: player_id.into(),
            bid: None,
            tricks_taken: 0,
            round_score: 0,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based.
    pub number: u16,
    pub cards_per_player: u8,
    /// `None` until trump selection commits.
    #[serde(default)]
    pub trump_suit: Option<Trump>,
    /// Same order as `Game::players`.
    pub player_results: Vec<PlayerRoundResult>,
}

impl Round {
    pub fn result_for(&self, player_id: &str) -> Option<&PlayerRoundResult> {
        self.player_results
            .iter()
            .find(|result| result.player_id == player_id)
    }
}

/// Entire game record as persisted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub players: Vec<Player>,
    /// Rounds created so far, ordered by number.
    pub rounds: Vec<Round>,
    pub scoring_rule: ScoringRule,
    pub is_complete: bool,
    pub max_rounds: u16,
    /// 1-based pointer into the round structure.
    pub current_round: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_max_cards: Option<u8>,
    #[serde(default)]
    pub round_pattern: RoundPattern,
}

impl Game {
    /// Round structure recomputed from the game's own fields.
    pub fn structure(&self) -> GameStructure {
        compute_structure(self.players.len(), self.custom_max_cards, self.round_pattern)
    }

    pub fn round(&self, number: u16) -> Option<&Round> {
        self.rounds.iter().find(|round| round.number == number)
    }

    /// Insert or replace a round, keeping `rounds` ordered by number.
    pub fn upsert_round(&mut self, round: Round) {
        match self
            .rounds
            .binary_search_by_key(&round.number, |existing| existing.number)
        {
            Ok(idx) => self.rounds[idx] = round,
            Err(idx) => self.rounds.insert(idx, round),
        }
    }

    /// All results recorded for a player, in round order.
    pub fn results_for<'a>(
        &'a self,
        player_id: &'a str,
    ) -> impl Iterator<Item = &'a PlayerRoundResult> + 'a {
        self.rounds
            .iter()
            .filter_map(move |round| round.result_for(player_id))
    }
}
