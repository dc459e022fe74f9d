//! Validation gate for persisted games.
//!
//! Everything read back from storage passes through [`decode_game`]: the
//! payload is parsed into typed records and then checked against the
//! structural invariants the lifecycle code relies on. Rounds come back
//! ordered by number. Callers receive either a well-formed [`Game`] or a
//! [`DecodeError`] naming the offending field.

pub mod bid_serde;

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use crate::domain::state::Game;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed game JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid game field `{field}`: {detail}")]
    Shape { field: &'static str, detail: String },
}

impl DecodeError {
    fn shape(field: &'static str, detail: impl Into<String>) -> Self {
        Self::Shape {
            field,
            detail: detail.into(),
        }
    }
}

/// Decode an arbitrary JSON value into a checked [`Game`].
pub fn decode_game(value: Value) -> Result<Game, DecodeError> {
    checked(serde_json::from_value(value)?)
}

/// Decode a JSON document into a checked [`Game`].
pub fn decode_game_str(json: &str) -> Result<Game, DecodeError> {
    checked(serde_json::from_str(json)?)
}

fn checked(mut game: Game) -> Result<Game, DecodeError> {
    check_shape(&game)?;
    game.rounds.sort_by_key(|round| round.number);
    Ok(game)
}

pub fn encode_game(game: &Game) -> Result<String, DecodeError> {
    Ok(serde_json::to_string(game)?)
}

fn check_shape(game: &Game) -> Result<(), DecodeError> {
    if game.id.trim().is_empty() {
        return Err(DecodeError::shape("id", "must not be empty"));
    }
    if game.players.is_empty() {
        return Err(DecodeError::shape("players", "must not be empty"));
    }
    let mut seen = HashSet::with_capacity(game.players.len());
    for player in &game.players {
        if !seen.insert(player.id.as_str()) {
            return Err(DecodeError::shape(
                "players",
                format!("duplicate player id {}", player.id),
            ));
        }
    }
    if game.max_rounds < 1 {
        return Err(DecodeError::shape("maxRounds", "must be at least 1"));
    }
    if !(1..=game.max_rounds).contains(&game.current_round) {
        return Err(DecodeError::shape(
            "currentRound",
            format!(
                "{} is outside 1..={}",
                game.current_round, game.max_rounds
            ),
        ));
    }

    let mut numbers = HashSet::with_capacity(game.rounds.len());
    for round in &game.rounds {
        if !(1..=game.max_rounds).contains(&round.number) {
            return Err(DecodeError::shape(
                "rounds.number",
                format!("{} is outside 1..={}", round.number, game.max_rounds),
            ));
        }
        if !numbers.insert(round.number) {
            return Err(DecodeError::shape(
                "rounds.number",
                format!("round {} is stored twice", round.number),
            ));
        }
        if round.cards_per_player < 1 {
            return Err(DecodeError::shape(
                "rounds.cardsPerPlayer",
                format!("round {} deals no cards", round.number),
            ));
        }
        if round.player_results.len() != game.players.len() {
            return Err(DecodeError::shape(
                "rounds.playerResults",
                format!(
                    "round {} has {} results for {} players",
                    round.number,
                    round.player_results.len(),
                    game.players.len()
                ),
            ));
        }
        if let Some(stray) = round
            .player_results
            .iter()
            .find(|result| !seen.contains(result.player_id.as_str()))
        {
            return Err(DecodeError::shape(
                "rounds.playerResults.playerId",
                format!("round {} references unknown player {}", round.number, stray.player_id),
            ));
        }
    }

    Ok(())
}
