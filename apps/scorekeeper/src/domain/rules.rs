use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 7;

/// Accepted range for a custom "max cards per player" setting.
pub const CUSTOM_MAX_CARDS: RangeInclusive<u8> = 1..=20;
/// Accepted range for a custom "total rounds" setting.
pub const CUSTOM_TOTAL_ROUNDS: RangeInclusive<u16> = 3..=50;

/// Shape of the card-count sequence across a game. Fixed at creation.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundPattern {
    /// max → 1 → max
    #[default]
    #[serde(rename = "down-up")]
    DownUp,
    /// 1 → max, max → 1 (the maximum is dealt twice in a row)
    #[serde(rename = "up-down")]
    UpDown,
}

/// Round structure derived from player count and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStructure {
    pub max_cards_per_player: u8,
    pub total_rounds: u16,
    /// Cards dealt to each player, indexed by `round_no - 1`.
    pub rounds_structure: Vec<u8>,
}

impl GameStructure {
    /// Cards per player for a 1-based round number.
    pub fn cards_for_round(&self, round_no: u16) -> Option<u8> {
        if round_no == 0 {
            return None;
        }
        self.rounds_structure.get(usize::from(round_no) - 1).copied()
    }
}

pub fn player_count_valid(player_count: usize) -> bool {
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count)
}

/// Default deal size: 10 cards up to five players, 8 for six, 7 for seven.
pub fn default_max_cards(player_count: usize) -> u8 {
    match player_count {
        0..=5 => 10,
        6 => 8,
        _ => 7,
    }
}

/// Max cards that yields (about) `total_rounds` rounds under the down-up pattern.
pub fn max_cards_for_total_rounds(total_rounds: u16) -> u8 {
    let max = total_rounds.saturating_sub(1) / 2;
    u8::try_from(max).unwrap_or(u8::MAX)
}

/// Derive the round structure for a game.
///
/// `custom_max_cards` replaces the player-count default unconditionally; range
/// checks belong to game setup.
pub fn compute_structure(
    player_count: usize,
    custom_max_cards: Option<u8>,
    pattern: RoundPattern,
) -> GameStructure {
    let max = custom_max_cards.unwrap_or_else(|| default_max_cards(player_count));

    let rounds_structure: Vec<u8> = match pattern {
        RoundPattern::DownUp => (1..=max).rev().chain(2..=max).collect(),
        RoundPattern::UpDown => (1..=max).chain((1..=max).rev()).collect(),
    };

    GameStructure {
        max_cards_per_player: max,
        total_rounds: rounds_structure.len() as u16,
        rounds_structure,
    }
}

pub fn valid_bid_range(cards_per_player: u8) -> RangeInclusive<u8> {
    0..=cards_per_player
}
