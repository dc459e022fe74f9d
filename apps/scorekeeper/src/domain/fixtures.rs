//! Test-only builders for games in known states.

use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::lifecycle::{new_game, new_round};
use crate::domain::rules::RoundPattern;
use crate::domain::scoring::{ScoringRule, ScoringRuleType};
use crate::domain::state::{Game, Player, Round};
use crate::domain::trump::Trump;

pub const NOW: OffsetDateTime = datetime!(2024-03-01 18:30 UTC);

pub fn players(names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Player {
            id: format!("p{}", i + 1),
            name: (*name).to_string(),
        })
        .collect()
}

pub fn game_with(names: &[&str], rule: ScoringRuleType, custom_max_cards: Option<u8>) -> Game {
    new_game(
        "game-1",
        players(names),
        ScoringRule::predefined(rule),
        custom_max_cards,
        RoundPattern::DownUp,
        NOW,
    )
}

pub fn three_player_game() -> Game {
    game_with(&["Alice", "Bob", "Charlie"], ScoringRuleType::Standard, None)
}

/// A round with trump, bids, tricks and scores filled in.
pub fn played_round(game: &Game, round_no: u16, bids: &[u8], tricks: &[u8], scores: &[i32]) -> Round {
    let mut round = new_round(round_no, game);
    round.trump_suit = Some(Trump::Spades);
    for (i, result) in round.player_results.iter_mut().enumerate() {
        result.bid = Some(bids[i]);
        result.tricks_taken = tricks[i];
        result.round_score = scores[i];
    }
    round
}

/// Play every round with the given per-round scores, leaving the game on its
/// last round with all results entered.
pub fn finished_game(names: &[&str], max_cards: u8, per_round_scores: &[i32]) -> Game {
    let mut game = game_with(names, ScoringRuleType::Standard, Some(max_cards));
    for round_no in 1..=game.max_rounds {
        let n = game.players.len();
        let round = played_round(&game, round_no, &vec![0; n], &vec![0; n], per_round_scores);
        game.upsert_round(round);
        game.current_round = round_no;
    }
    game
}
