//! Game and round lifecycle: creation, completion checks, round advance and
//! winner selection. Pure functions over the records in `state`.

use time::OffsetDateTime;

use crate::domain::rules::{compute_structure, RoundPattern};
use crate::domain::scoring::{total_score, ScoringRule};
use crate::domain::state::{Game, Player, PlayerRoundResult, Round};

/// Create a game at round 1 with no rounds played.
///
/// Players are expected to be named and within the supported count; setup
/// validation happens before this point.
pub fn new_game(
    id: impl Into<String>,
    players: Vec<Player>,
    scoring_rule: ScoringRule,
    custom_max_cards: Option<u8>,
    round_pattern: RoundPattern,
    now: OffsetDateTime,
) -> Game {
    let structure = compute_structure(players.len(), custom_max_cards, round_pattern);

    Game {
        id: id.into(),
        created_at: now,
        updated_at: now,
        players,
        rounds: Vec::new(),
        scoring_rule,
        is_complete: false,
        max_rounds: structure.total_rounds,
        current_round: 1,
        winner: None,
        custom_max_cards,
        round_pattern,
    }
}

/// Build an empty round for `round_no`, recomputing the structure from the
/// game's own fields.
pub fn new_round(round_no: u16, game: &Game) -> Round {
    let structure = game.structure();

    let safe_round_no = round_no.clamp(1, structure.total_rounds.max(1));
    let cards_per_player = structure.cards_for_round(safe_round_no).unwrap_or(1);

    Round {
        number: round_no,
        cards_per_player,
        trump_suit: None,
        player_results: game
            .players
            .iter()
            .map(|player| PlayerRoundResult::empty(player.id.clone()))
            .collect(),
    }
}

pub fn is_round_bids_complete(round: &Round) -> bool {
    round.player_results.iter().all(|result| result.bid.is_some())
}

/// A round is complete once every bid is in. Tricks are unsigned, so the
/// "all tricks recorded" half of the check always holds.
pub fn is_round_complete(round: &Round) -> bool {
    is_round_bids_complete(round)
}

/// `None` once the final round has been played.
pub fn next_round_number(current_round: u16, max_rounds: u16) -> Option<u16> {
    (current_round < max_rounds).then_some(current_round + 1)
}

pub fn is_game_complete(game: &Game) -> bool {
    game.current_round == game.max_rounds
        && game.rounds.len() == usize::from(game.max_rounds)
        && game.rounds.last().is_some_and(is_round_complete)
}

/// Total score per player, in seating order.
pub fn player_totals(game: &Game) -> Vec<(&Player, i32)> {
    game.players
        .iter()
        .map(|player| {
            let total = total_score(game.results_for(&player.id));
            (player, total)
        })
        .collect()
}

/// Top scorer of a finished game.
///
/// Ties go to the earliest-seated leader. `None` while the game is
/// unfinished.
pub fn winner(game: &Game) -> Option<Player> {
    if !is_game_complete(game) {
        return None;
    }

    let mut totals = player_totals(game);
    // Stable sort keeps seating order among equal totals.
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals.first().map(|(player, _)| (*player).clone())
}
