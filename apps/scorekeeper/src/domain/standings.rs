//! Scoreboard ordering for display.

use serde::Serialize;

use crate::domain::lifecycle::player_totals;
use crate::domain::state::{Game, Player, PlayerRoundResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub player: Player,
    pub total_score: i32,
    /// Tied for first with a positive score.
    pub is_leader: bool,
}

/// Players ordered by total score, highest first; ties keep seating order.
pub fn standings(game: &Game) -> Vec<Standing> {
    let mut totals = player_totals(game);
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    let highest = totals.first().map(|(_, total)| *total).unwrap_or(0);

    totals
        .into_iter()
        .map(|(player, total_score)| Standing {
            player: player.clone(),
            total_score,
            is_leader: highest > 0 && total_score == highest,
        })
        .collect()
}

/// Every player tied for the lead. Empty while nobody has scored.
pub fn leaders(game: &Game) -> Vec<Player> {
    standings(game)
        .into_iter()
        .filter(|standing| standing.is_leader)
        .map(|standing| standing.player)
        .collect()
}

pub fn player_round_result<'a>(
    game: &'a Game,
    player_id: &str,
    round_no: u16,
) -> Option<&'a PlayerRoundResult> {
    game.round(round_no)?.result_for(player_id)
}
