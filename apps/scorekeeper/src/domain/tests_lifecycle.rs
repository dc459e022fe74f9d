use crate::domain::fixtures::{finished_game, game_with, played_round, three_player_game, NOW};
use crate::domain::lifecycle::{
    is_game_complete, is_round_bids_complete, is_round_complete, new_game, new_round,
    next_round_number, player_totals, winner,
};
use crate::domain::rules::RoundPattern;
use crate::domain::scoring::{ScoringRule, ScoringRuleType};
use crate::domain::standings::{leaders, player_round_result, standings};

#[test]
fn new_game_starts_at_round_one_with_no_rounds() {
    let game = three_player_game();
    assert_eq!(game.current_round, 1);
    assert_eq!(game.max_rounds, 19);
    assert!(game.rounds.is_empty());
    assert!(!game.is_complete);
    assert_eq!(game.winner, None);
    assert_eq!(game.created_at, NOW);
    assert_eq!(game.updated_at, NOW);
    assert_eq!(game.scoring_rule.rule_type, ScoringRuleType::Standard);
}

#[test]
fn new_game_honours_custom_max_and_pattern() {
    let game = new_game(
        "g",
        game_with(&["A", "B", "C", "D", "E", "F"], ScoringRuleType::Penalty, None).players,
        ScoringRule::predefined(ScoringRuleType::Penalty),
        Some(4),
        RoundPattern::UpDown,
        NOW,
    );
    assert_eq!(game.max_rounds, 8);
    assert_eq!(game.custom_max_cards, Some(4));
    assert_eq!(game.round_pattern, RoundPattern::UpDown);
}

#[test]
fn new_round_has_one_empty_result_per_player() {
    let game = three_player_game();
    let round = new_round(1, &game);
    assert_eq!(round.number, 1);
    assert_eq!(round.cards_per_player, 10);
    assert_eq!(round.trump_suit, None);
    assert_eq!(round.player_results.len(), 3);
    for (result, player) in round.player_results.iter().zip(&game.players) {
        assert_eq!(result.player_id, player.id);
        assert_eq!(result.bid, None);
        assert_eq!(result.tricks_taken, 0);
        assert_eq!(result.round_score, 0);
    }
}

#[test]
fn new_round_follows_the_schedule_and_clamps() {
    let game = three_player_game();
    assert_eq!(new_round(10, &game).cards_per_player, 1);
    assert_eq!(new_round(11, &game).cards_per_player, 2);
    assert_eq!(new_round(19, &game).cards_per_player, 10);

    // Out of range numbers are clamped for the card lookup only.
    let past_end = new_round(40, &game);
    assert_eq!(past_end.number, 40);
    assert_eq!(past_end.cards_per_player, 10);
    assert_eq!(new_round(0, &game).cards_per_player, 10);
}

#[test]
fn new_round_recomputes_from_game_fields() {
    let mut game = three_player_game();
    // A stale max_rounds must not change the deal.
    game.max_rounds = 3;
    assert_eq!(new_round(2, &game).cards_per_player, 9);

    game.custom_max_cards = Some(2);
    assert_eq!(new_round(2, &game).cards_per_player, 1);
    assert_eq!(new_round(2, &game), new_round(2, &game));
}

#[test]
fn round_completion_is_gated_on_bids() {
    let game = three_player_game();
    let mut round = new_round(1, &game);
    assert!(!is_round_bids_complete(&round));
    assert!(!is_round_complete(&round));

    round.player_results[0].bid = Some(2);
    round.player_results[1].bid = Some(1);
    assert!(!is_round_complete(&round));

    round.player_results[2].bid = Some(1);
    assert!(is_round_bids_complete(&round));

    let played = played_round(&game, 1, &[2, 1, 1], &[2, 1, 7], &[12, 11, 0]);
    assert!(is_round_complete(&played));
}

#[test]
fn next_round_number_stops_at_max() {
    assert_eq!(next_round_number(1, 19), Some(2));
    assert_eq!(next_round_number(18, 19), Some(19));
    assert_eq!(next_round_number(19, 19), None);
    assert_eq!(next_round_number(1, 1), None);
}

#[test]
fn game_incomplete_while_rounds_are_missing() {
    let mut game = finished_game(&["A", "B", "C"], 2, &[1, 2, 3]);
    assert!(is_game_complete(&game));

    game.rounds.remove(0);
    assert_eq!(game.current_round, game.max_rounds);
    assert!(!is_game_complete(&game));
}

#[test]
fn game_incomplete_until_last_round_bids_are_in() {
    let mut game = finished_game(&["A", "B", "C"], 2, &[1, 2, 3]);
    let last = game.rounds.len() - 1;
    game.rounds[last].player_results[1].bid = None;
    assert!(!is_game_complete(&game));
    assert_eq!(winner(&game), None);
}

#[test]
fn winner_is_highest_total() {
    // max 1 card => a single round, so the per-round scores are the totals
    let game = finished_game(&["Alice", "Bob", "Charlie"], 1, &[16, 25, 18]);
    assert_eq!(winner(&game).map(|p| p.name), Some("Bob".to_string()));

    let order: Vec<_> = standings(&game).into_iter().map(|s| s.player.name).collect();
    assert_eq!(order, ["Bob", "Charlie", "Alice"]);
}

#[test]
fn tied_leaders_resolve_to_earliest_seat() {
    let game = finished_game(&["Alice", "Bob", "Charlie"], 1, &[10, 25, 25]);
    assert_eq!(winner(&game).map(|p| p.name), Some("Bob".to_string()));

    let names: Vec<_> = leaders(&game).into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Bob", "Charlie"]);
}

#[test]
fn top_scorer_without_a_positive_score_is_not_a_leader() {
    let game = finished_game(&["A", "B", "C"], 1, &[0, -2, -1]);
    assert!(is_game_complete(&game));
    assert_eq!(winner(&game).map(|p| p.name), Some("A".to_string()));
    assert!(leaders(&game).is_empty());
    assert!(standings(&game).iter().all(|s| !s.is_leader));
}

#[test]
fn winner_undefined_for_unfinished_games() {
    let mut game = three_player_game();
    game.upsert_round(played_round(&game, 1, &[2, 1, 1], &[2, 1, 7], &[12, 11, 0]));
    assert_eq!(winner(&game), None);
}

#[test]
fn totals_accumulate_across_rounds() {
    let game = finished_game(&["A", "B", "C"], 2, &[3, 0, -1]);
    let totals: Vec<i32> = player_totals(&game).into_iter().map(|(_, t)| t).collect();
    assert_eq!(totals, [9, 0, -3]);

    let result = player_round_result(&game, "p1", 2).unwrap();
    assert_eq!(result.round_score, 3);
    assert!(player_round_result(&game, "p9", 2).is_none());
    assert!(player_round_result(&game, "p1", 99).is_none());
}

#[test]
fn upsert_round_keeps_rounds_ordered() {
    let mut game = three_player_game();
    game.upsert_round(new_round(3, &game));
    game.upsert_round(new_round(1, &game));
    game.upsert_round(new_round(2, &game));
    let mut replacement = new_round(2, &game);
    replacement.trump_suit = Some(crate::domain::trump::Trump::Clubs);
    game.upsert_round(replacement);

    let numbers: Vec<u16> = game.rounds.iter().map(|r| r.number).collect();
    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(
        game.round(2).and_then(|r| r.trump_suit),
        Some(crate::domain::trump::Trump::Clubs)
    );
}
