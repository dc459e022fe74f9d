use crate::domain::fixtures::{played_round, three_player_game};
use crate::domain::lifecycle::new_round;
use crate::domain::snapshot::{derive_phase, snapshot, Phase};
use crate::domain::trump::Trump;

#[test]
fn missing_round_means_trump_selection() {
    let game = three_player_game();
    assert_eq!(derive_phase(&game, None), Phase::TrumpSelection);
}

#[test]
fn phases_follow_entered_data() {
    let game = three_player_game();
    let mut round = new_round(1, &game);
    assert_eq!(derive_phase(&game, Some(&round)), Phase::TrumpSelection);

    round.trump_suit = Some(Trump::NoTrump);
    assert_eq!(derive_phase(&game, Some(&round)), Phase::Bidding);

    round.player_results[0].bid = Some(0);
    round.player_results[1].bid = Some(3);
    assert_eq!(derive_phase(&game, Some(&round)), Phase::Bidding);

    round.player_results[2].bid = Some(1);
    assert_eq!(derive_phase(&game, Some(&round)), Phase::TrickEntry);
}

#[test]
fn complete_games_are_terminal() {
    let mut game = three_player_game();
    let round = new_round(1, &game);
    game.is_complete = true;
    assert_eq!(derive_phase(&game, Some(&round)), Phase::Complete);
}

#[test]
fn derive_phase_does_not_touch_the_game() {
    let mut game = three_player_game();
    let round = played_round(&game, 1, &[2, 1, 1], &[0, 0, 0], &[0, 0, 0]);
    game.upsert_round(round.clone());
    let before = game.clone();
    assert_eq!(derive_phase(&game, game.round(1)), Phase::TrickEntry);
    assert_eq!(game, before);
}

#[test]
fn snapshot_reports_hook_once_all_bids_are_in() {
    let game = three_player_game();
    let mut round = new_round(1, &game);
    round.trump_suit = Some(Trump::Hearts);
    round.player_results[0].bid = Some(5);
    round.player_results[1].bid = Some(5);

    let view = snapshot(&game, &round, Phase::Bidding);
    assert!(!view.hook);
    assert_eq!(view.bids, [Some(5), Some(5), None]);

    round.player_results[2].bid = Some(0);
    let view = snapshot(&game, &round, Phase::TrickEntry);
    assert!(view.hook);
    assert_eq!(view.cards_per_player, 10);
    assert_eq!(view.trump, Some(Trump::Hearts));

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["phase"], "trickEntry");
    assert_eq!(json["roundNo"], 1);
}
