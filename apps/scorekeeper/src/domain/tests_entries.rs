use crate::domain::bidding::{is_hook, validate_bids};
use crate::domain::fixtures::three_player_game;
use crate::domain::input::{parse_entries, EntryKind};
use crate::domain::lifecycle::new_round;
use crate::domain::tricks::validate_tricks;
use crate::errors::domain::ValidationKind;

fn kind_of(err: crate::errors::domain::DomainError) -> ValidationKind {
    err.validation_kind().cloned().expect("validation error")
}

#[test]
fn bids_need_one_entry_per_player() {
    let round = new_round(1, &three_player_game());
    let err = validate_bids(&round, &[1, 1]).unwrap_err();
    assert_eq!(kind_of(err.clone()), ValidationKind::MissingEntries);
    assert_eq!(err.to_string(), "All players must submit bids");
}

#[test]
fn bids_are_bounded_by_cards_dealt() {
    let round = new_round(1, &three_player_game());
    assert!(validate_bids(&round, &[0, 10, 3]).is_ok());
    let err = validate_bids(&round, &[0, 11, 3]).unwrap_err();
    assert_eq!(err.to_string(), "Bids cannot exceed 10 cards");
    assert_eq!(kind_of(err), ValidationKind::InvalidBid);
}

#[test]
fn hook_is_reported_not_rejected() {
    let round = new_round(1, &three_player_game());
    assert!(validate_bids(&round, &[5, 3, 2]).is_ok());
    assert!(is_hook(&[5, 3, 2], 10));
    assert!(!is_hook(&[2, 1, 1], 10));
}

#[test]
fn tricks_must_sum_to_cards_dealt() {
    let round = new_round(1, &three_player_game());
    assert!(validate_tricks(&round, &[2, 1, 7]).is_ok());

    let err = validate_tricks(&round, &[2, 1, 6]).unwrap_err();
    assert_eq!(err.to_string(), "Total tricks must equal 10");
    assert_eq!(kind_of(err), ValidationKind::TricksTotalMismatch);

    let err = validate_tricks(&round, &[11, 0, 0]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidTricks);

    let err = validate_tricks(&round, &[10]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::MissingEntries);
}

#[test]
fn parse_entries_accepts_commas_and_spaces() {
    assert_eq!(parse_entries("2,1,1", EntryKind::Bids).unwrap(), [2, 1, 1]);
    assert_eq!(parse_entries(" 2, 1  7 ", EntryKind::Tricks).unwrap(), [2, 1, 7]);
    assert!(parse_entries("", EntryKind::Bids).unwrap().is_empty());
}

#[test]
fn parse_entries_rejects_bad_tokens() {
    let err = parse_entries("2,x,1", EntryKind::Bids).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::NotANumber);

    let err = parse_entries("2,-1,1", EntryKind::Tricks).unwrap_err();
    assert_eq!(err.to_string(), "Tricks cannot be negative");
    assert_eq!(kind_of(err), ValidationKind::InvalidTricks);

    let err = parse_entries("-3", EntryKind::Bids).unwrap_err();
    assert_eq!(err.to_string(), "Bids cannot be negative");

    let err = parse_entries("300", EntryKind::Bids).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidBid);
}
