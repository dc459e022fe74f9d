use crate::domain::state::Round;
use crate::errors::domain::{DomainError, ValidationKind};

/// Check one tricks-taken count per player, summing to the cards dealt.
pub fn validate_tricks(round: &Round, tricks: &[u8]) -> Result<(), DomainError> {
    if tricks.len() != round.player_results.len() {
        return Err(DomainError::validation(
            ValidationKind::MissingEntries,
            "All players must enter tricks taken",
        ));
    }

    let cards = round.cards_per_player;
    if tricks.iter().any(|&taken| taken > cards) {
        return Err(DomainError::validation(
            ValidationKind::InvalidTricks,
            format!("Tricks cannot exceed {cards} cards"),
        ));
    }

    let total: u32 = tricks.iter().copied().map(u32::from).sum();
    if total != u32::from(cards) {
        return Err(DomainError::validation(
            ValidationKind::TricksTotalMismatch,
            format!("Total tricks must equal {cards}"),
        ));
    }

    Ok(())
}
