use crate::domain::rules::valid_bid_range;
use crate::domain::state::Round;
use crate::errors::domain::{DomainError, ValidationKind};

/// Check one bid per player, each within `0..=cards_per_player`.
///
/// The hook is not enforced here; see [`is_hook`].
pub fn validate_bids(round: &Round, bids: &[u8]) -> Result<(), DomainError> {
    if bids.len() != round.player_results.len() {
        return Err(DomainError::validation(
            ValidationKind::MissingEntries,
            "All players must submit bids",
        ));
    }

    let range = valid_bid_range(round.cards_per_player);
    if bids.iter().any(|bid| !range.contains(bid)) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("Bids cannot exceed {} cards", round.cards_per_player),
        ));
    }

    Ok(())
}

/// True when the bids add up to the tricks available ("the hook").
pub fn is_hook(bids: &[u8], cards_per_player: u8) -> bool {
    let total: u32 = bids.iter().copied().map(u32::from).sum();
    total == u32::from(cards_per_player)
}
