//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod input;
pub mod lifecycle;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod standings;
pub mod state;
pub mod tricks;
pub mod trump;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_entries;
#[cfg(test)]
mod tests_lifecycle;
#[cfg(test)]
mod tests_props_structure;
#[cfg(test)]
mod tests_snapshot_phases;

// Re-exports for ergonomics
pub use lifecycle::{
    is_game_complete, is_round_bids_complete, is_round_complete, new_game, new_round,
    next_round_number, winner,
};
pub use rules::{compute_structure, GameStructure, RoundPattern};
pub use scoring::{
    made_bid_exactly, policy_by_name, rule_config, score_round, total_score, MissedBidPolicy,
    ScoringRule, ScoringRuleConfig, ScoringRuleType,
};
pub use snapshot::{derive_phase, Phase};
pub use state::{Game, Player, PlayerId, PlayerRoundResult, Round};
pub use trump::Trump;
