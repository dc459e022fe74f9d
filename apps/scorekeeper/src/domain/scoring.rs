//! Round scoring under the selectable scoring rules.

use serde::{Deserialize, Serialize};

use crate::domain::state::PlayerRoundResult;

/// Predefined scoring rules plus a slot for a caller-supplied configuration.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringRuleType {
    #[default]
    Standard,
    Simple,
    Common,
    Penalty,
    Custom,
}

impl ScoringRuleType {
    pub const PREDEFINED: [ScoringRuleType; 4] = [
        ScoringRuleType::Standard,
        ScoringRuleType::Simple,
        ScoringRuleType::Common,
        ScoringRuleType::Penalty,
    ];

    /// Resolve a rule by name. Unknown names fall back to `Standard`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "simple" => ScoringRuleType::Simple,
            "common" => ScoringRuleType::Common,
            "penalty" => ScoringRuleType::Penalty,
            "custom" => ScoringRuleType::Custom,
            _ => ScoringRuleType::Standard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoringRuleType::Standard => "standard",
            ScoringRuleType::Simple => "simple",
            ScoringRuleType::Common => "common",
            ScoringRuleType::Penalty => "penalty",
            ScoringRuleType::Custom => "custom",
        }
    }
}

/// What a player scores when tricks taken differ from the bid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissedBidPolicy {
    Zero,
    TricksOnly,
    Penalty,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRuleConfig {
    pub exact_bid_bonus: u16,
    pub points_per_trick: u16,
    #[serde(rename = "pointsForMissingBid")]
    pub missed_bid_policy: MissedBidPolicy,
    /// Only read under `MissedBidPolicy::Penalty`; unset means 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_per_trick: Option<u16>,
    pub name: String,
    pub description: String,
}

/// Scoring rule attached to a game at creation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoringRule {
    #[serde(rename = "type")]
    pub rule_type: ScoringRuleType,
    pub config: ScoringRuleConfig,
}

impl ScoringRule {
    pub fn predefined(rule_type: ScoringRuleType) -> Self {
        Self {
            rule_type,
            config: rule_config(rule_type),
        }
    }

    pub fn custom(config: ScoringRuleConfig) -> Self {
        Self {
            rule_type: ScoringRuleType::Custom,
            config,
        }
    }
}

/// Configuration for a rule type. `Custom` has no fixed configuration and
/// resolves to the standard rule.
pub fn rule_config(rule_type: ScoringRuleType) -> ScoringRuleConfig {
    match rule_type {
        ScoringRuleType::Simple => ScoringRuleConfig {
            exact_bid_bonus: 10,
            points_per_trick: 0,
            missed_bid_policy: MissedBidPolicy::Zero,
            penalty_per_trick: None,
            name: "Simple".into(),
            description: "10 points + number of tricks bid for exact bid, 0 for missing bid"
                .into(),
        },
        ScoringRuleType::Common => ScoringRuleConfig {
            exact_bid_bonus: 10,
            points_per_trick: 1,
            missed_bid_policy: MissedBidPolicy::TricksOnly,
            penalty_per_trick: None,
            name: "Common".into(),
            description: "1 point per trick taken, 10 point bonus for exact bid".into(),
        },
        ScoringRuleType::Penalty => ScoringRuleConfig {
            exact_bid_bonus: 10,
            points_per_trick: 1,
            missed_bid_policy: MissedBidPolicy::Penalty,
            penalty_per_trick: Some(1),
            name: "Penalty".into(),
            description:
                "10 points + 1 per trick for exact bid, -1 per trick over/under for missing bid"
                    .into(),
        },
        ScoringRuleType::Standard | ScoringRuleType::Custom => ScoringRuleConfig {
            exact_bid_bonus: 10,
            points_per_trick: 1,
            missed_bid_policy: MissedBidPolicy::Zero,
            penalty_per_trick: None,
            name: "Standard".into(),
            description: "10 points + 1 per trick for exact bid, 0 for missing bid".into(),
        },
    }
}

/// Configuration for a rule name; unknown names resolve to `standard`.
pub fn policy_by_name(name: &str) -> ScoringRuleConfig {
    rule_config(ScoringRuleType::from_name(name))
}

/// Score one player's round.
pub fn score_round(bid: u8, tricks_taken: u8, config: &ScoringRuleConfig) -> i32 {
    let tricks = i32::from(tricks_taken);
    let per_trick = i32::from(config.points_per_trick);

    if made_bid_exactly(bid, tricks_taken) {
        return i32::from(config.exact_bid_bonus) + tricks * per_trick;
    }

    match config.missed_bid_policy {
        MissedBidPolicy::Zero => 0,
        MissedBidPolicy::TricksOnly => tricks * per_trick,
        MissedBidPolicy::Penalty => {
            let difference = (i32::from(bid) - tricks).abs();
            -difference * i32::from(config.penalty_per_trick.unwrap_or(1))
        }
    }
}

/// Sum of round scores across a player's results.
pub fn total_score<'a, I>(results: I) -> i32
where
    I: IntoIterator<Item = &'a PlayerRoundResult>,
{
    results.into_iter().map(|r| r.round_score).sum()
}

pub fn made_bid_exactly(bid: u8, tricks_taken: u8) -> bool {
    bid == tricks_taken
}
