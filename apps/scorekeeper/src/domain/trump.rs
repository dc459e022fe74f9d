//! Trump choice for a round.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// A round's trump. "Not chosen yet" is `Option::<Trump>::None` on the round,
/// never a variant here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Trump {
    #[serde(rename = "hearts")]
    Hearts,
    #[serde(rename = "diamonds")]
    Diamonds,
    #[serde(rename = "clubs")]
    Clubs,
    #[serde(rename = "spades")]
    Spades,
    #[serde(rename = "no-trump")]
    NoTrump,
}

impl Trump {
    pub const ALL: [Trump; 5] = [
        Trump::Hearts,
        Trump::Diamonds,
        Trump::Clubs,
        Trump::Spades,
        Trump::NoTrump,
    ];
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trump::Hearts => "Hearts",
            Trump::Diamonds => "Diamonds",
            Trump::Clubs => "Clubs",
            Trump::Spades => "Spades",
            Trump::NoTrump => "No Trump",
        };
        f.write_str(label)
    }
}

impl FromStr for Trump {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hearts" | "h" | "♥" => Ok(Trump::Hearts),
            "diamonds" | "d" | "♦" => Ok(Trump::Diamonds),
            "clubs" | "c" | "♣" => Ok(Trump::Clubs),
            "spades" | "s" | "♠" => Ok(Trump::Spades),
            "no-trump" | "notrump" | "nt" | "none" => Ok(Trump::NoTrump),
            other => Err(DomainError::validation_other(format!(
                "Unknown trump suit: {other}"
            ))),
        }
    }
}
