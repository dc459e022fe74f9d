//! Parsing of per-player entries typed as text, e.g. `"2, 1, 1"`.

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EntryKind {
    Bids,
    Tricks,
}

impl EntryKind {
    fn label(self) -> &'static str {
        match self {
            EntryKind::Bids => "Bids",
            EntryKind::Tricks => "Tricks",
        }
    }

    fn range_kind(self) -> ValidationKind {
        match self {
            EntryKind::Bids => ValidationKind::InvalidBid,
            EntryKind::Tricks => ValidationKind::InvalidTricks,
        }
    }
}

/// Split on commas and/or whitespace and parse each entry as a count.
pub fn parse_entries(input: &str, kind: EntryKind) -> Result<Vec<u8>, DomainError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| parse_entry(token, kind))
        .collect()
}

fn parse_entry(token: &str, kind: EntryKind) -> Result<u8, DomainError> {
    let value: i64 = token.parse().map_err(|_| {
        DomainError::validation(
            ValidationKind::NotANumber,
            format!("{} must be whole numbers, got '{token}'", kind.label()),
        )
    })?;

    if value < 0 {
        return Err(DomainError::validation(
            kind.range_kind(),
            format!("{} cannot be negative", kind.label()),
        ));
    }

    u8::try_from(value).map_err(|_| {
        DomainError::validation(
            kind.range_kind(),
            format!("{} value {value} is out of range", kind.label()),
        )
    })
}
