//! Serde for the "bid not yet entered" state.
//!
//! Unset is written as `null`. Older records used `-1` for the same thing;
//! both decode to `None`.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serializer};

const LEGACY_UNSET: i64 = -1;

pub fn serialize<S>(bid: &Option<u8>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bid {
        Some(value) => serializer.serialize_u8(*value),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<i64> = Option::deserialize(deserializer)?;
    match raw {
        None | Some(LEGACY_UNSET) => Ok(None),
        Some(value) => u8::try_from(value)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("Invalid bid: {value}"))),
    }
}
