//! Serde helpers for the Zabbix wire format.
//!
//! The server returns every integer as a JSON string (`"status": "0"`) but
//! accepts plain numbers on write.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
}

/// Deserializes a `u8` sent as either `1` or `"1"`.
pub(crate) fn deserialize_code<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => u8::try_from(n)
            .map_err(|_| serde::de::Error::custom(format!("code {} out of range", n))),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<u8>()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric code \"{}\"", s))),
    }
}

/// `bool` carried as `0`/`1`.
pub mod zabbix_flag {
    use super::*;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match deserialize_code(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(serde::de::Error::custom(format!(
                "expected 0 or 1, got {}",
                other
            ))),
        }
    }
}
