//! Query-string helpers
//!
//! Clients send flags as `true`, `1`, `yes`, `on` and friends; accept them all.

use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;

/// Parse a permissive boolean flag (case-insensitive)
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "y" | "t" => Some(true),
        "false" | "0" | "no" | "off" | "n" | "f" => Some(false),
        _ => None,
    }
}

/// `deserialize_with` adapter for [`parse_flag`]
pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| de::Error::invalid_value(Unexpected::Str(&raw), &"a boolean flag"))
}
