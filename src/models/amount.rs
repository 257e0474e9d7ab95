use crate::error::{DelegatorError, Result};
use num_bigint::BigInt;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serializer};
use std::str::FromStr;

pub const VESTS_SYMBOL: &str = "VESTS";

/// Parses a chain asset string such as `3.000 STEEM` into an exact decimal,
/// dropping the unit suffix.
pub fn parse_amount(asset: &str) -> Result<Decimal> {
    let number = asset.split_whitespace().next().unwrap_or_default();
    Decimal::from_str(number).map_err(|_| DelegatorError::MalformedAmount {
        value: asset.to_string(),
    })
}

/// Renders a vesting-share amount the way the chain expects it on the wire:
/// six fractional digits followed by the unit label.
pub fn format_vests(vests: Decimal) -> String {
    let rounded = vests.round_dp_with_strategy(6, RoundingStrategy::MidpointNearestEven);
    format!("{:.6} {}", rounded, VESTS_SYMBOL)
}

pub fn serialize_vests<S>(vests: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_vests(*vests))
}

pub fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_amount(&raw).map_err(de::Error::custom)
}

/// Nodes emit share counters either as JSON numbers or as numeric strings.
pub fn deserialize_share_count<'de, D>(deserializer: D) -> std::result::Result<BigInt, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ShareCount {
        Number(serde_json::Number),
        Text(String),
    }

    let text = match ShareCount::deserialize(deserializer)? {
        ShareCount::Number(n) => n.to_string(),
        ShareCount::Text(s) => s,
    };
    BigInt::from_str(text.trim())
        .map_err(|e| de::Error::custom(format!("invalid share count {:?}: {}", text, e)))
}
