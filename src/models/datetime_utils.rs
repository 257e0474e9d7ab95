use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{self, Deserialize, Deserializer, Serializer};

/// Chain timestamps carry no zone designator and are always UTC.
pub const CHAIN_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse_chain_time(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let naive = NaiveDateTime::parse_from_str(value, CHAIN_TIME_FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive))
}

pub fn serialize_datetime<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.format(CHAIN_TIME_FORMAT).to_string())
}

pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_chain_time(&raw).map_err(serde::de::Error::custom)
}
