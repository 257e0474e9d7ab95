use crate::models::amount::{deserialize_amount, deserialize_share_count};
use crate::models::datetime_utils::deserialize_datetime;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityTimestamps {
    #[serde(deserialize_with = "deserialize_datetime")]
    pub created: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub last_bandwidth_update: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub last_post: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub last_vote_time: DateTime<Utc>,
}

impl ActivityTimestamps {
    pub fn last_action(&self) -> DateTime<Utc> {
        [
            self.last_bandwidth_update,
            self.created,
            self.last_post,
            self.last_vote_time,
        ]
        .into_iter()
        .max()
        .unwrap_or(self.created)
    }

    /// Whole days elapsed since the most recent activity marker.
    pub fn inactive_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_action()).num_days()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalState {
    #[serde(deserialize_with = "deserialize_amount")]
    pub vesting_withdraw_rate: Decimal,
    #[serde(deserialize_with = "deserialize_share_count")]
    pub withdrawn: BigInt,
    #[serde(deserialize_with = "deserialize_share_count")]
    pub to_withdraw: BigInt,
}

/// Account details from `get_accounts`, enriched with the amount currently
/// delegated to it by the delegator.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    pub name: String,
    #[serde(rename = "vesting_shares", deserialize_with = "deserialize_amount")]
    pub own_vesting_shares: Decimal,
    #[serde(skip_deserializing)]
    pub vesting_shares_from_delegator: Decimal,
    #[serde(flatten)]
    pub activity: ActivityTimestamps,
    #[serde(flatten)]
    pub withdrawal: WithdrawalState,
}
