use crate::models::amount::{deserialize_amount, serialize_vests};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of `get_vesting_delegations`.
#[derive(Debug, Clone, Deserialize)]
pub struct VestingDelegation {
    pub delegator: String,
    pub delegatee: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub vesting_shares: Decimal,
}

/// A delegation change the policy wants applied to one delegatee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelegationDecision {
    pub name: String,
    /// The delegatee's own vesting shares at decision time.
    #[serde(serialize_with = "serialize_vests")]
    pub current_vesting_shares: Decimal,
    pub delta_vests: Decimal,
    /// Absolute target, already in the chain's `0.000000 VESTS` format.
    pub new_vests: String,
    #[serde(serialize_with = "serialize_vests")]
    pub old_vests: Decimal,
}
