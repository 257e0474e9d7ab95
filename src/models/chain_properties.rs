use crate::models::amount::deserialize_amount;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Subset of `get_dynamic_global_properties` the delegator relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct DynamicGlobalProperties {
    pub head_block_number: u32,
    pub head_block_id: String,
    #[serde(
        alias = "total_vesting_fund_hive",
        deserialize_with = "deserialize_amount"
    )]
    pub total_vesting_fund_steem: Decimal,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_vesting_shares: Decimal,
}

/// Witness-voted chain configuration from `get_chain_properties`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainProperties {
    #[serde(deserialize_with = "deserialize_amount")]
    pub account_creation_fee: Decimal,
}
