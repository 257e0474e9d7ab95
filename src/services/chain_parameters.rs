use crate::error::{DelegatorError, Result};
use crate::models::{ChainProperties, DynamicGlobalProperties};
use crate::services::chain::ChainClient;
use log::info;
use rust_decimal::Decimal;

/// Stake level, in liquid units, every delegatee is topped up to.
pub const TARGET_STAKE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Economic thresholds derived from a snapshot of chain state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainParameters {
    pub vest_to_native_rate: Decimal,
    pub target_vests: Decimal,
    pub min_delta_vests: Decimal,
    pub min_vests: Decimal,
}

impl ChainParameters {
    pub fn derive(
        total_vesting_fund: Decimal,
        total_vesting_shares: Decimal,
        account_creation_fee: Decimal,
    ) -> Result<Self> {
        let invalid = |reason: &str| DelegatorError::InvalidChainParameters {
            reason: reason.to_string(),
        };
        if total_vesting_fund <= Decimal::ZERO || total_vesting_shares <= Decimal::ZERO {
            return Err(invalid("vesting fund and shares must be positive"));
        }
        if account_creation_fee <= Decimal::ZERO {
            return Err(invalid("account creation fee must be positive"));
        }

        let vest_to_native_rate = total_vesting_fund
            .checked_div(total_vesting_shares)
            .filter(|rate| !rate.is_zero())
            .ok_or_else(|| invalid("vesting rate underflows"))?;
        let target_vests = TARGET_STAKE
            .checked_div(vest_to_native_rate)
            .ok_or_else(|| invalid("target vests overflow"))?;
        let min_delta_vests = account_creation_fee
            .checked_div(vest_to_native_rate)
            .ok_or_else(|| invalid("minimum delta overflows"))?;
        let min_vests = min_delta_vests
            .checked_mul(Decimal::TEN)
            .ok_or_else(|| invalid("minimum vests overflow"))?;

        Ok(Self {
            vest_to_native_rate,
            target_vests,
            min_delta_vests,
            min_vests,
        })
    }

    pub fn from_snapshots(
        global: &DynamicGlobalProperties,
        chain: &ChainProperties,
    ) -> Result<Self> {
        Self::derive(
            global.total_vesting_fund_steem,
            global.total_vesting_shares,
            chain.account_creation_fee,
        )
    }

    /// Reads both snapshots from the chain and derives fresh parameters.
    pub async fn load<C: ChainClient + ?Sized>(client: &C) -> Result<Self> {
        let global = client.get_dynamic_global_properties().await?;
        let chain = client.get_chain_properties().await?;
        let params = Self::from_snapshots(&global, &chain)?;
        info!(
            "Chain parameters: rate={} target_vests={} min_delta_vests={} min_vests={}",
            params.vest_to_native_rate,
            params.target_vests,
            params.min_delta_vests,
            params.min_vests
        );
        Ok(params)
    }
}
