use crate::models::amount::format_vests;
use crate::models::{AccountRecord, DelegationDecision};
use crate::services::chain_parameters::ChainParameters;
use chrono::{DateTime, Utc};
use num_traits::Signed;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Accounts idle for longer than this only get the reduced grant.
pub const INACTIVE_DAYS_THRESHOLD: i64 = 90;

/// Accounts holding fewer own vests than this never see an increase.
pub const MIN_OWN_VESTS_FOR_INCREASE: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Withdraw rates at or below this are treated as no withdrawal.
pub const WITHDRAW_RATE_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Decides how much each delegatee should hold. Has no chain access: every
/// decision depends only on the account, the parameters and the exclusion set.
#[derive(Debug, Clone)]
pub struct DelegationPolicy {
    params: ChainParameters,
    deplorables: HashSet<String>,
}

impl DelegationPolicy {
    pub fn new(params: ChainParameters, deplorables: HashSet<String>) -> Self {
        Self {
            params,
            deplorables,
        }
    }

    pub fn params(&self) -> &ChainParameters {
        &self.params
    }

    fn target_vests(&self, acct: &AccountRecord, now: DateTime<Utc>) -> Decimal {
        let own = acct.own_vesting_shares;
        let params = &self.params;

        if self.deplorables.contains(&acct.name) || own >= params.target_vests {
            Decimal::ZERO
        } else if acct.activity.inactive_days(now) > INACTIVE_DAYS_THRESHOLD {
            let dormant_target = params.target_vests / Decimal::from(3) - own;
            params.min_vests.max(dormant_target)
        } else {
            params.target_vests - own
        }
    }

    fn blocks_increase(acct: &AccountRecord) -> bool {
        let withdrawal = &acct.withdrawal;
        withdrawal.vesting_withdraw_rate > WITHDRAW_RATE_EPSILON
            || withdrawal.withdrawn.is_positive()
            || withdrawal.to_withdraw.is_positive()
            || acct.own_vesting_shares < MIN_OWN_VESTS_FOR_INCREASE
    }

    /// Returns the delegation change for `acct`, or `None` when its current
    /// delegation should stay as it is.
    pub fn decide(&self, acct: &AccountRecord, now: DateTime<Utc>) -> Option<DelegationDecision> {
        let params = &self.params;
        let old_vests = acct.vesting_shares_from_delegator;
        let mut new_vests = self.target_vests(acct, now);

        if new_vests > old_vests && Self::blocks_increase(acct) {
            return None;
        }

        if new_vests > Decimal::ZERO && new_vests < params.min_vests {
            new_vests = params.min_vests;
        } else if new_vests.is_zero() && old_vests < params.min_delta_vests {
            // A delegation below the minimum delta cannot be removed in one
            // step; it has to be raised past the bar first.
            new_vests = params.min_vests.max(old_vests + params.min_delta_vests);
        }

        let delta_vests = new_vests - old_vests;
        if delta_vests.abs() < params.min_delta_vests {
            return None;
        }

        Some(DelegationDecision {
            name: acct.name.clone(),
            current_vesting_shares: acct.own_vesting_shares,
            delta_vests,
            new_vests: format_vests(new_vests),
            old_vests,
        })
    }

    /// Applies [`decide`](Self::decide) to a page of accounts, keeping their
    /// order and dropping the ones that need no change.
    pub fn decide_all(
        &self,
        accounts: &[AccountRecord],
        now: DateTime<Utc>,
    ) -> Vec<DelegationDecision> {
        accounts
            .iter()
            .filter_map(|acct| self.decide(acct, now))
            .collect()
    }
}
