use crate::error::{DelegatorError, Result};
use crate::models::AccountRecord;
use crate::services::chain::ChainClient;
use log::{info, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;

pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Each page after the first repeats the cursor entry, so a page needs room
/// for at least one new delegatee beside it.
pub const MIN_PAGE_LIMIT: usize = 2;

pub fn validate_page_limit(limit: usize) -> Result<usize> {
    if limit < MIN_PAGE_LIMIT {
        return Err(DelegatorError::Config {
            message: format!(
                "page limit {} is below the minimum of {}",
                limit, MIN_PAGE_LIMIT
            ),
        });
    }
    Ok(limit)
}

/// Walks the delegator's outgoing delegations one page at a time.
pub struct AccountPager {
    limit: usize,
}

impl Default for AccountPager {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl AccountPager {
    pub fn new(limit: usize) -> Result<Self> {
        Ok(Self {
            limit: validate_page_limit(limit)?,
        })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fetches the page of delegatees following `cursor` and returns their
    /// account details, each carrying the amount currently delegated to it.
    /// A `None` cursor in the result means there are no more pages.
    pub async fn next_page<C: ChainClient + ?Sized>(
        &self,
        client: &C,
        delegator: &str,
        cursor: Option<&str>,
    ) -> Result<(Vec<AccountRecord>, Option<String>)> {
        let start = cursor.unwrap_or_default();
        info!(
            "Fetching up to {} delegations of {} from {:?}",
            self.limit, delegator, start
        );
        let mut delegations = client
            .get_vesting_delegations(delegator, start, self.limit)
            .await?;

        // The start entry is inclusive, so it repeats the previous page's tail.
        if !start.is_empty()
            && delegations
                .first()
                .map_or(false, |first| first.delegatee == start)
        {
            delegations.remove(0);
        }

        let Some(last) = delegations.last() else {
            info!("No delegations after {:?}, pagination finished", start);
            return Ok((Vec::new(), None));
        };
        let next_cursor = last.delegatee.clone();

        let delegated: HashMap<String, Decimal> = delegations
            .iter()
            .map(|d| (d.delegatee.clone(), d.vesting_shares))
            .collect();
        let names: Vec<String> = delegations.iter().map(|d| d.delegatee.clone()).collect();

        let mut accounts = client.get_accounts(&names).await?;
        for acct in accounts.iter_mut() {
            match delegated.get(&acct.name) {
                Some(shares) => acct.vesting_shares_from_delegator = *shares,
                None => warn!("Node returned unrequested account {}", acct.name),
            }
        }
        accounts.retain(|acct| delegated.contains_key(&acct.name));

        info!(
            "Loaded {} delegatee accounts, next cursor {}",
            accounts.len(),
            next_cursor
        );
        Ok((accounts, Some(next_cursor)))
    }
}
