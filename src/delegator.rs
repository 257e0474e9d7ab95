use crate::error::Result;
use crate::models::DelegationDecision;
use crate::services::account_pager::DEFAULT_PAGE_LIMIT;
use crate::services::{
    AccountPager, BatchSubmitter, ChainClient, ChainParameters, DelegationPolicy, SubmitOptions,
    TransactionSigner,
};
use chrono::Utc;
use log::info;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct DelegatorOptions {
    pub limit: usize,
    /// Accounts whose delegation is only ever driven to zero.
    pub deplorables: HashSet<String>,
}

impl Default for DelegatorOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            deplorables: HashSet::new(),
        }
    }
}

/// Runs the fetch, decide and submit pipeline one page at a time. Chain
/// parameters are read once at construction and reused for every page.
pub struct Delegator<C, S> {
    client: C,
    signer: S,
    pager: AccountPager,
    policy: DelegationPolicy,
}

impl<C: ChainClient, S: TransactionSigner> Delegator<C, S> {
    pub async fn new(client: C, signer: S, options: DelegatorOptions) -> Result<Self> {
        let pager = AccountPager::new(options.limit)?;
        let params = ChainParameters::load(&client).await?;
        Ok(Self {
            client,
            signer,
            pager,
            policy: DelegationPolicy::new(params, options.deplorables),
        })
    }

    pub fn params(&self) -> &ChainParameters {
        self.policy.params()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Processes the page after `cursor` and returns its decisions with the
    /// cursor for the next call. A `None` cursor means the walk is complete.
    pub async fn run_page(
        &self,
        delegator: &str,
        cursor: Option<&str>,
        expiration_secs: i64,
        dry_run: bool,
        wifs: &[String],
    ) -> Result<(Vec<DelegationDecision>, Option<String>)> {
        let (accounts, next_cursor) = self
            .pager
            .next_page(&self.client, delegator, cursor)
            .await?;
        if accounts.is_empty() {
            return Ok((Vec::new(), next_cursor));
        }

        let decisions = self.policy.decide_all(&accounts, Utc::now());
        info!(
            "{} of {} accounts need a delegation change",
            decisions.len(),
            accounts.len()
        );
        for decision in &decisions {
            info!(
                "{}: {} -> {} (delta {})",
                decision.name, decision.old_vests, decision.new_vests, decision.delta_vests
            );
        }
        if decisions.is_empty() {
            return Ok((decisions, next_cursor));
        }

        let options = SubmitOptions {
            expiration_secs,
            dry_run,
            wifs,
        };
        let decisions = BatchSubmitter::new(&self.client, &self.signer)
            .submit(delegator, decisions, &options)
            .await?;
        Ok((decisions, next_cursor))
    }
}
