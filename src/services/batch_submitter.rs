use crate::error::{DelegatorError, Result};
use crate::models::{
    DelegateVestingShares, DelegationDecision, Operation, SignedTransaction, Transaction,
};
use crate::services::chain::{ChainClient, TransactionSigner};
use chrono::Duration as ChainDuration;
use log::info;
use std::time::Duration;
use tokio::time::sleep;

pub const DEFAULT_EXPIRATION_SECS: i64 = 60;

/// The chain accepts roughly 100 operations per 3 seconds from one account.
const PAUSE_MILLIS_PER_OPERATION: u64 = 30;

/// Per-page knobs for [`BatchSubmitter::submit`].
#[derive(Debug, Clone)]
pub struct SubmitOptions<'a> {
    pub expiration_secs: i64,
    pub dry_run: bool,
    pub wifs: &'a [String],
}

impl Default for SubmitOptions<'_> {
    fn default() -> Self {
        Self {
            expiration_secs: DEFAULT_EXPIRATION_SECS,
            dry_run: true,
            wifs: &[],
        }
    }
}

pub fn rate_limit_pause(operation_count: usize) -> Duration {
    Duration::from_millis(PAUSE_MILLIS_PER_OPERATION * operation_count as u64)
}

pub fn delegation_operations(delegator: &str, decisions: &[DelegationDecision]) -> Vec<Operation> {
    decisions
        .iter()
        .map(|decision| {
            Operation::DelegateVestingShares(DelegateVestingShares {
                delegator: delegator.to_string(),
                delegatee: decision.name.clone(),
                vesting_shares: decision.new_vests.clone(),
            })
        })
        .collect()
}

/// Packs a page of decisions into one transaction and, unless running dry,
/// signs and broadcasts it.
pub struct BatchSubmitter<'a, C: ?Sized, S: ?Sized> {
    client: &'a C,
    signer: &'a S,
}

impl<'a, C, S> BatchSubmitter<'a, C, S>
where
    C: ChainClient + ?Sized,
    S: TransactionSigner + ?Sized,
{
    pub fn new(client: &'a C, signer: &'a S) -> Self {
        Self { client, signer }
    }

    pub async fn build(
        &self,
        delegator: &str,
        decisions: &[DelegationDecision],
        expiration_secs: i64,
    ) -> Result<Transaction> {
        let head = self.client.get_dynamic_global_properties().await?;
        Transaction::new(
            head.head_block_number,
            &head.head_block_id,
            ChainDuration::seconds(expiration_secs),
            delegation_operations(delegator, decisions),
        )
    }

    /// Returns the decisions untouched; a rejected broadcast comes back as
    /// [`DelegatorError::BroadcastFailed`] carrying them.
    pub async fn submit(
        &self,
        delegator: &str,
        decisions: Vec<DelegationDecision>,
        options: &SubmitOptions<'_>,
    ) -> Result<Vec<DelegationDecision>> {
        if decisions.is_empty() {
            return Ok(decisions);
        }

        let transaction = self
            .build(delegator, &decisions, options.expiration_secs)
            .await?;

        // The signer may be an external wallet; a dry run leaves it untouched.
        if options.dry_run {
            info!(
                "Dry run: {} delegation operations neither signed nor broadcast",
                decisions.len()
            );
            return Ok(decisions);
        }

        let signed = if options.wifs.is_empty() {
            SignedTransaction::unsigned(transaction)
        } else {
            self.signer.sign(transaction, options.wifs).await?
        };

        match self.client.broadcast_transaction(&signed).await {
            Ok(result) => {
                info!("transaction broadcast. result: {}", result);
                let pause = rate_limit_pause(decisions.len());
                info!("Pausing {:?} to respect the operation rate limit", pause);
                sleep(pause).await;
                Ok(decisions)
            }
            Err(e) => Err(DelegatorError::BroadcastFailed {
                decisions,
                source: Box::new(e),
            }),
        }
    }
}
