use crate::error::{DelegatorError, Result};
use crate::models::{
    AccountRecord, ChainProperties, DynamicGlobalProperties, SignedTransaction, Transaction,
    VestingDelegation,
};
use async_trait::async_trait;
use serde_json::Value;

/// Read and broadcast access to a chain node.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn get_dynamic_global_properties(&self) -> Result<DynamicGlobalProperties>;

    async fn get_chain_properties(&self) -> Result<ChainProperties>;

    /// Up to `limit` delegations made by `delegator`, starting at `start`
    /// inclusive. An empty `start` begins at the first delegatee.
    async fn get_vesting_delegations(
        &self,
        delegator: &str,
        start: &str,
        limit: usize,
    ) -> Result<Vec<VestingDelegation>>;

    async fn get_accounts(&self, names: &[String]) -> Result<Vec<AccountRecord>>;

    async fn broadcast_transaction(&self, transaction: &SignedTransaction) -> Result<Value>;
}

#[async_trait]
pub trait TransactionSigner: Send + Sync {
    async fn sign(&self, transaction: Transaction, wifs: &[String]) -> Result<SignedTransaction>;
}

/// Signer for deployments that never sign; any attempt is a signing failure.
pub struct NoSigner;

#[async_trait]
impl TransactionSigner for NoSigner {
    async fn sign(&self, _transaction: Transaction, _wifs: &[String]) -> Result<SignedTransaction> {
        Err(DelegatorError::Signing {
            message: "credentials supplied but no signer is configured".to_string(),
        })
    }
}

#[async_trait]
impl<T: TransactionSigner + ?Sized> TransactionSigner for Box<T> {
    async fn sign(&self, transaction: Transaction, wifs: &[String]) -> Result<SignedTransaction> {
        (**self).sign(transaction, wifs).await
    }
}
