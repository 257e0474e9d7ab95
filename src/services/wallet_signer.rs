use crate::error::{DelegatorError, Result};
use crate::models::transaction::SignatureEnvelope;
use crate::models::{SignedTransaction, Transaction};
use crate::services::chain::TransactionSigner;
use crate::services::steem_rpc::call_rpc;
use async_trait::async_trait;
use log::info;
use serde_json::{json, Value};

/// Delegates signing to an external wallet daemon that holds the keys.
pub struct WalletSigner {
    http: reqwest::Client,
    wallet_rpc: String,
    password: Option<String>,
}

impl WalletSigner {
    pub fn new(wallet_rpc: &str, password: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            wallet_rpc: wallet_rpc.to_string(),
            password,
        }
    }

    async fn wallet_call(&self, method: &str, params: Value) -> Result<Value> {
        call_rpc(&self.http, &self.wallet_rpc, method, &params)
            .await
            .map_err(|e| DelegatorError::Signing {
                message: format!("wallet {} failed: {}", method, e),
            })
    }
}

#[async_trait]
impl TransactionSigner for WalletSigner {
    async fn sign(&self, transaction: Transaction, wifs: &[String]) -> Result<SignedTransaction> {
        if let Some(password) = &self.password {
            let locked = self.wallet_call("is_locked", json!([])).await?;
            if locked.as_bool().unwrap_or(true) {
                self.wallet_call("unlock", json!([password])).await?;
            }
        }
        for wif in wifs {
            self.wallet_call("import_key", json!([wif])).await?;
        }

        let reply = self
            .wallet_call("sign_transaction", json!([&transaction, false]))
            .await?;
        let envelope: SignatureEnvelope =
            serde_json::from_value(reply).map_err(|e| DelegatorError::Signing {
                message: format!("unreadable wallet reply: {}", e),
            })?;
        if envelope.signatures.is_empty() {
            return Err(DelegatorError::Signing {
                message: "wallet returned no signatures".to_string(),
            });
        }

        info!(
            "Transaction signed with {} signature(s)",
            envelope.signatures.len()
        );
        Ok(SignedTransaction {
            transaction,
            signatures: envelope.signatures,
        })
    }
}
