use crate::error::{DelegatorError, Result};
use crate::models::{
    AccountRecord, ChainProperties, DynamicGlobalProperties, SignedTransaction, VestingDelegation,
};
use crate::services::chain::ChainClient;
use async_trait::async_trait;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Performs one JSON-RPC 2.0 call against `url`.
pub(crate) async fn call_rpc<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    method: &str,
    params: &Value,
) -> Result<T> {
    let request = RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method,
        params,
    };
    let body = http
        .post(url)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let response: RpcResponse = serde_json::from_str(&body)?;

    if let Some(err) = response.error {
        return Err(DelegatorError::Rpc {
            method: method.to_string(),
            code: err.code,
            message: err.message,
        });
    }
    Ok(serde_json::from_value(response.result)?)
}

/// `ChainClient` over a node's `condenser_api`, with an optional secondary
/// node for read queries.
pub struct SteemRpc {
    http: reqwest::Client,
    primary_rpc: String,
    secondary_rpc: Option<String>,
}

impl SteemRpc {
    pub fn connect(primary_rpc: &str, secondary_rpc: Option<&str>) -> Self {
        info!("Connecting to chain node {}", primary_rpc);
        if let Some(secondary) = secondary_rpc {
            info!("Secondary node {} configured for read fallback", secondary);
        }
        Self {
            http: reqwest::Client::new(),
            primary_rpc: primary_rpc.to_string(),
            secondary_rpc: secondary_rpc.map(str::to_string),
        }
    }

    async fn query<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        info!("Querying RPC: {}", method);
        match call_rpc(&self.http, &self.primary_rpc, method, &params).await {
            Ok(response) => Ok(response),
            Err(primary_err) => {
                let Some(secondary) = &self.secondary_rpc else {
                    error!("RPC {} failed: {}", method, primary_err);
                    return Err(primary_err);
                };
                warn!(
                    "Primary RPC failed for {} ({}), trying secondary",
                    method, primary_err
                );
                match call_rpc(&self.http, secondary, method, &params).await {
                    Ok(response) => {
                        info!("RPC query successful on secondary: {}", method);
                        Ok(response)
                    }
                    Err(e) => {
                        error!("Both RPCs failed for {}: {}", method, e);
                        Err(e)
                    }
                }
            }
        }
    }
}

#[async_trait]
impl ChainClient for SteemRpc {
    async fn get_dynamic_global_properties(&self) -> Result<DynamicGlobalProperties> {
        self.query("condenser_api.get_dynamic_global_properties", json!([]))
            .await
    }

    async fn get_chain_properties(&self) -> Result<ChainProperties> {
        self.query("condenser_api.get_chain_properties", json!([]))
            .await
    }

    async fn get_vesting_delegations(
        &self,
        delegator: &str,
        start: &str,
        limit: usize,
    ) -> Result<Vec<VestingDelegation>> {
        self.query(
            "condenser_api.get_vesting_delegations",
            json!([delegator, start, limit]),
        )
        .await
    }

    async fn get_accounts(&self, names: &[String]) -> Result<Vec<AccountRecord>> {
        self.query("condenser_api.get_accounts", json!([names]))
            .await
    }

    // Never retried against the secondary node.
    async fn broadcast_transaction(&self, transaction: &SignedTransaction) -> Result<Value> {
        let method = "condenser_api.broadcast_transaction_synchronous";
        info!("Broadcasting transaction via {}", self.primary_rpc);
        call_rpc(&self.http, &self.primary_rpc, method, &json!([transaction])).await
    }
}
