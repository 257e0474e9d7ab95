#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use redeemer::models::datetime_utils::CHAIN_TIME_FORMAT;
use redeemer::models::{
    AccountRecord, ChainProperties, DynamicGlobalProperties, SignedTransaction, Transaction,
    VestingDelegation,
};
use redeemer::services::{ChainClient, TransactionSigner};
use redeemer::{DelegatorError, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const DELEGATOR: &str = "redeemer";
pub const HEAD_BLOCK_ID: &str = "04b3c1f2a1b2c3d4e5f60718293a4b5c6d7e8f90";

/// Chain values giving target_vests = 1000, min_delta_vests = 1, min_vests = 10.
pub fn global_properties_json() -> Value {
    json!({
        "head_block_number": 78889458,
        "head_block_id": HEAD_BLOCK_ID,
        "time": Utc::now().format(CHAIN_TIME_FORMAT).to_string(),
        "total_vesting_fund_steem": "15.000 STEEM",
        "total_vesting_shares": "1000.000000 VESTS",
        "current_supply": "350000000.000 STEEM"
    })
}

pub fn chain_properties_json() -> Value {
    json!({
        "account_creation_fee": "0.015 STEEM",
        "maximum_block_size": 65536,
        "sbd_interest_rate": 0
    })
}

pub struct AccountSpec {
    pub name: &'static str,
    pub own_vests: &'static str,
    pub idle_days: i64,
    pub withdraw_rate: &'static str,
    pub delegated: &'static str,
}

impl AccountSpec {
    pub fn new(name: &'static str, own_vests: &'static str, delegated: &'static str) -> Self {
        Self {
            name,
            own_vests,
            idle_days: 1,
            withdraw_rate: "0.000000",
            delegated,
        }
    }

    pub fn account_json(&self) -> Value {
        let last = Utc::now() - Duration::days(self.idle_days);
        let fmt = |d: chrono::DateTime<Utc>| d.format(CHAIN_TIME_FORMAT).to_string();
        json!({
            "id": 1234,
            "name": self.name,
            "vesting_shares": format!("{} VESTS", self.own_vests),
            "delegated_vesting_shares": "0.000000 VESTS",
            "received_vesting_shares": format!("{} VESTS", self.delegated),
            "created": fmt(last - Duration::days(300)),
            "last_bandwidth_update": fmt(last),
            "last_post": fmt(last - Duration::days(2)),
            "last_vote_time": fmt(last - Duration::days(1)),
            "vesting_withdraw_rate": format!("{} VESTS", self.withdraw_rate),
            "withdrawn": 0,
            "to_withdraw": "0"
        })
    }

    pub fn delegation_json(&self) -> Value {
        json!({
            "id": 42,
            "delegator": DELEGATOR,
            "delegatee": self.name,
            "vesting_shares": format!("{} VESTS", self.delegated),
            "min_delegation_time": "2018-01-01T00:00:00"
        })
    }
}

/// In-memory chain with inclusive-start delegation paging.
pub struct FakeChain {
    delegations: Vec<Value>,
    accounts: HashMap<String, Value>,
    pub fail_broadcast: bool,
    pub broadcasts: Mutex<Vec<Value>>,
    pub delegation_queries: Mutex<Vec<(String, usize)>>,
    pub global_queries: AtomicUsize,
}

impl FakeChain {
    pub fn new(specs: &[AccountSpec]) -> Self {
        let mut delegations: Vec<Value> = specs.iter().map(AccountSpec::delegation_json).collect();
        delegations.sort_by(|a, b| a["delegatee"].as_str().cmp(&b["delegatee"].as_str()));
        Self {
            delegations,
            accounts: specs
                .iter()
                .map(|spec| (spec.name.to_string(), spec.account_json()))
                .collect(),
            fail_broadcast: false,
            broadcasts: Mutex::new(Vec::new()),
            delegation_queries: Mutex::new(Vec::new()),
            global_queries: AtomicUsize::new(0),
        }
    }

    pub fn broadcast_count(&self) -> usize {
        self.broadcasts.lock().unwrap().len()
    }
}

#[async_trait]
impl ChainClient for FakeChain {
    async fn get_dynamic_global_properties(&self) -> Result<DynamicGlobalProperties> {
        self.global_queries.fetch_add(1, Ordering::SeqCst);
        Ok(serde_json::from_value(global_properties_json())?)
    }

    async fn get_chain_properties(&self) -> Result<ChainProperties> {
        Ok(serde_json::from_value(chain_properties_json())?)
    }

    async fn get_vesting_delegations(
        &self,
        delegator: &str,
        start: &str,
        limit: usize,
    ) -> Result<Vec<VestingDelegation>> {
        assert_eq!(delegator, DELEGATOR);
        self.delegation_queries
            .lock()
            .unwrap()
            .push((start.to_string(), limit));
        self.delegations
            .iter()
            .filter(|d| d["delegatee"].as_str().unwrap_or_default() >= start)
            .take(limit)
            .map(|d| serde_json::from_value(d.clone()).map_err(DelegatorError::from))
            .collect()
    }

    async fn get_accounts(&self, names: &[String]) -> Result<Vec<AccountRecord>> {
        names
            .iter()
            .filter_map(|name| self.accounts.get(name))
            .map(|acct| serde_json::from_value(acct.clone()).map_err(DelegatorError::from))
            .collect()
    }

    async fn broadcast_transaction(&self, transaction: &SignedTransaction) -> Result<Value> {
        if self.fail_broadcast {
            return Err(DelegatorError::Rpc {
                method: "condenser_api.broadcast_transaction_synchronous".to_string(),
                code: -32000,
                message: "missing required active authority".to_string(),
            });
        }
        self.broadcasts
            .lock()
            .unwrap()
            .push(serde_json::to_value(transaction)?);
        Ok(json!({"id": "e1b2", "block_num": 78889459, "trx_num": 3, "expired": false}))
    }
}

pub struct RecordingSigner {
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl RecordingSigner {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionSigner for RecordingSigner {
    async fn sign(&self, transaction: Transaction, wifs: &[String]) -> Result<SignedTransaction> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DelegatorError::Signing {
                message: "key does not match any authority".to_string(),
            });
        }
        Ok(SignedTransaction {
            transaction,
            signatures: wifs.iter().map(|wif| format!("sig-{}", wif)).collect(),
        })
    }
}
