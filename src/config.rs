use crate::error::{DelegatorError, Result};
use crate::services::account_pager::{validate_page_limit, DEFAULT_PAGE_LIMIT};
use crate::services::batch_submitter::DEFAULT_EXPIRATION_SECS;
use std::env;
use std::str::FromStr;

pub struct Config {
    pub delegator_account: String,
    pub primary_rpc: String,
    pub secondary_rpc: Option<String>,
    pub wallet_rpc: Option<String>,
    pub wallet_password: Option<String>,
    pub wifs: Vec<String>,
    pub page_limit: usize,
    pub expiration_secs: i64,
    pub dry_run: bool,
    pub start_cursor: Option<String>,
    pub deplorables_file: Option<String>,
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T: FromStr>(key: &str, default: T) -> Result<T> {
    match optional(key) {
        Some(raw) => raw.trim().parse().map_err(|_| DelegatorError::Config {
            message: format!("{} has invalid value {:?}", key, raw),
        }),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            delegator_account: optional("DELEGATOR_ACCOUNT").ok_or_else(|| {
                DelegatorError::Config {
                    message: "DELEGATOR_ACCOUNT must be set".to_string(),
                }
            })?,
            primary_rpc: optional("PRIMARY_RPC")
                .unwrap_or_else(|| "https://api.steemit.com".to_string()),
            secondary_rpc: optional("SECONDARY_RPC"),
            wallet_rpc: optional("WALLET_RPC"),
            wallet_password: optional("WALLET_PASSWORD"),
            wifs: optional("DELEGATOR_WIFS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|wif| !wif.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            page_limit: validate_page_limit(parsed("PAGE_LIMIT", DEFAULT_PAGE_LIMIT)?)?,
            expiration_secs: parsed("TX_EXPIRATION", DEFAULT_EXPIRATION_SECS)?,
            dry_run: parsed("DRY_RUN", true)?,
            start_cursor: optional("START_CURSOR"),
            deplorables_file: optional("DEPLORABLES_FILE"),
        })
    }
}
