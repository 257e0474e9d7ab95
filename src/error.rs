use crate::models::DelegationDecision;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DelegatorError>;

#[derive(Error, Debug)]
pub enum DelegatorError {
    #[error("RPC {method} failed with code {code}: {message}")]
    Rpc {
        method: String,
        code: i64,
        message: String,
    },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed chain payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed amount: {value:?}")]
    MalformedAmount { value: String },

    #[error("Invalid chain parameters: {reason}")]
    InvalidChainParameters { reason: String },

    #[error("Signing failed: {message}")]
    Signing { message: String },

    #[error("Broadcast of {} delegation changes failed: {source}", .decisions.len())]
    BroadcastFailed {
        decisions: Vec<DelegationDecision>,
        #[source]
        source: Box<DelegatorError>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}
