use crate::error::{DelegatorError, Result};
use crate::models::datetime_utils::serialize_datetime;
use chrono::{DateTime, Duration, Utc};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelegateVestingShares {
    pub delegator: String,
    pub delegatee: String,
    pub vesting_shares: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    DelegateVestingShares(DelegateVestingShares),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::DelegateVestingShares(_) => "delegate_vesting_shares",
        }
    }
}

// Operations travel as `[name, payload]` pairs.
impl Serialize for Operation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(self.name())?;
        match self {
            Operation::DelegateVestingShares(op) => pair.serialize_element(op)?,
        }
        pair.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub ref_block_num: u16,
    pub ref_block_prefix: u32,
    #[serde(serialize_with = "serialize_datetime")]
    pub expiration: DateTime<Utc>,
    pub operations: Vec<Operation>,
    pub extensions: Vec<serde_json::Value>,
}

impl Transaction {
    /// Builds an unsigned transaction referencing the given head block.
    pub fn new(
        head_block_number: u32,
        head_block_id: &str,
        expiration: Duration,
        operations: Vec<Operation>,
    ) -> Result<Self> {
        Ok(Self {
            ref_block_num: (head_block_number & 0xFFFF) as u16,
            ref_block_prefix: ref_block_prefix(head_block_id)?,
            expiration: Utc::now() + expiration,
            operations,
            extensions: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SignedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub signatures: Vec<String>,
}

/// The wallet echoes the whole transaction back; only the signatures are
/// read from its reply and the body is reused from the local copy.
#[derive(Debug, Deserialize)]
pub struct SignatureEnvelope {
    #[serde(default)]
    pub signatures: Vec<String>,
}

impl SignedTransaction {
    pub fn unsigned(transaction: Transaction) -> Self {
        Self {
            transaction,
            signatures: Vec::new(),
        }
    }
}

/// Little-endian u32 taken from bytes 4..8 of the hex block id.
pub fn ref_block_prefix(block_id: &str) -> Result<u32> {
    let malformed = || DelegatorError::InvalidChainParameters {
        reason: format!("head block id {:?} is not a block hash", block_id),
    };
    let hex = block_id
        .get(8..16)
        .filter(|hex| hex.is_ascii())
        .ok_or_else(malformed)?;
    let mut bytes = [0u8; 4];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| malformed())?;
    }
    Ok(u32::from_le_bytes(bytes))
}
