pub mod account;
pub mod amount;
pub mod chain_properties;
pub mod datetime_utils;
pub mod delegation;
pub mod transaction;

pub use account::{AccountRecord, ActivityTimestamps, WithdrawalState};
pub use chain_properties::{ChainProperties, DynamicGlobalProperties};
pub use delegation::{DelegationDecision, VestingDelegation};
pub use transaction::{DelegateVestingShares, Operation, SignedTransaction, Transaction};
