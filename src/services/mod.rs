pub mod account_pager;
pub mod batch_submitter;
pub mod chain;
pub mod chain_parameters;
pub mod delegation_policy;
pub mod steem_rpc;
pub mod wallet_signer;

pub use account_pager::AccountPager;
pub use batch_submitter::{BatchSubmitter, SubmitOptions};
pub use chain::{ChainClient, NoSigner, TransactionSigner};
pub use chain_parameters::ChainParameters;
pub use delegation_policy::DelegationPolicy;
pub use steem_rpc::SteemRpc;
pub use wallet_signer::WalletSigner;
