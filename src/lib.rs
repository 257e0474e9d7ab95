pub mod config;
pub mod delegator;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use delegator::{Delegator, DelegatorOptions};
pub use error::{DelegatorError, Result};
