use crate::error::{DelegatorError, Result};
use std::collections::HashSet;
use std::fs;

/// Reads the exclusion set from a JSON array of account names.
pub fn load_deplorables(file_path: &str) -> Result<HashSet<String>> {
    let raw_data = fs::read_to_string(file_path).map_err(|e| DelegatorError::Config {
        message: format!("cannot read {}: {}", file_path, e),
    })?;
    let names: Vec<String> = serde_json::from_str(&raw_data)?;
    Ok(names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}
