use crate::utils::error::{DirectoryError, Result};
use regex::Regex;
use std::sync::LazyLock;

static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Syntactic check only; says nothing about deliverability.
pub fn validate_address(address: &str) -> bool {
    ADDRESS_PATTERN.is_match(address)
}

pub fn validate_address_field(field_name: &str, address: &str) -> Result<()> {
    if !validate_address(address) {
        return Err(DirectoryError::ValidationError {
            message: format!("{}: '{}' is not a valid address", field_name, address),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::ValidationError {
            message: format!("{}: value cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_capacity(current: usize, limit: usize) -> Result<()> {
    if current >= limit {
        return Err(DirectoryError::CapacityExceeded { limit });
    }
    Ok(())
}
