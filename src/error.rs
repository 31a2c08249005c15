//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Lookups that miss are not errors; they return `None`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while operating on address book data.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failed to encode or decode JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
