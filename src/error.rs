//! Custom error types for StoryCash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. None of these errors is fatal to the
//! process: the ledger and the tips cache both have a fallback for every
//! failure path.

use thiserror::Error;

/// The main error type for StoryCash operations
#[derive(Error, Debug)]
pub enum StoryCashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A persisted payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Writing the ledger or cache file failed
    #[error("Write error: {0}")]
    Write(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Remote request failed (connection error or non-2xx status)
    #[error("Network error: {0}")]
    Network(String),

    /// Remote request did not complete in time
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Remote payload was malformed
    #[error("Remote decode error: {0}")]
    RemoteDecode(String),
}

impl StoryCashError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the remote tips source
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::RemoteDecode(_)
        )
    }
}

impl From<std::io::Error> for StoryCashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoryCashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for StoryCash operations
pub type StoryCashResult<T> = Result<T, StoryCashError>;
