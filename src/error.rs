//! Custom error types for Horizon
//!
//! One error enum covers storage, validation and projection failures. The
//! CLI surfaces it through `anyhow` in `main`.

use thiserror::Error;

/// The main error type for Horizon operations
#[derive(Error, Debug)]
pub enum HorizonError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and operation inputs
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

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A long-running computation was cancelled by its caller
    #[error("Operation cancelled")]
    Cancelled,
}

impl HorizonError {
    fn missing(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::missing("Account", identifier)
    }

    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::missing("Category", identifier)
    }

    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::missing("Transaction", identifier)
    }

    pub fn scenario_not_found(identifier: impl Into<String>) -> Self {
        Self::missing("Scenario", identifier)
    }

    pub fn configuration_not_found(identifier: impl Into<String>) -> Self {
        Self::missing("Configuration", identifier)
    }

    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::missing("Goal", identifier)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for HorizonError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HorizonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Horizon operations
pub type HorizonResult<T> = Result<T, HorizonError>;
