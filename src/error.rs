//! Error types for the budget ledger
//!
//! Every fallible ledger operation returns a [`LedgerResult`]. Validation
//! errors never leave a partially mutated document behind; storage errors
//! leave the in-memory document intact.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input (amounts, dates, currency codes, positions)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The ledger file or its backup could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a validation error for a position outside a section
    pub fn position_out_of_range(section: &str, position: usize, len: usize) -> Self {
        let detail = if len == 0 {
            format!("no entries in {}", section)
        } else {
            format!("valid positions are 1 to {}", len)
        };
        Self::Validation(format!(
            "Invalid selection {} for {}: {}",
            position, section, detail
        ))
    }

    /// Create a validation error for a total that no longer fits in `Money`
    pub fn total_out_of_range(what: &str) -> Self {
        Self::Validation(format!("The {} is too large to represent", what))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
