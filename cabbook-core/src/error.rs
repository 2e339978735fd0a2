//! Error types for the cabbook ecosystem.

use thiserror::Error;

/// Errors that can occur in ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No booking at position {index} (the ledger holds {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
