//! # Domain Errors
//!
//! Error types returned by the asset contract. Nothing is retried here;
//! every error aborts the transaction and goes back to the caller.

use super::value_objects::AssetState;
use ledger_api::LedgerError;
use thiserror::Error;

/// Asset contract error types.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Required record is absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record already present at the key.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Current state does not allow the requested transition.
    #[error("Invalid state transition: {from} -> {to}")]
    InvalidState {
        /// Current state
        from: AssetState,
        /// Attempted state
        to: AssetState,
    },

    /// Caller input is malformed or incomplete.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Expected key missing from the transient map.
    #[error("Missing transient data: {0}")]
    MissingTransientData(String),

    /// Stored bytes could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Caller's organisation may not perform the operation.
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Ledger read or write failed.
    #[error("Ledger error: {0}")]
    Ledger(LedgerError),
}

impl From<LedgerError> for AssetError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound { key } => Self::NotFound(key),
            LedgerError::AlreadyExists { key } => Self::AlreadyExists(key),
            LedgerError::Deserialization { key, reason } => {
                Self::Deserialization(format!("{key}: {reason}"))
            }
            e @ LedgerError::InvalidKeyPart { .. } => Self::InvalidRequest(e.to_string()),
            other => Self::Ledger(other),
        }
    }
}
