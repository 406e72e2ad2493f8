//! # Ledger Errors
//!
//! Error types for the entity store and the ledger adapters.

use thiserror::Error;

/// Ledger and entity store error types.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No record at the key (only raised where existence is required).
    #[error("State not found: {key}")]
    NotFound {
        /// Composite key that was looked up
        key: String,
    },

    /// A record is already present at the key.
    #[error("State already exists: {key}")]
    AlreadyExists {
        /// Composite key of the existing record
        key: String,
    },

    /// A composite key part contains the separator.
    #[error("Invalid key part {part:?}: must not contain {separator:?}")]
    InvalidKeyPart {
        /// Offending part
        part: String,
        /// Reserved separator
        separator: char,
    },

    /// Entity could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored bytes could not be decoded into the entity.
    #[error("Deserialization error at {key}: {reason}")]
    Deserialization {
        /// Key of the malformed record
        key: String,
        /// Decoder message
        reason: String,
    },

    /// Rich query is not a valid selector document.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Another transaction committed a newer version of a key this one read.
    #[error("MVCC read conflict on {key} (tx {tx_id})")]
    MvccConflict {
        /// Conflicting key (collection-qualified for private data)
        key: String,
        /// Rejected transaction
        tx_id: String,
    },

    /// Underlying ledger read or write failed.
    #[error("Ledger I/O error: {0}")]
    Io(String),
}
