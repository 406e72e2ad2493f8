//! # Outbound Ports
//!
//! The ledger primitives a contract may call during one transaction.
//! Consensus, ordering and replication live behind this trait.

use crate::domain::LedgerError;
use std::collections::HashMap;

/// Per-invocation caller data that is never written to the ledger.
pub type TransientMap = HashMap<String, Vec<u8>>;

/// One key/value pair returned by a range or rich query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryResult {
    /// Key (without collection).
    pub key: String,
    /// Raw stored bytes.
    pub value: Vec<u8>,
}

/// Ledger stub for a single transaction - outbound port.
///
/// Public state is shared by all organisations. Private collections are
/// named partitions only their member organisations can read.
pub trait ChaincodeStub: Send + Sync {
    /// Identifier of the running transaction.
    fn tx_id(&self) -> &str;

    /// Read a public key. `None` when absent.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write a public key.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Delete a public key. Deleting an absent key is not an error.
    fn del_state(&self, key: &str) -> Result<(), LedgerError>;

    /// Public keys in `[start, end)`; an empty bound is open-ended.
    fn get_state_by_range(&self, start: &str, end: &str) -> Result<Vec<QueryResult>, LedgerError>;

    /// Read a key from a private collection. `None` when absent.
    fn get_private_data(&self, collection: &str, key: &str)
        -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write a key into a private collection.
    fn put_private_data(
        &self,
        collection: &str,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), LedgerError>;

    /// Delete a key from a private collection.
    fn del_private_data(&self, collection: &str, key: &str) -> Result<(), LedgerError>;

    /// Run a JSON selector query over a private collection.
    fn get_private_data_query_result(
        &self,
        collection: &str,
        query: &str,
    ) -> Result<Vec<QueryResult>, LedgerError>;

    /// Transient map supplied with the invocation.
    fn get_transient(&self) -> Result<TransientMap, LedgerError>;
}
