//! # In-Memory Ledger
//!
//! Implements `ChaincodeStub` over a committed world state held in memory.
//!
//! Each invocation runs in a [`TransactionStub`]:
//! - reads see committed state only (no read-your-writes) and record the
//!   version they observed
//! - writes are buffered until [`TransactionStub::commit`]
//! - commit fails with `MvccConflict` if any key read has since changed
//! - dropping a stub without committing discards its writes

use super::selector::Selector;
use crate::domain::LedgerError;
use crate::ports::{ChaincodeStub, QueryResult, TransientMap};
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Public key or collection-qualified private key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Slot {
    collection: Option<String>,
    key: String,
}

impl Slot {
    fn public(key: &str) -> Self {
        Self {
            collection: None,
            key: key.to_string(),
        }
    }

    fn private(collection: &str, key: &str) -> Self {
        Self {
            collection: Some(collection.to_string()),
            key: key.to_string(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.collection {
            Some(c) => write!(f, "{}/{}", c, self.key),
            None => f.write_str(&self.key),
        }
    }
}

#[derive(Debug, Default)]
struct WorldState {
    values: BTreeMap<Slot, Vec<u8>>,
    /// Commit height of the last write (or delete) per slot.
    versions: HashMap<Slot, u64>,
    height: u64,
}

impl WorldState {
    fn version(&self, slot: &Slot) -> u64 {
        self.versions.get(slot).copied().unwrap_or(0)
    }
}

/// Committed ledger state shared by all transactions.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    world: RwLock<WorldState>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a transaction with no transient data.
    pub fn begin(&self) -> TransactionStub<'_> {
        self.begin_with_transient(TransientMap::new())
    }

    /// Open a transaction carrying caller-supplied transient data.
    pub fn begin_with_transient(&self, transient: TransientMap) -> TransactionStub<'_> {
        let tx_id = Uuid::new_v4().to_string();
        debug!(tx_id = %tx_id, "Opening transaction");
        TransactionStub {
            ledger: self,
            tx_id,
            transient,
            read_set: Mutex::new(HashMap::new()),
            write_set: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of committed transactions.
    pub fn height(&self) -> u64 {
        self.world.read().height
    }

    /// Committed public value, outside any transaction.
    pub fn public_state(&self, key: &str) -> Option<Vec<u8>> {
        self.world.read().values.get(&Slot::public(key)).cloned()
    }

    /// Committed private value, outside any transaction.
    pub fn private_data(&self, collection: &str, key: &str) -> Option<Vec<u8>> {
        self.world
            .read()
            .values
            .get(&Slot::private(collection, key))
            .cloned()
    }
}

/// One transaction against an [`InMemoryLedger`].
pub struct TransactionStub<'a> {
    ledger: &'a InMemoryLedger,
    tx_id: String,
    transient: TransientMap,
    read_set: Mutex<HashMap<Slot, u64>>,
    /// `None` marks a delete.
    write_set: Mutex<BTreeMap<Slot, Option<Vec<u8>>>>,
}

impl TransactionStub<'_> {
    /// Validate the read set and apply buffered writes atomically.
    ///
    /// Returns the new ledger height.
    pub fn commit(self) -> Result<u64, LedgerError> {
        let mut world = self.ledger.world.write();

        for (slot, seen) in self.read_set.into_inner() {
            if world.version(&slot) != seen {
                warn!(tx_id = %self.tx_id, key = %slot, "MVCC read conflict");
                return Err(LedgerError::MvccConflict {
                    key: slot.to_string(),
                    tx_id: self.tx_id,
                });
            }
        }

        world.height += 1;
        let height = world.height;
        let writes = self.write_set.into_inner();
        let count = writes.len();
        for (slot, value) in writes {
            match value {
                Some(bytes) => {
                    world.values.insert(slot.clone(), bytes);
                }
                None => {
                    world.values.remove(&slot);
                }
            }
            world.versions.insert(slot, height);
        }

        info!(tx_id = %self.tx_id, height, writes = count, "Transaction committed");
        Ok(height)
    }

    /// Number of buffered writes.
    pub fn pending_writes(&self) -> usize {
        self.write_set.lock().len()
    }

    fn read(&self, slot: Slot) -> Option<Vec<u8>> {
        let world = self.ledger.world.read();
        let value = world.values.get(&slot).cloned();
        let version = world.version(&slot);
        // First observation wins; a later re-read must not mask it.
        self.read_set.lock().entry(slot).or_insert(version);
        value
    }

    fn write(&self, slot: Slot, value: Option<Vec<u8>>) {
        self.write_set.lock().insert(slot, value);
    }
}

impl ChaincodeStub for TransactionStub<'_> {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.read(Slot::public(key)))
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        if key.is_empty() {
            return Err(LedgerError::Io("empty key".to_string()));
        }
        self.write(Slot::public(key), Some(value));
        Ok(())
    }

    fn del_state(&self, key: &str) -> Result<(), LedgerError> {
        self.write(Slot::public(key), None);
        Ok(())
    }

    fn get_state_by_range(&self, start: &str, end: &str) -> Result<Vec<QueryResult>, LedgerError> {
        let world = self.ledger.world.read();
        let mut read_set = self.read_set.lock();

        let results = world
            .values
            .iter()
            .filter(|(slot, _)| slot.collection.is_none())
            .filter(|(slot, _)| start.is_empty() || slot.key.as_str() >= start)
            .filter(|(slot, _)| end.is_empty() || slot.key.as_str() < end)
            .map(|(slot, value)| {
                read_set
                    .entry(slot.clone())
                    .or_insert_with(|| world.version(slot));
                QueryResult {
                    key: slot.key.clone(),
                    value: value.clone(),
                }
            })
            .collect();

        Ok(results)
    }

    fn get_private_data(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.read(Slot::private(collection, key)))
    }

    fn put_private_data(
        &self,
        collection: &str,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), LedgerError> {
        if collection.is_empty() || key.is_empty() {
            return Err(LedgerError::Io("empty collection or key".to_string()));
        }
        self.write(Slot::private(collection, key), Some(value));
        Ok(())
    }

    fn del_private_data(&self, collection: &str, key: &str) -> Result<(), LedgerError> {
        self.write(Slot::private(collection, key), None);
        Ok(())
    }

    fn get_private_data_query_result(
        &self,
        collection: &str,
        query: &str,
    ) -> Result<Vec<QueryResult>, LedgerError> {
        let selector = Selector::parse(query)?;
        let world = self.ledger.world.read();

        let mut results = Vec::new();
        for (slot, value) in &world.values {
            if slot.collection.as_deref() != Some(collection) {
                continue;
            }
            // Non-JSON documents are invisible to rich queries.
            let Ok(doc) = serde_json::from_slice::<serde_json::Value>(value) else {
                continue;
            };
            if selector.matches(&doc)? {
                results.push(QueryResult {
                    key: slot.key.clone(),
                    value: value.clone(),
                });
            }
        }

        debug!(collection, matched = results.len(), "Rich query evaluated");
        Ok(results)
    }

    fn get_transient(&self) -> Result<TransientMap, LedgerError> {
        Ok(self.transient.clone())
    }
}
