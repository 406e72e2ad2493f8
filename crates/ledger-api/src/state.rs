//! # Keyed Entity Store
//!
//! `StateList` layers typed entities over the public partition of a
//! [`ChaincodeStub`]. Entities declare their key parts; the list owns the
//! composite key, existence checks and the deserialize hook.

use crate::domain::{make_key, validate_key_parts, LedgerError};
use crate::ports::ChaincodeStub;
use serde::Deserialize;
use tracing::debug;

/// An entity that can be stored in a [`StateList`].
pub trait StateEntity {
    /// Class tag written alongside the record.
    fn class(&self) -> &'static str;

    /// Ordered parts forming the composite key.
    fn split_key(&self) -> Vec<String>;

    /// Encode the storage record.
    fn serialize(&self) -> Result<Vec<u8>, LedgerError>;

    /// Composite key.
    fn key(&self) -> String {
        make_key(self.split_key().as_slice())
    }
}

/// Decoder registered for one entity class.
pub type DeserializeFn<E> = fn(&[u8]) -> serde_json::Result<E>;

#[derive(Deserialize)]
struct ClassTag {
    #[serde(default)]
    class: Option<String>,
}

/// Typed view over the ledger for one entity class.
pub struct StateList<'a, S: ChaincodeStub + ?Sized, E> {
    stub: &'a S,
    class: &'static str,
    deserialize: DeserializeFn<E>,
}

impl<'a, S: ChaincodeStub + ?Sized, E: StateEntity> StateList<'a, S, E> {
    /// Create a list bound to one transaction.
    pub fn new(stub: &'a S, class: &'static str, deserialize: DeserializeFn<E>) -> Self {
        Self {
            stub,
            class,
            deserialize,
        }
    }

    /// Class name of the entities in this list.
    pub fn class(&self) -> &'static str {
        self.class
    }

    /// Insert a new entity. Fails with `AlreadyExists` if the key is taken.
    pub fn add_state(&self, entity: &E) -> Result<(), LedgerError> {
        let key = self.entity_key(entity)?;
        if self.stub.get_state(&key)?.is_some() {
            return Err(LedgerError::AlreadyExists { key });
        }
        debug!(class = self.class, key = %key, "Adding state");
        self.stub.put_state(&key, entity.serialize()?)
    }

    /// Read an entity. `Ok(None)` when nothing is stored at the key.
    pub fn get_state(&self, parts: &[&str]) -> Result<Option<E>, LedgerError> {
        validate_key_parts(parts)?;
        let key = make_key(parts);
        match self.stub.get_state(&key)? {
            Some(bytes) => self.decode(&key, &bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Overwrite the entity at its key. No version check at this layer.
    pub fn update_state(&self, entity: &E) -> Result<(), LedgerError> {
        let key = self.entity_key(entity)?;
        debug!(class = self.class, key = %key, "Updating state");
        self.stub.put_state(&key, entity.serialize()?)
    }

    /// Remove the entity at the key. Absent keys are not an error.
    pub fn delete_state(&self, parts: &[&str]) -> Result<(), LedgerError> {
        validate_key_parts(parts)?;
        self.stub.del_state(&make_key(parts))
    }

    /// Every entity of this class in the public partition, in key order.
    pub fn list_all(&self) -> Result<Vec<E>, LedgerError> {
        let mut entities = Vec::new();
        for result in self.stub.get_state_by_range("", "")? {
            let tag: Option<ClassTag> = serde_json::from_slice(&result.value).ok();
            if tag.and_then(|t| t.class).as_deref() != Some(self.class) {
                continue;
            }
            entities.push(self.decode(&result.key, &result.value)?);
        }
        Ok(entities)
    }

    fn entity_key(&self, entity: &E) -> Result<String, LedgerError> {
        let parts = entity.split_key();
        validate_key_parts(parts.as_slice())?;
        Ok(make_key(parts.as_slice()))
    }

    fn decode(&self, key: &str, bytes: &[u8]) -> Result<E, LedgerError> {
        (self.deserialize)(bytes).map_err(|e| LedgerError::Deserialization {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}
