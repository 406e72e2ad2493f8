//! Asset List Adapter
//!
//! Typed wrapper binding the entity store to the `Asset` class.

use crate::domain::{Asset, AssetError, ASSET_CLASS};
use ledger_api::{ChaincodeStub, StateList};

/// Assets in the public state of one transaction.
pub struct AssetList<'a> {
    states: StateList<'a, dyn ChaincodeStub + 'a, Asset>,
}

impl<'a> AssetList<'a> {
    /// Bind to a transaction stub.
    pub fn new(stub: &'a (dyn ChaincodeStub + 'a)) -> Self {
        Self {
            states: StateList::new(stub, ASSET_CLASS, Asset::deserialize),
        }
    }

    /// Insert a new asset.
    pub fn add_asset(&self, asset: &Asset) -> Result<(), AssetError> {
        Ok(self.states.add_state(asset)?)
    }

    /// Asset at (owner name, id), `None` if absent.
    pub fn get_asset(&self, owner: &str, asset_id: &str) -> Result<Option<Asset>, AssetError> {
        Ok(self.states.get_state(&[owner, asset_id])?)
    }

    /// Overwrite an asset.
    pub fn update_asset(&self, asset: &Asset) -> Result<(), AssetError> {
        Ok(self.states.update_state(asset)?)
    }

    /// Remove an asset.
    pub fn delete_asset(&self, owner: &str, asset_id: &str) -> Result<(), AssetError> {
        Ok(self.states.delete_state(&[owner, asset_id])?)
    }

    /// Every asset, in key order.
    pub fn list_assets(&self) -> Result<Vec<Asset>, AssetError> {
        Ok(self.states.list_all()?)
    }
}
