//! # Asset Contract Service
//!
//! Negotiation protocol and query surface over the entity store.
//!
//! ## Transaction Model
//!
//! Each operation runs inside one ledger transaction passed in through
//! [`TransactionContext`]. Preconditions are always checked against the
//! record read in that same transaction; concurrent writers on one asset
//! are rejected by the ledger's MVCC check at commit, not here.
//!
//! ## Privacy
//!
//! - `request_to_buy` writes the proposal to the *owner's* collection only
//! - `get_requests` and `agree_to_sell` read the *caller's* own collection

use crate::adapters::AssetList;
use crate::config::ContractConfig;
use crate::domain::{
    collection_name, invariant_client_org_matches_peer, invariant_transition_allowed, Asset,
    AssetError, AssetState, AssetView, BuyRequest, Identity, IssueAsset,
};
use crate::ports::{AssetContractApi, IdentityResolver};
use ledger_api::{ChaincodeStub, LedgerError, StateEntity};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Capabilities available to one invocation.
#[derive(Clone, Copy)]
pub struct TransactionContext<'a> {
    stub: &'a dyn ChaincodeStub,
    identity: &'a dyn IdentityResolver,
}

impl<'a> TransactionContext<'a> {
    /// Bundle a transaction stub with the caller's identity resolver.
    pub fn new(stub: &'a dyn ChaincodeStub, identity: &'a dyn IdentityResolver) -> Self {
        Self { stub, identity }
    }

    /// Ledger stub of this transaction.
    pub fn stub(&self) -> &'a dyn ChaincodeStub {
        self.stub
    }

    /// Transaction id, for log correlation.
    pub fn tx_id(&self) -> &'a str {
        self.stub.tx_id()
    }

    /// Resolve the calling client.
    pub fn client_identity(&self) -> Result<Identity, AssetError> {
        self.identity.resolve()
    }

    /// Assets in the public state.
    pub fn assets(&self) -> AssetList<'a> {
        AssetList::new(self.stub)
    }
}

/// The asset contract.
#[derive(Debug, Clone, Default)]
pub struct AssetContract {
    config: ContractConfig,
}

impl AssetContract {
    /// Create a contract with the given configuration.
    pub fn new(config: ContractConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Private collection owned by `org`.
    pub fn collection_for(&self, org: &str) -> Result<String, AssetError> {
        collection_name(org, &self.config.collection_suffix)
    }

    fn verify_client_org(&self, client: &Identity) -> Result<(), AssetError> {
        match self.config.enforced_peer_org() {
            Some(peer_org) => invariant_client_org_matches_peer(client, peer_org),
            None => Ok(()),
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, AssetError> {
    serde_json::to_vec(value).map_err(|e| LedgerError::Serialization(e.to_string()).into())
}

fn decode_request(key: &str, bytes: &[u8]) -> Result<BuyRequest, AssetError> {
    serde_json::from_slice(bytes)
        .map_err(|e| AssetError::Deserialization(format!("buy request {key}: {e}")))
}

impl AssetContractApi for AssetContract {
    #[instrument(skip(self, ctx, params), fields(tx_id = %ctx.tx_id(), asset_id = %params.id))]
    fn issue_asset(
        &self,
        ctx: &TransactionContext<'_>,
        params: IssueAsset,
    ) -> Result<AssetView, AssetError> {
        if params.id.is_empty() {
            return Err(AssetError::InvalidRequest(
                "asset id must be a non-empty string".to_string(),
            ));
        }

        let owner = ctx.client_identity()?;
        let asset = Asset::issue(params, owner);
        ctx.assets().add_asset(&asset)?;

        info!(asset = %asset.key(), state = %asset.state(), "Asset issued");
        Ok(asset.view())
    }

    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id()))]
    fn read_asset(
        &self,
        ctx: &TransactionContext<'_>,
        owner: &str,
        asset_id: &str,
    ) -> Result<AssetView, AssetError> {
        ctx.assets()
            .get_asset(owner, asset_id)?
            .map(|asset| asset.view())
            .ok_or_else(|| AssetError::NotFound(format!("the asset {owner}:{asset_id} does not exist")))
    }

    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id()))]
    fn list_assets(&self, ctx: &TransactionContext<'_>) -> Result<Vec<AssetView>, AssetError> {
        let assets = ctx.assets().list_assets()?;
        debug!(count = assets.len(), "Listed assets");
        Ok(assets.iter().map(Asset::view).collect())
    }

    /// `asset_owner` is the owner component of the asset's composite key.
    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id()))]
    fn request_to_buy(
        &self,
        ctx: &TransactionContext<'_>,
        transient_key: &str,
        asset_owner: &str,
        asset_id: &str,
    ) -> Result<(), AssetError> {
        let assets = ctx.assets();
        let mut asset = assets.get_asset(asset_owner, asset_id)?.ok_or_else(|| {
            AssetError::NotFound(format!("the asset {asset_owner}:{asset_id} does not exist"))
        })?;

        if let Err(err) = invariant_transition_allowed(asset.state(), AssetState::Negotiation) {
            warn!(asset = %asset.key(), state = %asset.state(), "Asset is not available for buy requests");
            return Err(err);
        }

        let buyer = ctx.client_identity()?;

        let transient = ctx.stub().get_transient()?;
        let payload = transient.get(transient_key).ok_or_else(|| {
            AssetError::MissingTransientData(format!(
                "{transient_key} not found in the transient map input"
            ))
        })?;

        // Owner and buyer in the payload are untrusted and replaced.
        let mut request: BuyRequest = serde_json::from_slice(payload)
            .map_err(|e| AssetError::InvalidRequest(format!("failed to decode buy request: {e}")))?;
        request.buyer = buyer;
        request.owner = asset.owner.clone();
        request.validate()?;

        let collection = self.collection_for(&asset.owner.org)?;
        ctx.stub()
            .put_private_data(&collection, &asset.id, encode(&request)?)?;

        asset.transition_to(AssetState::Negotiation)?;
        assets.update_asset(&asset)?;

        info!(
            asset = %asset.key(),
            buyer = %request.buyer.id,
            collection = %collection,
            "Buy request recorded, asset in NEGOTIATION"
        );
        Ok(())
    }

    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id()))]
    fn get_requests(&self, ctx: &TransactionContext<'_>) -> Result<Vec<BuyRequest>, AssetError> {
        let identity = ctx.client_identity()?;
        self.verify_client_org(&identity)?;

        let collection = self.collection_for(&identity.org)?;
        let query = serde_json::json!({ "selector": { "owner": { "id": identity.id } } });

        let results = ctx
            .stub()
            .get_private_data_query_result(&collection, &query.to_string())?;
        debug!(collection = %collection, count = results.len(), "Pending buy requests");

        results
            .iter()
            .map(|r| decode_request(&r.key, &r.value))
            .collect()
    }

    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id()))]
    fn agree_to_sell(&self, ctx: &TransactionContext<'_>, asset_id: &str) -> Result<(), AssetError> {
        let seller = ctx.client_identity()?;
        self.verify_client_org(&seller)?;

        let collection = self.collection_for(&seller.org)?;
        let bytes = ctx
            .stub()
            .get_private_data(&collection, asset_id)?
            .ok_or_else(|| {
                AssetError::NotFound(format!("no pending buy request for asset {asset_id}"))
            })?;
        let request = decode_request(asset_id, &bytes)?;

        // Same-org owners share one slot per asset id.
        if request.owner.id != seller.id {
            warn!(asset_id, owner = %request.owner.id, "Pending request addressed to another owner");
            return Err(AssetError::NotFound(format!(
                "no pending buy request for asset {asset_id} addressed to {}",
                seller.id
            )));
        }

        let assets = ctx.assets();
        let mut asset = assets.get_asset(&seller.name, asset_id)?.ok_or_else(|| {
            AssetError::NotFound(format!("the asset {}:{asset_id} does not exist", seller.name))
        })?;

        if let Err(err) = asset.transition_to(AssetState::Signing) {
            warn!(asset = %asset.key(), state = %asset.state(), "Asset is not under negotiation");
            return Err(err);
        }
        asset.lender = request.buyer;
        asset.borrower = request.owner;
        assets.update_asset(&asset)?;

        info!(
            asset = %asset.key(),
            lender = %asset.lender.id,
            borrower = %asset.borrower.id,
            "Sale agreed, asset in SIGNING"
        );
        Ok(())
    }
}
