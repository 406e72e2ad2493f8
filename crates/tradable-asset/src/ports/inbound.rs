//! # Inbound Ports
//!
//! API trait defining what the asset contract can do.

use crate::domain::{AssetError, AssetView, BuyRequest, IssueAsset};
use crate::service::TransactionContext;

/// Asset contract API - inbound port.
///
/// Every call runs inside one ledger transaction described by the
/// context. A returned error means the transaction must not be committed.
pub trait AssetContractApi {
    /// Issue a new asset owned by the caller.
    fn issue_asset(
        &self,
        ctx: &TransactionContext<'_>,
        params: IssueAsset,
    ) -> Result<AssetView, AssetError>;

    /// Read one asset by owner name and id.
    fn read_asset(
        &self,
        ctx: &TransactionContext<'_>,
        owner: &str,
        asset_id: &str,
    ) -> Result<AssetView, AssetError>;

    /// List every asset in the public state.
    fn list_assets(&self, ctx: &TransactionContext<'_>) -> Result<Vec<AssetView>, AssetError>;

    /// Propose to buy an issued asset.
    ///
    /// The proposal is read from the transient map under `transient_key`.
    fn request_to_buy(
        &self,
        ctx: &TransactionContext<'_>,
        transient_key: &str,
        asset_owner: &str,
        asset_id: &str,
    ) -> Result<(), AssetError>;

    /// Pending proposals addressed to the caller.
    fn get_requests(&self, ctx: &TransactionContext<'_>) -> Result<Vec<BuyRequest>, AssetError>;

    /// Accept the pending proposal for one of the caller's assets.
    fn agree_to_sell(&self, ctx: &TransactionContext<'_>, asset_id: &str)
        -> Result<(), AssetError>;
}
