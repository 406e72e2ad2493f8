//! # Tradable Asset
//!
//! Two-organisation negotiation over an asset recorded on a shared ledger.
//!
//! ## Lifecycle
//!
//! ```text
//! ISSUED ──RequestToBuy──→ NEGOTIATION ──AgreeToSell──→ SIGNING ──→ ACTIVE ──→ REDEEMED
//! ```
//!
//! Only the first two edges have operations today. `ACTIVE` and `REDEEMED`
//! are part of the closed transition table so later operations cannot
//! introduce an illegal edge.
//!
//! ## Privacy
//!
//! Buy requests travel in the transient map and are written only to the
//! asset owner's private collection. The public ledger sees the state
//! transition, never the proposal.
//!
//! ## Module Structure
//!
//! ```text
//! tradable-asset/
//! ├── domain/          # Asset, AssetState, Identity, BuyRequest, errors
//! ├── ports/           # AssetContractApi, IdentityResolver
//! ├── adapters/        # AssetList, identity resolvers
//! ├── config.rs        # ContractConfig
//! └── service.rs       # AssetContract, TransactionContext
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{AssetList, CertificateIdentity, StaticIdentityResolver};
pub use config::{ConfigError, ContractConfig};
pub use domain::{
    collection_name, Asset, AssetError, AssetRecord, AssetState, AssetView, BuyRequest, Identity,
    IssueAsset, ASSET_CLASS,
};
pub use ports::{AssetContractApi, IdentityResolver};
pub use service::{AssetContract, TransactionContext};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
