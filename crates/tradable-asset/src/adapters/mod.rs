//! # Adapters Module
//!
//! Identity resolvers and the typed asset list.

pub mod asset_list;
pub mod identity;

pub use asset_list::AssetList;
pub use identity::{CertificateIdentity, StaticIdentityResolver};
