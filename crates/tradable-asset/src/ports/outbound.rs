//! # Outbound Ports
//!
//! Collaborators the contract consumes but does not implement.

use crate::domain::{AssetError, Identity};

/// Resolves the identity of the invoking client - outbound port.
///
/// Certificate validation happens before the contract runs; the resolver
/// only maps an authenticated client to an [`Identity`].
pub trait IdentityResolver: Send + Sync {
    /// Identity of the caller.
    fn resolve(&self) -> Result<Identity, AssetError>;
}
