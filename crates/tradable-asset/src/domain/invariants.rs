//! # Domain Invariants
//!
//! Business rules checked by the contract before any write.

use super::errors::AssetError;
use super::value_objects::{AssetState, Identity};

/// Default suffix appended to an organisation id to name its private collection.
pub const DEFAULT_COLLECTION_SUFFIX: &str = "PrivateCollection";

/// Private collection owned by `org`.
pub fn collection_name(org: &str, suffix: &str) -> Result<String, AssetError> {
    if org.is_empty() {
        return Err(AssetError::Authorization(
            "cannot infer private collection for an empty organisation".to_string(),
        ));
    }
    Ok(format!("{org}{suffix}"))
}

/// Invariant: the asset may move from `current` to `next`.
pub fn invariant_transition_allowed(
    current: AssetState,
    next: AssetState,
) -> Result<(), AssetError> {
    if !current.can_transition_to(next) {
        return Err(AssetError::InvalidState {
            from: current,
            to: next,
        });
    }
    Ok(())
}

/// Invariant: a client may only touch its own organisation's implicit
/// private data on a peer of that organisation.
pub fn invariant_client_org_matches_peer(
    client: &Identity,
    peer_org: &str,
) -> Result<(), AssetError> {
    if client.org != peer_org {
        return Err(AssetError::Authorization(format!(
            "client from org {} is not authorized to read or write private data from an org {} peer",
            client.org, peer_org
        )));
    }
    Ok(())
}
