//! Identity Resolver Adapters
//!
//! Implements `IdentityResolver` for fixed identities and for identities
//! derived from an authenticated client certificate.

use crate::domain::{AssetError, Identity};
use crate::ports::IdentityResolver;
use std::collections::HashMap;

/// Certificate attribute carrying the external-chain address.
pub const ETH_ADDRESS_ATTRIBUTE: &str = "ethAdr";

/// Resolver returning one fixed identity.
#[derive(Clone, Debug)]
pub struct StaticIdentityResolver {
    identity: Identity,
}

impl StaticIdentityResolver {
    /// Create a resolver for `identity`.
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

impl IdentityResolver for StaticIdentityResolver {
    fn resolve(&self) -> Result<Identity, AssetError> {
        Ok(self.identity.clone())
    }
}

/// Client identity as presented by the runtime after certificate checks.
#[derive(Clone, Debug, Default)]
pub struct CertificateIdentity {
    /// Organisation (MSP) id.
    pub msp_id: String,
    /// Unique credential id.
    pub credential_id: String,
    /// Common name.
    pub display_name: String,
    /// Certificate attributes.
    pub attributes: HashMap<String, String>,
}

impl CertificateIdentity {
    /// Create a certificate identity without attributes.
    pub fn new(
        msp_id: impl Into<String>,
        credential_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            msp_id: msp_id.into(),
            credential_id: credential_id.into(),
            display_name: display_name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add a certificate attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl IdentityResolver for CertificateIdentity {
    fn resolve(&self) -> Result<Identity, AssetError> {
        if self.msp_id.is_empty() {
            return Err(AssetError::Authorization(
                "failed getting client's org id".to_string(),
            ));
        }
        if self.credential_id.is_empty() {
            return Err(AssetError::Authorization(
                "failed getting client's credential id".to_string(),
            ));
        }

        Ok(Identity {
            id: self.credential_id.clone(),
            org: self.msp_id.clone(),
            name: self.display_name.clone(),
            eth_adr: self
                .attributes
                .get(ETH_ADDRESS_ATTRIBUTE)
                .cloned()
                .unwrap_or_default(),
        })
    }
}
