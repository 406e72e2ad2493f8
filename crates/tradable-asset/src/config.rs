//! Contract configuration from environment variables.

use crate::domain::DEFAULT_COLLECTION_SUFFIX;
use std::env;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variable is set to an unparseable value.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Environment variable
        var: String,
        /// Rejected value
        value: String,
    },
}

/// Configuration for the asset contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    /// Suffix appended to an org id to name its private collection.
    pub collection_suffix: String,

    /// Organisation of the peer executing the contract, if known.
    pub peer_org: Option<String>,

    /// Reject private-data access by clients of another organisation.
    /// Only effective when `peer_org` is set.
    pub verify_client_org: bool,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            collection_suffix: DEFAULT_COLLECTION_SUFFIX.to_string(),
            peer_org: None,
            verify_client_org: true,
        }
    }
}

impl ContractConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TA_COLLECTION_SUFFIX`: collection suffix (default: PrivateCollection)
    /// - `CORE_PEER_LOCALMSPID`: organisation of the local peer (default: unset)
    /// - `TA_VERIFY_CLIENT_ORG`: enforce client/peer org match (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            collection_suffix: env::var("TA_COLLECTION_SUFFIX")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.collection_suffix),

            peer_org: env::var("CORE_PEER_LOCALMSPID")
                .ok()
                .filter(|s| !s.is_empty()),

            verify_client_org: match env::var("TA_VERIFY_CLIENT_ORG") {
                Ok(value) => parse_bool("TA_VERIFY_CLIENT_ORG", &value)?,
                Err(_) => defaults.verify_client_org,
            },
        })
    }

    /// Builder: set the peer organisation.
    pub fn with_peer_org(mut self, org: impl Into<String>) -> Self {
        self.peer_org = Some(org.into());
        self
    }

    /// Peer org to check against, if verification is on.
    pub fn enforced_peer_org(&self) -> Option<&str> {
        if self.verify_client_org {
            self.peer_org.as_deref()
        } else {
            None
        }
    }
}

/// Parse a boolean environment value.
pub fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
