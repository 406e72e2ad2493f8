//! # Domain Value Objects
//!
//! Immutable value types for the asset negotiation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset lifecycle state machine.
///
/// Persisted as the integer discriminant (1-5). Any other value is
/// rejected during deserialization rather than mapped to a default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum AssetState {
    /// Issued and open for buy requests.
    Issued = 1,
    /// A buy request is pending with the owner.
    Negotiation = 2,
    /// Owner agreed; awaiting both signatures.
    Signing = 3,
    /// Signed by both parties.
    Active = 4,
    /// Redeemed (terminal).
    Redeemed = 5,
}

impl AssetState {
    /// All states in lifecycle order.
    pub const ALL: [AssetState; 5] = [
        Self::Issued,
        Self::Negotiation,
        Self::Signing,
        Self::Active,
        Self::Redeemed,
    ];

    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: AssetState) -> bool {
        matches!(
            (self, next),
            (Self::Issued, Self::Negotiation)
                | (Self::Negotiation, Self::Signing)
                | (Self::Signing, Self::Active)
                | (Self::Active, Self::Redeemed)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Redeemed)
    }

    /// Upper-case name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Issued => "ISSUED",
            Self::Negotiation => "NEGOTIATION",
            Self::Signing => "SIGNING",
            Self::Active => "ACTIVE",
            Self::Redeemed => "REDEEMED",
        }
    }
}

impl fmt::Display for AssetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AssetState> for u8 {
    fn from(state: AssetState) -> u8 {
        state as u8
    }
}

impl TryFrom<u8> for AssetState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Issued),
            2 => Ok(Self::Negotiation),
            3 => Ok(Self::Signing),
            4 => Ok(Self::Active),
            5 => Ok(Self::Redeemed),
            other => Err(format!("unknown asset state {other}")),
        }
    }
}

/// Party identity: caller, owner, lender or borrower.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Credential identifier.
    pub id: String,
    /// Organisation (MSP) identifier.
    pub org: String,
    /// Display name.
    pub name: String,
    /// Address on the external settlement chain.
    #[serde(rename = "ethAdr")]
    pub eth_adr: String,
}

impl Identity {
    /// Create an identity.
    pub fn new(
        id: impl Into<String>,
        org: impl Into<String>,
        name: impl Into<String>,
        eth_adr: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            org: org.into(),
            name: name.into(),
            eth_adr: eth_adr.into(),
        }
    }
}
