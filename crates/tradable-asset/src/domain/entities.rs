//! # Domain Entities
//!
//! `Asset` is the domain object. Its lifecycle state is private: it is
//! never part of [`AssetView`] (what callers see) and only crosses the
//! persistence boundary inside [`AssetRecord`] as `currentState`.

use super::errors::AssetError;
use super::value_objects::{AssetState, Identity};
use ledger_api::{make_key, LedgerError, StateEntity};
use serde::{Deserialize, Serialize};

/// Class tag of asset records.
pub const ASSET_CLASS: &str = "Asset";

/// Tradable asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    /// Asset identifier, unique per owner name.
    pub id: String,
    /// Colour.
    pub color: String,
    /// Size.
    pub size: u64,
    /// Current owner.
    pub owner: Identity,
    /// Appraised value.
    pub appraised_value: u64,
    /// Lender, set when the owner agrees to sell.
    pub lender: Identity,
    /// Lender has signed.
    pub l_signature: bool,
    /// Borrower, set when the owner agrees to sell.
    pub borrower: Identity,
    /// Borrower has signed.
    pub b_signature: bool,
    state: AssetState,
}

impl Asset {
    /// Create an asset in `ISSUED`.
    pub fn issue(params: IssueAsset, owner: Identity) -> Self {
        Self {
            id: params.id,
            color: params.color,
            size: params.size,
            owner,
            appraised_value: params.appraised_value,
            lender: Identity::default(),
            l_signature: false,
            borrower: Identity::default(),
            b_signature: false,
            state: AssetState::Issued,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AssetState {
        self.state
    }

    /// Set state to issued.
    pub fn set_issued(&mut self) {
        self.state = AssetState::Issued;
    }

    /// Set state to negotiation.
    pub fn set_negotiation(&mut self) {
        self.state = AssetState::Negotiation;
    }

    /// Set state to signing.
    pub fn set_signing(&mut self) {
        self.state = AssetState::Signing;
    }

    /// Set state to active.
    pub fn set_active(&mut self) {
        self.state = AssetState::Active;
    }

    /// Set state to redeemed.
    pub fn set_redeemed(&mut self) {
        self.state = AssetState::Redeemed;
    }

    /// True if issued.
    pub fn is_issued(&self) -> bool {
        self.state == AssetState::Issued
    }

    /// True if in negotiation.
    pub fn is_negotiation(&self) -> bool {
        self.state == AssetState::Negotiation
    }

    /// True if awaiting signatures.
    pub fn is_signing(&self) -> bool {
        self.state == AssetState::Signing
    }

    /// True if active.
    pub fn is_active(&self) -> bool {
        self.state == AssetState::Active
    }

    /// True if redeemed.
    pub fn is_redeemed(&self) -> bool {
        self.state == AssetState::Redeemed
    }

    /// Move along the transition table.
    pub fn transition_to(&mut self, next: AssetState) -> Result<(), AssetError> {
        if !self.state.can_transition_to(next) {
            return Err(AssetError::InvalidState {
                from: self.state,
                to: next,
            });
        }
        match next {
            AssetState::Issued => self.set_issued(),
            AssetState::Negotiation => self.set_negotiation(),
            AssetState::Signing => self.set_signing(),
            AssetState::Active => self.set_active(),
            AssetState::Redeemed => self.set_redeemed(),
        }
        Ok(())
    }

    /// Public projection without the lifecycle state.
    pub fn view(&self) -> AssetView {
        AssetView {
            class: ASSET_CLASS.to_string(),
            key: self.key(),
            id: self.id.clone(),
            color: self.color.clone(),
            size: self.size,
            owner: self.owner.clone(),
            appraised_value: self.appraised_value,
            lender: self.lender.clone(),
            l_signature: self.l_signature,
            borrower: self.borrower.clone(),
            b_signature: self.b_signature,
        }
    }

    /// Storage encoding including `currentState`.
    pub fn to_record(&self) -> AssetRecord {
        AssetRecord {
            view: self.view(),
            state: self.state,
        }
    }

    /// Rebuild from a storage record. Records of another class are rejected.
    pub fn from_record(record: AssetRecord) -> Result<Self, String> {
        if record.view.class != ASSET_CLASS {
            return Err(format!("expected class {ASSET_CLASS}, got {}", record.view.class));
        }
        let v = record.view;
        Ok(Self {
            id: v.id,
            color: v.color,
            size: v.size,
            owner: v.owner,
            appraised_value: v.appraised_value,
            lender: v.lender,
            l_signature: v.l_signature,
            borrower: v.borrower,
            b_signature: v.b_signature,
            state: record.state,
        })
    }

    /// Deserialize hook registered with the entity store.
    pub fn deserialize(bytes: &[u8]) -> serde_json::Result<Self> {
        let record: AssetRecord = serde_json::from_slice(bytes)?;
        Self::from_record(record).map_err(serde::de::Error::custom)
    }
}

impl StateEntity for Asset {
    fn class(&self) -> &'static str {
        ASSET_CLASS
    }

    fn split_key(&self) -> Vec<String> {
        vec![self.owner.name.clone(), self.id.clone()]
    }

    fn serialize(&self) -> Result<Vec<u8>, LedgerError> {
        serde_json::to_vec(&self.to_record()).map_err(|e| LedgerError::Serialization(e.to_string()))
    }

    fn key(&self) -> String {
        make_key(&[self.owner.name.as_str(), self.id.as_str()])
    }
}

/// Public projection of an asset returned to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetView {
    /// Class tag.
    pub class: String,
    /// Composite key (owner name, asset id).
    pub key: String,
    /// Asset identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Colour.
    pub color: String,
    /// Size.
    pub size: u64,
    /// Current owner.
    pub owner: Identity,
    /// Appraised value.
    pub appraised_value: u64,
    /// Lender.
    pub lender: Identity,
    /// Lender has signed.
    #[serde(rename = "lSignature")]
    pub l_signature: bool,
    /// Borrower.
    pub borrower: Identity,
    /// Borrower has signed.
    #[serde(rename = "bSignature")]
    pub b_signature: bool,
}

/// Persisted asset: the public projection plus `currentState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Public fields.
    #[serde(flatten)]
    pub view: AssetView,
    /// Lifecycle state.
    #[serde(rename = "currentState")]
    pub state: AssetState,
}

/// Parameters for issuing an asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueAsset {
    /// Asset identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Colour.
    pub color: String,
    /// Size.
    pub size: u64,
    /// Appraised value.
    pub appraised_value: u64,
}

/// Buy proposal kept in the owner's private collection, keyed by asset id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyRequest {
    /// Asset owner at proposal time.
    #[serde(default)]
    pub owner: Identity,
    /// Prospective buyer.
    #[serde(default)]
    pub buyer: Identity,
    /// Free-text offer; must be non-empty.
    #[serde(default)]
    pub message: String,
}

impl BuyRequest {
    /// Reject empty messages.
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.message.is_empty() {
            return Err(AssetError::InvalidRequest(
                "message field must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}
