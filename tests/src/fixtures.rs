//! Shared parties and payloads.

use ledger_api::TransientMap;
use tradable_asset::{CertificateIdentity, IssueAsset};

/// Transient map key carrying the buy request.
pub const REQUEST_KEY: &str = "buy_request";

/// Alice, client of OrgX.
pub fn alice() -> CertificateIdentity {
    CertificateIdentity::new("OrgX", "x509::CN=alice", "Alice").with_attribute("ethAdr", "0xa11ce")
}

/// Carol, another client of OrgX.
pub fn carol() -> CertificateIdentity {
    CertificateIdentity::new("OrgX", "x509::CN=carol", "Carol")
}

/// Bob, client of OrgY.
pub fn bob() -> CertificateIdentity {
    CertificateIdentity::new("OrgY", "x509::CN=bob", "Bob").with_attribute("ethAdr", "0xb0b")
}

/// Dave, client of OrgZ.
pub fn dave() -> CertificateIdentity {
    CertificateIdentity::new("OrgZ", "x509::CN=dave", "Dave")
}

/// Issue parameters for a plain asset.
pub fn asset(id: &str) -> IssueAsset {
    IssueAsset {
        id: id.to_string(),
        color: "blue".to_string(),
        size: 5,
        appraised_value: 300,
    }
}

/// Transient map holding a buy request with `message`.
pub fn offer(message: &str) -> TransientMap {
    let mut transient = TransientMap::new();
    transient.insert(
        REQUEST_KEY.to_string(),
        serde_json::json!({ "message": message })
            .to_string()
            .into_bytes(),
    );
    transient
}
