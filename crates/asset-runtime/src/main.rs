//! # Asset Runtime
//!
//! Runs one full negotiation on a fresh in-memory ledger and prints the
//! resulting public asset:
//!
//! 1. Alice (OrgX) issues asset `A1`
//! 2. Bob (OrgY) requests to buy it with a private offer
//! 3. Alice lists her pending requests and agrees to sell

use anyhow::{Context, Result};
use asset_runtime::{init_logging, AssetRuntime, RuntimeConfig};
use ledger_api::TransientMap;
use tracing::info;
use tradable_asset::{AssetContractApi, CertificateIdentity, IssueAsset};

const REQUEST_KEY: &str = "buy_request";

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env().context("Failed to load configuration")?;
    init_logging(&config)?;

    info!("Tradable asset runtime v{}", tradable_asset::VERSION);

    let runtime = AssetRuntime::new(config.contract.clone());

    let alice = CertificateIdentity::new("OrgX", "x509::CN=alice,OU=client", "Alice")
        .with_attribute("ethAdr", "0x00000000000000000000000000000000000a11ce");
    let bob = CertificateIdentity::new("OrgY", "x509::CN=bob,OU=client", "Bob")
        .with_attribute("ethAdr", "0x0000000000000000000000000000000000000b0b");

    let issued = runtime
        .invoke(&alice, TransientMap::new(), |contract, ctx| {
            contract.issue_asset(
                ctx,
                IssueAsset {
                    id: "A1".to_string(),
                    color: "blue".to_string(),
                    size: 5,
                    appraised_value: 300,
                },
            )
        })
        .context("IssueAsset failed")?;
    info!(key = %issued.key, "Issued");

    let mut transient = TransientMap::new();
    transient.insert(
        REQUEST_KEY.to_string(),
        serde_json::to_vec(&serde_json::json!({ "message": "offer" }))?,
    );
    runtime
        .invoke(&bob, transient, |contract, ctx| {
            contract.request_to_buy(ctx, REQUEST_KEY, &issued.owner.name, &issued.id)
        })
        .context("RequestToBuy failed")?;

    let requests = runtime
        .invoke(&alice, TransientMap::new(), |contract, ctx| {
            contract.get_requests(ctx)
        })
        .context("GetRequests failed")?;
    for request in &requests {
        info!(buyer = %request.buyer.id, message = %request.message, "Pending request");
    }

    runtime
        .invoke(&alice, TransientMap::new(), |contract, ctx| {
            contract.agree_to_sell(ctx, &issued.id)
        })
        .context("AgreeToSell failed")?;

    let asset = runtime
        .invoke(&bob, TransientMap::new(), |contract, ctx| {
            contract.read_asset(ctx, &issued.owner.name, &issued.id)
        })
        .context("ReadAsset failed")?;

    println!("{}", serde_json::to_string_pretty(&asset)?);
    Ok(())
}
