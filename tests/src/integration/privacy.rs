//! # Private Collection Isolation
//!
//! Buy requests must land in the asset owner's collection only and be
//! readable only by that owner.

#[cfg(test)]
mod tests {
    use crate::fixtures::{alice, asset, bob, carol, dave, offer, REQUEST_KEY};
    use asset_runtime::{AssetRuntime, RuntimeError};
    use ledger_api::TransientMap;
    use tradable_asset::{
        Asset, AssetContractApi, AssetError, ContractConfig, Identity, IdentityResolver,
    };

    fn negotiating(runtime: &AssetRuntime) {
        runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.issue_asset(ctx, asset("A1")))
            .unwrap();
        runtime
            .invoke(&bob(), offer("private terms"), |c, ctx| {
                c.request_to_buy(ctx, REQUEST_KEY, "Alice", "A1")
            })
            .unwrap();
    }

    #[test]
    fn test_request_only_in_owner_collection() {
        let runtime = AssetRuntime::default();
        negotiating(&runtime);

        let ledger = runtime.ledger();
        assert!(ledger.private_data("OrgXPrivateCollection", "A1").is_some());
        assert!(ledger.private_data("OrgYPrivateCollection", "A1").is_none());

        let public = String::from_utf8(ledger.public_state("Alice:A1").unwrap()).unwrap();
        assert!(!public.contains("private terms"));
    }

    #[test]
    fn test_buyer_sees_no_requests() {
        let runtime = AssetRuntime::default();
        negotiating(&runtime);

        let requests = runtime
            .invoke(&bob(), TransientMap::new(), |c, ctx| c.get_requests(ctx))
            .unwrap();
        assert!(requests.is_empty());
    }

    #[test]
    fn test_colleague_sees_no_requests() {
        let runtime = AssetRuntime::default();
        negotiating(&runtime);

        let requests = runtime
            .invoke(&carol(), TransientMap::new(), |c, ctx| c.get_requests(ctx))
            .unwrap();
        assert!(requests.is_empty());
    }

    #[test]
    fn test_no_requests_for_fresh_owner() {
        let runtime = AssetRuntime::default();
        let requests = runtime
            .invoke(&dave(), TransientMap::new(), |c, ctx| c.get_requests(ctx))
            .unwrap();
        assert!(requests.is_empty());
    }

    #[test]
    fn test_seller_cannot_accept_colleagues_request() {
        let runtime = AssetRuntime::default();
        for owner in [alice(), carol()] {
            runtime
                .invoke(&owner, TransientMap::new(), |c, ctx| c.issue_asset(ctx, asset("A1")))
                .unwrap();
        }
        runtime
            .invoke(&bob(), offer("for carol"), |c, ctx| {
                c.request_to_buy(ctx, REQUEST_KEY, "Carol", "A1")
            })
            .unwrap();
        // Shares the OrgX slot for A1 and replaces Carol's pending request.
        runtime
            .invoke(&dave(), offer("for alice"), |c, ctx| {
                c.request_to_buy(ctx, REQUEST_KEY, "Alice", "A1")
            })
            .unwrap();

        let err = runtime
            .invoke(&carol(), TransientMap::new(), |c, ctx| c.agree_to_sell(ctx, "A1"))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Contract(AssetError::NotFound(_))));

        let carols = Asset::deserialize(&runtime.ledger().public_state("Carol:A1").unwrap()).unwrap();
        assert!(carols.is_negotiation());
        assert_ne!(carols.borrower, alice().resolve().unwrap());
        assert_eq!(carols.lender, Identity::default());

        runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.agree_to_sell(ctx, "A1"))
            .unwrap();
        let alices = Asset::deserialize(&runtime.ledger().public_state("Alice:A1").unwrap()).unwrap();
        assert!(alices.is_signing());
        assert_eq!(alices.lender, dave().resolve().unwrap());
    }

    #[test]
    fn test_foreign_org_rejected_on_enforcing_peer() {
        let runtime = AssetRuntime::new(ContractConfig::default().with_peer_org("OrgX"));
        negotiating(&runtime);

        let err = runtime
            .invoke(&bob(), TransientMap::new(), |c, ctx| c.agree_to_sell(ctx, "A1"))
            .unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Contract(AssetError::Authorization(_))
        ));

        runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.agree_to_sell(ctx, "A1"))
            .unwrap();
    }
}
