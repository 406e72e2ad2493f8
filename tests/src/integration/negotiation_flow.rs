//! # Negotiation Flow
//!
//! Issue → RequestToBuy → GetRequests → AgreeToSell, one committed
//! transaction per step, checked against the committed public state.

#[cfg(test)]
mod tests {
    use crate::fixtures::{alice, asset, bob, offer, REQUEST_KEY};
    use asset_runtime::{AssetRuntime, RuntimeError};
    use ledger_api::TransientMap;
    use tradable_asset::{Asset, AssetContractApi, AssetError, AssetState, IdentityResolver};

    fn committed(runtime: &AssetRuntime, key: &str) -> Asset {
        Asset::deserialize(&runtime.ledger().public_state(key).unwrap()).unwrap()
    }

    fn issue_a1(runtime: &AssetRuntime) {
        runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.issue_asset(ctx, asset("A1")))
            .unwrap();
    }

    #[test]
    fn test_full_negotiation() {
        let runtime = AssetRuntime::default();
        issue_a1(&runtime);

        runtime
            .invoke(&bob(), offer("offer"), |c, ctx| {
                c.request_to_buy(ctx, REQUEST_KEY, "Alice", "A1")
            })
            .unwrap();
        assert_eq!(committed(&runtime, "Alice:A1").state(), AssetState::Negotiation);

        let requests = runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.get_requests(ctx))
            .unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].message, "offer");
        assert_eq!(requests[0].buyer, bob().resolve().unwrap());
        assert_eq!(requests[0].owner, alice().resolve().unwrap());

        runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.agree_to_sell(ctx, "A1"))
            .unwrap();

        let a1 = committed(&runtime, "Alice:A1");
        assert!(a1.is_signing());
        assert_eq!(a1.lender, bob().resolve().unwrap());
        assert_eq!(a1.borrower, alice().resolve().unwrap());
        assert_eq!(a1.owner.eth_adr, "0xa11ce");
        assert_eq!(runtime.ledger().height(), 3);
    }

    #[test]
    fn test_public_view_hides_state() {
        let runtime = AssetRuntime::default();
        issue_a1(&runtime);

        let view = runtime
            .invoke(&bob(), TransientMap::new(), |c, ctx| c.read_asset(ctx, "Alice", "A1"))
            .unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("currentState").is_none());
        assert_eq!(json["ID"], "A1");
        assert_eq!(json["owner"]["ethAdr"], "0xa11ce");
    }

    #[test]
    fn test_rejected_request_leaves_ledger_unchanged() {
        let runtime = AssetRuntime::default();
        issue_a1(&runtime);
        let before = runtime.ledger().public_state("Alice:A1");

        let err = runtime
            .invoke(&bob(), offer(""), |c, ctx| {
                c.request_to_buy(ctx, REQUEST_KEY, "Alice", "A1")
            })
            .unwrap_err();

        assert!(matches!(err, RuntimeError::Contract(AssetError::InvalidRequest(_))));
        assert_eq!(runtime.ledger().public_state("Alice:A1"), before);
        assert!(runtime
            .ledger()
            .private_data("OrgXPrivateCollection", "A1")
            .is_none());
        assert_eq!(runtime.ledger().height(), 1);
    }

    #[test]
    fn test_second_request_rejected_during_negotiation() {
        let runtime = AssetRuntime::default();
        issue_a1(&runtime);
        runtime
            .invoke(&bob(), offer("first"), |c, ctx| {
                c.request_to_buy(ctx, REQUEST_KEY, "Alice", "A1")
            })
            .unwrap();

        let err = runtime
            .invoke(&bob(), offer("second"), |c, ctx| {
                c.request_to_buy(ctx, REQUEST_KEY, "Alice", "A1")
            })
            .unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Contract(AssetError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_agree_without_request_fails() {
        let runtime = AssetRuntime::default();
        issue_a1(&runtime);

        let err = runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.agree_to_sell(ctx, "A1"))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Contract(AssetError::NotFound(_))));
        assert!(committed(&runtime, "Alice:A1").is_issued());
    }

    #[test]
    fn test_duplicate_issue_rejected() {
        let runtime = AssetRuntime::default();
        issue_a1(&runtime);

        let err = runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.issue_asset(ctx, asset("A1")))
            .unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Contract(AssetError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_same_id_under_different_owners() {
        let runtime = AssetRuntime::default();
        issue_a1(&runtime);
        runtime
            .invoke(&bob(), TransientMap::new(), |c, ctx| c.issue_asset(ctx, asset("A1")))
            .unwrap();

        let all = runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.list_assets(ctx))
            .unwrap();
        let mut keys: Vec<_> = all.iter().map(|v| v.key.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["Alice:A1", "Bob:A1"]);
    }
}
