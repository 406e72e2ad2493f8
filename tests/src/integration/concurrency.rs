//! # Concurrent Invocations
//!
//! Two buyers racing on one asset: at most one request may commit.

#[cfg(test)]
mod tests {
    use crate::fixtures::{alice, asset, bob, dave, offer, REQUEST_KEY};
    use asset_runtime::AssetRuntime;
    use ledger_api::{LedgerError, TransientMap};
    use parking_lot::Mutex;
    use std::thread;
    use tradable_asset::{
        Asset, AssetContractApi, AssetError, BuyRequest, IdentityResolver, TransactionContext,
    };

    fn issued() -> AssetRuntime {
        let runtime = AssetRuntime::default();
        runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.issue_asset(ctx, asset("A1")))
            .unwrap();
        runtime
    }

    #[test]
    fn test_interleaved_requests_conflict() {
        let runtime = issued();
        let ledger = runtime.ledger();
        let contract = runtime.contract();
        let (bob, dave) = (bob(), dave());

        let tx_bob = ledger.begin_with_transient(offer("from bob"));
        let tx_dave = ledger.begin_with_transient(offer("from dave"));

        // Both read ISSUED before either commits.
        contract
            .request_to_buy(&TransactionContext::new(&tx_bob, &bob), REQUEST_KEY, "Alice", "A1")
            .unwrap();
        contract
            .request_to_buy(&TransactionContext::new(&tx_dave, &dave), REQUEST_KEY, "Alice", "A1")
            .unwrap();

        tx_bob.commit().unwrap();
        let err = tx_dave.commit().unwrap_err();
        assert!(matches!(err, LedgerError::MvccConflict { .. }));

        let bytes = ledger.private_data("OrgXPrivateCollection", "A1").unwrap();
        let request: BuyRequest = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(request.buyer, bob.resolve().unwrap());
        assert_eq!(request.message, "from bob");
    }

    #[test]
    fn test_threaded_buyers_single_winner() {
        let runtime = issued();
        let outcomes = Mutex::new(Vec::new());

        thread::scope(|s| {
            for buyer in [bob(), dave()] {
                let runtime = &runtime;
                let outcomes = &outcomes;
                s.spawn(move || {
                    let result = runtime.invoke(&buyer, offer("race"), |c, ctx| {
                        c.request_to_buy(ctx, REQUEST_KEY, "Alice", "A1")
                    });
                    outcomes.lock().push(result);
                });
            }
        });

        let outcomes = outcomes.into_inner();
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        for failure in outcomes.iter().filter_map(|r| r.as_ref().err()) {
            assert!(matches!(
                failure,
                asset_runtime::RuntimeError::Commit(LedgerError::MvccConflict { .. })
                    | asset_runtime::RuntimeError::Contract(AssetError::InvalidState { .. })
            ));
        }

        let a1 = Asset::deserialize(&runtime.ledger().public_state("Alice:A1").unwrap()).unwrap();
        assert!(a1.is_negotiation());
    }
}
