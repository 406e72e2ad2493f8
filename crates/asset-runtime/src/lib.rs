//! # Asset Runtime
//!
//! Hosts the asset contract on an in-memory ledger.
//!
//! Every [`AssetRuntime::invoke`] opens one transaction, runs one contract
//! operation inside it and commits only when the operation succeeds. A
//! failed operation leaves the ledger untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod logging;

pub use config::RuntimeConfig;
pub use logging::init_logging;

use ledger_api::{ChaincodeStub, InMemoryLedger, LedgerError, TransientMap};
use thiserror::Error;
use tracing::{debug, warn};
use tradable_asset::{
    AssetContract, AssetError, ContractConfig, IdentityResolver, TransactionContext,
};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The contract rejected the invocation.
    #[error("Contract error: {0}")]
    Contract(#[from] AssetError),

    /// The transaction could not be committed.
    #[error("Commit failed: {0}")]
    Commit(#[from] LedgerError),

    /// Subscriber setup failed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Contract plus the ledger it runs on.
pub struct AssetRuntime {
    ledger: InMemoryLedger,
    contract: AssetContract,
}

impl AssetRuntime {
    /// Create a runtime over an empty ledger.
    pub fn new(config: ContractConfig) -> Self {
        Self {
            ledger: InMemoryLedger::new(),
            contract: AssetContract::new(config),
        }
    }

    /// Underlying ledger.
    pub fn ledger(&self) -> &InMemoryLedger {
        &self.ledger
    }

    /// Hosted contract.
    pub fn contract(&self) -> &AssetContract {
        &self.contract
    }

    /// Run `op` as `caller` in a fresh transaction and commit on success.
    pub fn invoke<T>(
        &self,
        caller: &dyn IdentityResolver,
        transient: TransientMap,
        op: impl FnOnce(&AssetContract, &TransactionContext<'_>) -> Result<T, AssetError>,
    ) -> Result<T, RuntimeError> {
        let tx = self.ledger.begin_with_transient(transient);

        let output = match op(&self.contract, &TransactionContext::new(&tx, caller)) {
            Ok(output) => output,
            Err(err) => {
                warn!(tx_id = %tx.tx_id(), error = %err, "Invocation rejected");
                return Err(err.into());
            }
        };

        let height = tx.commit()?;
        debug!(height, "Invocation committed");
        Ok(output)
    }
}

impl Default for AssetRuntime {
    fn default() -> Self {
        Self::new(ContractConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradable_asset::{AssetContractApi, Identity, IssueAsset, StaticIdentityResolver};

    fn alice() -> StaticIdentityResolver {
        StaticIdentityResolver::new(Identity::new("x509::alice", "OrgX", "Alice", ""))
    }

    fn issue_params(id: &str) -> IssueAsset {
        IssueAsset {
            id: id.to_string(),
            color: "red".to_string(),
            size: 1,
            appraised_value: 10,
        }
    }

    #[test]
    fn test_invoke_commits_on_success() {
        let runtime = AssetRuntime::default();
        runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| {
                c.issue_asset(ctx, issue_params("A1"))
            })
            .unwrap();

        assert_eq!(runtime.ledger().height(), 1);
        assert!(runtime.ledger().public_state("Alice:A1").is_some());
    }

    #[test]
    fn test_invoke_discards_on_error() {
        let runtime = AssetRuntime::default();
        let err = runtime
            .invoke(&alice(), TransientMap::new(), |c, ctx| c.agree_to_sell(ctx, "A1"))
            .unwrap_err();

        assert!(matches!(err, RuntimeError::Contract(AssetError::NotFound(_))));
        assert_eq!(runtime.ledger().height(), 0);
    }
}
