//! # ledger-api
//!
//! Object semantics over an opaque get/put/delete ledger.
//!
//! ## Role in System
//!
//! - **Keyed Entity Store**: `StateList` adds, reads, updates and deletes
//!   typed entities addressed by composite keys
//! - **Ledger Port**: `ChaincodeStub` is the only way any crate touches the
//!   ledger (public state, private collections, transient data)
//! - **In-Memory Ledger**: transactional adapter used by tests and the runtime
//!
//! ## Module Structure
//!
//! ```text
//! ledger-api/
//! ├── domain/          # Composite keys, LedgerError
//! ├── ports/           # ChaincodeStub, QueryResult
//! ├── adapters/        # InMemoryLedger, TransactionStub
//! └── state.rs         # StateEntity, StateList
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod state;

pub use adapters::{InMemoryLedger, TransactionStub};
pub use domain::{make_key, split_key, LedgerError, KEY_SEPARATOR};
pub use ports::{ChaincodeStub, QueryResult, TransientMap};
pub use state::{DeserializeFn, StateEntity, StateList};
