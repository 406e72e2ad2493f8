//! # Adapters Module
//!
//! `ChaincodeStub` implementations.

pub mod memory_ledger;
pub mod selector;

pub use memory_ledger::{InMemoryLedger, TransactionStub};
pub use selector::Selector;
