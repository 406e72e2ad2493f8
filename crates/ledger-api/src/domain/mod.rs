//! # Domain Module
//!
//! Composite keys and ledger errors.

pub mod errors;
pub mod key;

pub use errors::*;
pub use key::*;
