//! # Ports Module
//!
//! Outbound port to the ledger runtime.

pub mod outbound;

pub use outbound::*;
