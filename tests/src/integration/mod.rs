//! Cross-crate flows run through the asset runtime.

pub mod concurrency;
pub mod negotiation_flow;
pub mod privacy;
