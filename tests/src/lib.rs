//! # Tradable Asset Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── negotiation_flow.rs   # Issue → RequestToBuy → AgreeToSell
//!     ├── privacy.rs            # Private collection isolation
//!     └── concurrency.rs        # MVCC conflicts between racing invocations
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p asset-tests
//! cargo test -p asset-tests integration::privacy
//! ```

pub mod fixtures;
pub mod integration;
