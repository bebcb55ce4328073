//! Orderbook Verification Engine
//!
//! Checks whether trades claimed by a settlement layer are consistent with
//! a published orderbook snapshot under price-time priority.
//!
//! **Key Invariants:**
//! - Deterministic: identical inputs always yield identical verdicts
//! - `failed_trades` follows the input order of trades
//! - Rule violations are data; only malformed snapshots are errors
//! - Exact integer arithmetic for every price and quantity comparison

pub mod book;
pub mod rules;
pub mod engine;
pub mod failure;
pub mod result;

pub use book::OrderbookState;
pub use engine::{verify, OrderbookVerifier};
pub use failure::{Stage, TradeFailure};
pub use result::VerificationResult;
