//! Types library for orderbook settlement verification
//!
//! Wire-level definitions shared by the verifier, the task performer, the
//! snapshot publisher and the task submitter. Every type here is plain data:
//! no type in this crate knows how trades are checked.
//!
//! # Modules
//! - `ids`: Opaque identifiers (OrderId, TradeId, MarketId)
//! - `numeric`: Arbitrary-precision integer amounts (Price, Quantity)
//! - `order`: Resting limit orders and side tags
//! - `trade`: Claimed trade executions
//! - `snapshot`: Point-in-time orderbook snapshots
//! - `task`: Verification task payload
//! - `errors`: Structural error taxonomy

pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod snapshot;
pub mod task;
pub mod errors;
