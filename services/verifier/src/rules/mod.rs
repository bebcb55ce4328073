//! Matching rules checked against each claimed trade
//!
//! Each rule is a pure function over the reconstructed book and returns the
//! first violation it finds. The engine runs them as a pipeline:
//! resolve → price → quantity → priority.

pub mod resolve;
pub mod price;
pub mod quantity;
pub mod priority;

pub use resolve::{resolve_orders, Matched};
pub use price::check_price;
pub use quantity::check_quantity;
pub use priority::check_priority;
