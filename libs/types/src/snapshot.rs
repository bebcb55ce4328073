//! Point-in-time orderbook snapshots
//!
//! `merkle_root` and `prev_hash` chain snapshots together; they are
//! produced by the publisher and carried opaquely by everything else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ids::{MarketId, OrderId};
use crate::order::Order;

/// Hash used for an empty merkle root and as the first `prev_hash`
pub const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderbookSnapshot {
    /// Monotonic snapshot counter; zero means absent
    pub sequence_number: u64,
    pub timestamp: DateTime<Utc>,
    pub market_id: MarketId,
    pub orders: Vec<Order>,
    pub merkle_root: String,
    pub prev_hash: String,
}

impl OrderbookSnapshot {
    /// Set of every order id present, regardless of side
    pub fn order_ids(&self) -> HashSet<&OrderId> {
        self.orders.iter().map(|o| &o.id).collect()
    }
}
