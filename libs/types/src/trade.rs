//! Claimed trade executions
//!
//! A trade is the settlement layer's claim that a buy order and a sell
//! order were matched. Provenance fields (`timestamp`, `tx_hash`,
//! `block_number`) are carried through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, TradeId};
use crate::numeric::{Price, Quantity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    pub timestamp: DateTime<Utc>,
    pub tx_hash: String,
    pub block_number: u64,
}

impl Trade {
    /// Create a trade claim without on-chain provenance
    pub fn new(
        id: impl Into<TradeId>,
        buy_order_id: impl Into<OrderId>,
        sell_order_id: impl Into<OrderId>,
        price: Price,
        quantity: Quantity,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            buy_order_id: buy_order_id.into(),
            sell_order_id: sell_order_id.into(),
            price,
            quantity,
            timestamp,
            tx_hash: String::new(),
            block_number: 0,
        }
    }

    /// Attach the settlement transaction that recorded this trade
    pub fn with_receipt(mut self, tx_hash: impl Into<String>, block_number: u64) -> Self {
        self.tx_hash = tx_hash.into();
        self.block_number = block_number;
        self
    }
}
