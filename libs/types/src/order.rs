//! Resting limit order types
//!
//! An order's side travels as a raw tag so that a snapshot carrying an
//! unknown side still parses; rejecting it is the orderbook builder's job
//! and surfaces as a structural error rather than a parse failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Wire tag for this side
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side tag exactly as published in the snapshot
///
/// Only the lowercase tags `"buy"` and `"sell"` resolve to a [`Side`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SideTag(String);

impl SideTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the tag, `None` for anything other than `buy`/`sell`
    pub fn resolve(&self) -> Option<Side> {
        match self.0.as_str() {
            "buy" => Some(Side::Buy),
            "sell" => Some(Side::Sell),
            _ => None,
        }
    }
}

impl From<Side> for SideTag {
    fn from(side: Side) -> Self {
        Self(side.as_str().to_string())
    }
}

/// A resting limit order at snapshot time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: SideTag,
    pub price: Price,
    pub quantity: Quantity,
    pub timestamp: DateTime<Utc>,
    /// Informational only, never consulted by verification
    pub user_id: String,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        side: Side,
        price: Price,
        quantity: Quantity,
        timestamp: DateTime<Utc>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            side: side.into(),
            price,
            quantity,
            timestamp,
            user_id: user_id.into(),
        }
    }
}
