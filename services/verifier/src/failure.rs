//! Trade-level verification failures
//!
//! These are verdicts, not errors: a failing trade is recorded in the
//! batch result and verification continues with the next trade.

use thiserror::Error;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};

/// Pipeline stage a trade is checked in, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Resolve,
    Price,
    Quantity,
    Priority,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Resolve => "resolve",
            Stage::Price => "price",
            Stage::Quantity => "quantity",
            Stage::Priority => "priority",
        }
    }
}

/// Reason a single trade is inconsistent with the snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeFailure {
    #[error("buy order not found: {0}")]
    BuyOrderNotFound(OrderId),

    #[error("sell order not found: {0}")]
    SellOrderNotFound(OrderId),

    #[error(
        "price matching failed: buy order price {buy_price} is less than trade price {trade_price} (sell order price {sell_price})"
    )]
    AboveBuyLimit {
        buy_price: Price,
        sell_price: Price,
        trade_price: Price,
    },

    #[error(
        "price matching failed: sell order price {sell_price} is greater than trade price {trade_price} (buy order price {buy_price})"
    )]
    BelowSellLimit {
        buy_price: Price,
        sell_price: Price,
        trade_price: Price,
    },

    #[error(
        "quantity constraints failed: trade quantity {trade_quantity} exceeds buy order quantity {order_quantity}"
    )]
    ExceedsBuyQuantity {
        trade_quantity: Quantity,
        order_quantity: Quantity,
    },

    #[error(
        "quantity constraints failed: trade quantity {trade_quantity} exceeds sell order quantity {order_quantity}"
    )]
    ExceedsSellQuantity {
        trade_quantity: Quantity,
        order_quantity: Quantity,
    },

    #[error(
        "time priority failed: buy order {ahead} has priority over {matched} (price: {ahead_price} vs {matched_price})"
    )]
    BuyPriority {
        ahead: OrderId,
        matched: OrderId,
        ahead_price: Price,
        matched_price: Price,
    },

    #[error(
        "time priority failed: sell order {ahead} has priority over {matched} (price: {ahead_price} vs {matched_price})"
    )]
    SellPriority {
        ahead: OrderId,
        matched: OrderId,
        ahead_price: Price,
        matched_price: Price,
    },
}

impl TradeFailure {
    /// Stage that produced this failure
    pub fn stage(&self) -> Stage {
        match self {
            TradeFailure::BuyOrderNotFound(_) | TradeFailure::SellOrderNotFound(_) => {
                Stage::Resolve
            }
            TradeFailure::AboveBuyLimit { .. } | TradeFailure::BelowSellLimit { .. } => {
                Stage::Price
            }
            TradeFailure::ExceedsBuyQuantity { .. } | TradeFailure::ExceedsSellQuantity { .. } => {
                Stage::Quantity
            }
            TradeFailure::BuyPriority { .. } | TradeFailure::SellPriority { .. } => Stage::Priority,
        }
    }
}
