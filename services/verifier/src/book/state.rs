//! Orderbook state builder
//!
//! Rebuilt from scratch for every verification call and never mutated
//! afterwards, so two verifiers fed the same snapshot always see the same
//! book.

use tracing::error;
use types::errors::StructuralError;
use types::order::{Order, Side};

use super::{AskBook, BidBook};

/// Both sides of the book in priority order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderbookState {
    bids: BidBook,
    asks: AskBook,
}

impl OrderbookState {
    /// Partition orders by side and sort each side
    ///
    /// Any order whose side tag is not `buy` or `sell` aborts the whole
    /// build; no partial state is returned.
    pub fn build(orders: &[Order]) -> Result<Self, StructuralError> {
        let mut buys = Vec::new();
        let mut sells = Vec::new();

        for order in orders {
            match order.side.resolve() {
                Some(Side::Buy) => buys.push(order.clone()),
                Some(Side::Sell) => sells.push(order.clone()),
                None => {
                    error!(
                        order_id = %order.id,
                        side = order.side.as_str(),
                        "Invalid order side in snapshot"
                    );
                    return Err(StructuralError::InvalidSide {
                        order_id: order.id.clone(),
                        side: order.side.as_str().to_string(),
                    });
                }
            }
        }

        Ok(Self {
            bids: BidBook::from_orders(buys),
            asks: AskBook::from_orders(sells),
        })
    }

    pub fn bids(&self) -> &BidBook {
        &self.bids
    }

    pub fn asks(&self) -> &AskBook {
        &self.asks
    }

    /// Buy orders, highest price first
    pub fn buy_orders(&self) -> &[Order] {
        self.bids.orders()
    }

    /// Sell orders, lowest price first
    pub fn sell_orders(&self) -> &[Order] {
        self.asks.orders()
    }
}
