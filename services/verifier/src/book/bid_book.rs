//! Bid (buy-side) sequence
//!
//! Holds buy orders sorted by price descending, ties broken by timestamp
//! ascending. The sort is a single stable pass over a composite key, so
//! orders tied on both price and timestamp keep their snapshot order.

use std::cmp::Ordering;
use types::ids::OrderId;
use types::order::Order;

/// Bid (buy) side of a reconstructed book
///
/// The highest bid is first. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BidBook {
    orders: Vec<Order>,
}

/// Composite priority key for bids: better price first, then earlier time
fn bid_priority(a: &Order, b: &Order) -> Ordering {
    b.price
        .cmp(&a.price)
        .then_with(|| a.timestamp.cmp(&b.timestamp))
}

impl BidBook {
    /// Sort the given buy orders into priority order
    pub fn from_orders(mut orders: Vec<Order>) -> Self {
        orders.sort_by(bid_priority);
        Self { orders }
    }

    /// Locate an order by id, returning its position in priority order
    ///
    /// Linear scan; the first matching id wins if the snapshot repeats one.
    pub fn find(&self, order_id: &OrderId) -> Option<(usize, &Order)> {
        self.orders
            .iter()
            .enumerate()
            .find(|(_, order)| &order.id == order_id)
    }

    /// Orders sorted strictly ahead of the given position
    pub fn ahead_of(&self, position: usize) -> &[Order] {
        &self.orders[..position.min(self.orders.len())]
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
