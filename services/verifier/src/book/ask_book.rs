//! Ask (sell-side) sequence
//!
//! Holds sell orders sorted by price ascending (best ask first), ties
//! broken by timestamp ascending, in one stable pass.

use std::cmp::Ordering;
use types::ids::OrderId;
use types::order::Order;

/// Ask (sell) side of a reconstructed book
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AskBook {
    orders: Vec<Order>,
}

fn ask_priority(a: &Order, b: &Order) -> Ordering {
    a.price
        .cmp(&b.price)
        .then_with(|| a.timestamp.cmp(&b.timestamp))
}

impl AskBook {
    /// Sort the given sell orders into priority order
    pub fn from_orders(mut orders: Vec<Order>) -> Self {
        orders.sort_by(ask_priority);
        Self { orders }
    }

    /// Locate an order by id (first match wins)
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
