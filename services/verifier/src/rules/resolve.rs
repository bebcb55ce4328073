//! Order resolution
//!
//! Finds the two orders a trade claims to have matched. Buy orders are only
//! looked up on the bid side and sell orders only on the ask side, so a
//! trade naming a sell order as its buyer does not resolve.

use types::order::Order;
use types::trade::Trade;

use crate::book::OrderbookState;
use crate::failure::TradeFailure;

/// One resolved order with its position in its side's priority order
#[derive(Debug, Clone, Copy)]
pub struct Matched<'a> {
    pub order: &'a Order,
    pub position: usize,
}

/// Resolve the buy order first, then the sell order
pub fn resolve_orders<'a>(
    trade: &Trade,
    state: &'a OrderbookState,
) -> Result<(Matched<'a>, Matched<'a>), TradeFailure> {
    let (buy_position, buy_order) = state
        .bids()
        .find(&trade.buy_order_id)
        .ok_or_else(|| TradeFailure::BuyOrderNotFound(trade.buy_order_id.clone()))?;

    let (sell_position, sell_order) = state
        .asks()
        .find(&trade.sell_order_id)
        .ok_or_else(|| TradeFailure::SellOrderNotFound(trade.sell_order_id.clone()))?;

    Ok((
        Matched { order: buy_order, position: buy_position },
        Matched { order: sell_order, position: sell_position },
    ))
}
