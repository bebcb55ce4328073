//! Price-time priority rule
//!
//! Among orders at the same or a better price, the one sorted earlier must
//! be consumed first. Scans every order ahead of the matched one on each
//! side; bids are checked before asks.
//!
//! Every order ahead of a matched bid already has a price at least as high,
//! so a trade only passes when it matched the front of each side.

use crate::book::OrderbookState;
use crate::failure::TradeFailure;

use super::Matched;

pub fn check_priority(
    state: &OrderbookState,
    buy: &Matched<'_>,
    sell: &Matched<'_>,
) -> Result<(), TradeFailure> {
    if let Some(ahead) = state
        .bids()
        .ahead_of(buy.position)
        .iter()
        .find(|order| order.price >= buy.order.price)
    {
        return Err(TradeFailure::BuyPriority {
            ahead: ahead.id.clone(),
            matched: buy.order.id.clone(),
            ahead_price: ahead.price.clone(),
            matched_price: buy.order.price.clone(),
        });
    }

    if let Some(ahead) = state
        .asks()
        .ahead_of(sell.position)
        .iter()
        .find(|order| order.price <= sell.order.price)
    {
        return Err(TradeFailure::SellPriority {
            ahead: ahead.id.clone(),
            matched: sell.order.id.clone(),
            ahead_price: ahead.price.clone(),
            matched_price: sell.order.price.clone(),
        });
    }

    Ok(())
}
