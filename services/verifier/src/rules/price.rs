//! Limit price rule
//!
//! A buyer never pays above their limit and a seller never receives below
//! theirs. Any execution price inside `[sell.price, buy.price]` is valid.

use types::numeric::Price;
use types::order::Order;

use crate::failure::TradeFailure;

/// Check the trade price against both limits, buy side first
pub fn check_price(trade_price: &Price, buy: &Order, sell: &Order) -> Result<(), TradeFailure> {
    if buy.price < *trade_price {
        return Err(TradeFailure::AboveBuyLimit {
            buy_price: buy.price.clone(),
            sell_price: sell.price.clone(),
            trade_price: trade_price.clone(),
        });
    }

    if sell.price > *trade_price {
        return Err(TradeFailure::BelowSellLimit {
            buy_price: buy.price.clone(),
            sell_price: sell.price.clone(),
            trade_price: trade_price.clone(),
        });
    }

    Ok(())
}
