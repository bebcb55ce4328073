//! Quantity rule
//!
//! Each trade is checked against the full quantity posted in the snapshot.
//! Fills are not accumulated across a batch: two trades that each claim an
//! order's whole quantity both pass this rule even though together they
//! over-fill it.

use types::numeric::Quantity;
use types::order::Order;

use crate::failure::TradeFailure;

pub fn check_quantity(
    trade_quantity: &Quantity,
    buy: &Order,
    sell: &Order,
) -> Result<(), TradeFailure> {
    if *trade_quantity > buy.quantity {
        return Err(TradeFailure::ExceedsBuyQuantity {
            trade_quantity: trade_quantity.clone(),
            order_quantity: buy.quantity.clone(),
        });
    }

    if *trade_quantity > sell.quantity {
        return Err(TradeFailure::ExceedsSellQuantity {
            trade_quantity: trade_quantity.clone(),
            order_quantity: sell.quantity.clone(),
        });
    }

    Ok(())
}
