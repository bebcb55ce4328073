//! Verification engine core
//!
//! Rebuilds the book from a snapshot and runs every claimed trade through
//! the rule pipeline, in input order.

use tracing::{debug, info, warn};
use types::errors::StructuralError;
use types::snapshot::OrderbookSnapshot;
use types::trade::Trade;

use crate::book::OrderbookState;
use crate::failure::TradeFailure;
use crate::result::VerificationResult;
use crate::rules::{check_price, check_priority, check_quantity, resolve_orders};

/// Stateless trade verifier
///
/// Holds no data between calls; a single instance can be shared across
/// threads and used for any number of independent batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderbookVerifier;

impl OrderbookVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Verify a batch of trades against a snapshot
    ///
    /// Rule violations are recorded in the returned verdict. Only a
    /// malformed snapshot makes this return `Err`, in which case no verdict
    /// exists.
    pub fn verify_snapshot(
        &self,
        trades: &[Trade],
        snapshot: &OrderbookSnapshot,
    ) -> Result<VerificationResult, StructuralError> {
        info!(
            sequence_number = snapshot.sequence_number,
            market_id = %snapshot.market_id,
            total_trades = trades.len(),
            total_orders = snapshot.orders.len(),
            "Starting orderbook verification"
        );

        let state = OrderbookState::build(&snapshot.orders)?;
        let mut result = VerificationResult::new(trades.len());

        for trade in trades {
            match self.verify_trade(trade, &state) {
                Ok(()) => {
                    debug!(trade_id = %trade.id, "Trade verified");
                    result.record_pass();
                }
                Err(failure) => {
                    warn!(
                        trade_id = %trade.id,
                        stage = failure.stage().as_str(),
                        error = %failure,
                        "Trade verification failed"
                    );
                    result.record_failure(&trade.id, &failure);
                }
            }
        }

        info!(
            valid = result.valid,
            verified_trades = result.verified_trades,
            failed_trades = result.failed_trades.len(),
            "Verification completed"
        );

        Ok(result)
    }

    /// Run one trade through resolve → price → quantity → priority
    pub fn verify_trade(&self, trade: &Trade, state: &OrderbookState) -> Result<(), TradeFailure> {
        let (buy, sell) = resolve_orders(trade, state)?;
        check_price(&trade.price, buy.order, sell.order)?;
        check_quantity(&trade.quantity, buy.order, sell.order)?;
        check_priority(state, &buy, &sell)
    }
}

/// Verify with a throwaway verifier
pub fn verify(
    trades: &[Trade],
    snapshot: &OrderbookSnapshot,
) -> Result<VerificationResult, StructuralError> {
    OrderbookVerifier::new().verify_snapshot(trades, snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use types::ids::{MarketId, TradeId};
    use types::numeric::{Price, Quantity};
    use types::order::{Order, Side, SideTag};
    use types::snapshot::ZERO_HASH;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 5, 12, 0, 0).unwrap()
    }

    fn snapshot(orders: Vec<Order>) -> OrderbookSnapshot {
        OrderbookSnapshot {
            sequence_number: 1,
            timestamp: t0(),
            market_id: MarketId::from("BTC-USD"),
            orders,
            merkle_root: ZERO_HASH.to_string(),
            prev_hash: ZERO_HASH.to_string(),
        }
    }

    fn basic_book() -> OrderbookSnapshot {
        snapshot(vec![
            Order::new(
                "buy-1",
                Side::Buy,
                Price::from_u64(50200),
                Quantity::from_u64(1000),
                t0(),
                "user1",
            ),
            Order::new(
                "sell-1",
                Side::Sell,
                Price::from_u64(50100),
                Quantity::from_u64(800),
                t0() + Duration::seconds(30),
                "user2",
            ),
        ])
    }

    fn trade(id: &str, price: u64, qty: u64) -> Trade {
        Trade::new(
            id,
            "buy-1",
            "sell-1",
            Price::from_u64(price),
            Quantity::from_u64(qty),
            t0() + Duration::minutes(2),
        )
    }

    #[test]
    fn test_engine_valid_trade() {
        let result = verify(&[trade("trade-1", 50100, 800)], &basic_book()).unwrap();

        assert!(result.valid);
        assert_eq!(result.verified_trades, 1);
        assert_eq!(result.total_trades, 1);
        assert!(result.failed_trades.is_empty());
        assert!(result.error_message.is_none());
    }

    #[test]
    fn test_engine_mixed_batch_keeps_input_order() {
        let trades = vec![
            trade("t-bad-qty", 50100, 900),
            trade("t-ok", 50150, 10),
            trade("t-bad-price", 49000, 10),
        ];
        let result = verify(&trades, &basic_book()).unwrap();

        assert!(!result.valid);
        assert_eq!(result.verified_trades, 1);
        assert_eq!(result.total_trades, 3);
        assert_eq!(
            result.failed_trades,
            vec![TradeId::from("t-bad-qty"), TradeId::from("t-bad-price")]
        );
        assert!(result.error_message.unwrap().starts_with("trade t-bad-qty failed: quantity"));
    }

    #[test]
    fn test_engine_empty_batch_is_valid() {
        let result = verify(&[], &basic_book()).unwrap();
        assert!(result.valid);
        assert_eq!(result.total_trades, 0);
    }

    #[test]
    fn test_engine_structural_error_yields_no_result() {
        let mut book = basic_book();
        book.orders[1].side = SideTag::new("hold");

        let err = verify(&[trade("trade-1", 50100, 800)], &book).unwrap_err();
        assert!(matches!(err, StructuralError::InvalidSide { .. }));
    }

    #[test]
    fn test_engine_double_fill_not_tracked() {
        // Both trades claim the sell order's full quantity; each passes alone
        let trades = vec![trade("t1", 50100, 800), trade("t2", 50100, 800)];
        let result = verify(&trades, &basic_book()).unwrap();
        assert!(result.valid);
        assert_eq!(result.verified_trades, 2);
    }
}
