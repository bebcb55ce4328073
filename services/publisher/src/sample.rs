//! Canonical demo book
//!
//! Two bids at 0.53 and 0.515, two asks at 0.53 and 0.525 (18-decimal fixed
//! point), and one trade filling the best bid against the best ask.

use chrono::{DateTime, Duration, Utc};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::snapshot::OrderbookSnapshot;
use types::task::TaskInput;
use types::trade::Trade;

const ONE: u64 = 1_000_000_000_000_000_000;

pub fn sample_data(base_time: DateTime<Utc>) -> (Vec<Order>, Vec<Trade>) {
    let orders = vec![
        Order::new(
            "order-buy-001",
            Side::Buy,
            Price::from_u64(530_000_000_000_000_000),
            Quantity::from_u64(ONE),
            base_time,
            "user-alice",
        ),
        Order::new(
            "order-buy-002",
            Side::Buy,
            Price::from_u64(515_000_000_000_000_000),
            Quantity::from_u64(2 * ONE),
            base_time + Duration::minutes(1),
            "user-bob",
        ),
        Order::new(
            "order-sell-001",
            Side::Sell,
            Price::from_u64(530_000_000_000_000_000),
            Quantity::from_u64(1_500_000_000_000_000_000),
            base_time + Duration::seconds(30),
            "user-charlie",
        ),
        Order::new(
            "order-sell-002",
            Side::Sell,
            Price::from_u64(525_000_000_000_000_000),
            Quantity::from_u64(800_000_000_000_000_000),
            base_time + Duration::seconds(90),
            "user-diana",
        ),
    ];

    let trades = vec![Trade::new(
        "trade-001",
        "order-buy-001",
        "order-sell-002",
        Price::from_u64(525_000_000_000_000_000),
        Quantity::from_u64(800_000_000_000_000_000),
        base_time + Duration::minutes(2),
    )
    .with_receipt("0xdef123456789abcdef123456789abcdef12345678", 12_345_678)];

    (orders, trades)
}

/// Task payload for a published snapshot; the merkle root doubles as the
/// snapshot hash
pub fn task_input(
    snapshot: &OrderbookSnapshot,
    trades: &[Trade],
    trade_batch_id: impl Into<String>,
) -> TaskInput {
    TaskInput {
        snapshot_hash: snapshot.merkle_root.clone(),
        snapshot: snapshot.clone(),
        trades: trades.to_vec(),
        trade_batch_id: trade_batch_id.into(),
    }
}
