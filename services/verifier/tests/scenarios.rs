//! End-to-end verification scenarios
//!
//! Each test builds a snapshot and a trade batch the way the task boundary
//! would hand them over, and checks the resulting verdict.

use chrono::{DateTime, Duration, TimeZone, Utc};
use orderbook_verifier::{verify, OrderbookVerifier, TradeFailure};
use types::errors::StructuralError;
use types::ids::{MarketId, OrderId, TradeId};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::snapshot::OrderbookSnapshot;
use types::trade::Trade;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 5, 12, 0, 0).unwrap()
}

fn snapshot(orders: Vec<Order>) -> OrderbookSnapshot {
    OrderbookSnapshot {
        sequence_number: 1,
        timestamp: t0(),
        market_id: MarketId::from("BTC-USD"),
        orders,
        merkle_root: "test-merkle-root".to_string(),
        prev_hash: "test-prev-hash".to_string(),
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

fn trade(id: &str, buy: &str, sell: &str, price: u64, qty: u64) -> Trade {
    Trade::new(
        id,
        buy,
        sell,
        Price::from_u64(price),
        Quantity::from_u64(qty),
        t0() + Duration::minutes(2),
    )
    .with_receipt("0x123", 1000)
}

#[test]
fn test_valid_batch() {
    let result = verify(&[trade("trade-1", "buy-1", "sell-1", 50100, 800)], &basic_book()).unwrap();

    assert!(result.valid);
    assert_eq!(result.verified_trades, 1);
    assert!(result.failed_trades.is_empty());
}

#[test]
fn test_price_violation() {
    let result = verify(&[trade("trade-1", "buy-1", "sell-1", 49000, 800)], &basic_book()).unwrap();

    assert!(!result.valid);
    assert_eq!(result.failed_trades, vec![TradeId::from("trade-1")]);
    let message = result.error_message.unwrap();
    assert!(message.contains("price matching failed"), "got: {}", message);
    assert!(message.contains("49000"));
}

#[test]
fn test_missing_order_is_a_failure_not_an_error() {
    let result = verify(
        &[trade("trade-1", "buy-1", "sell-nonexistent", 50100, 800)],
        &basic_book(),
    )
    .unwrap();

    assert!(!result.valid);
    assert_eq!(result.failed_trades, vec![TradeId::from("trade-1")]);
    assert_eq!(result.verified_trades, 0);
    assert!(result.error_message.unwrap().contains("sell order not found: sell-nonexistent"));
}

#[test]
fn test_invalid_side_from_wire_is_structural() {
    let json = r#"{
        "sequence_number": 1,
        "timestamp": "2024-11-05T12:00:00Z",
        "market_id": "BTC-USD",
        "orders": [
            {"id": "buy-1", "side": "buy", "price": "50200", "quantity": "1000",
             "timestamp": "2024-11-05T12:00:00Z", "user_id": "user1"},
            {"id": "odd-1", "side": "hold", "price": "50100", "quantity": "800",
             "timestamp": "2024-11-05T12:00:30Z", "user_id": "user2"}
        ],
        "merkle_root": "r",
        "prev_hash": "p"
    }"#;
    let book: OrderbookSnapshot = serde_json::from_str(json).unwrap();

    let err = verify(&[trade("trade-1", "buy-1", "odd-1", 50100, 800)], &book).unwrap_err();
    assert_eq!(
        err,
        StructuralError::InvalidSide {
            order_id: OrderId::from("odd-1"),
            side: "hold".to_string(),
        }
    );
}

#[test]
fn test_price_boundaries() {
    let verifier = OrderbookVerifier::new();
    let book = basic_book();

    let at_limits = vec![
        trade("at-buy", "buy-1", "sell-1", 50200, 1),
        trade("at-sell", "buy-1", "sell-1", 50100, 1),
    ];
    assert!(verifier.verify_snapshot(&at_limits, &book).unwrap().valid);

    let outside = vec![
        trade("above-buy", "buy-1", "sell-1", 50201, 1),
        trade("below-sell", "buy-1", "sell-1", 50099, 1),
    ];
    let result = verifier.verify_snapshot(&outside, &book).unwrap();
    assert_eq!(
        result.failed_trades,
        vec![TradeId::from("above-buy"), TradeId::from("below-sell")]
    );
}

#[test]
fn test_quantity_boundary() {
    let book = basic_book();
    assert!(verify(&[trade("exact", "buy-1", "sell-1", 50100, 800)], &book).unwrap().valid);
    assert!(!verify(&[trade("over", "buy-1", "sell-1", 50100, 801)], &book).unwrap().valid);
}

#[test]
fn test_priority_boundary() {
    let book = snapshot(vec![
        Order::new("A", Side::Buy, Price::from_u64(100), Quantity::from_u64(10), t0(), "ua"),
        Order::new(
            "B",
            Side::Buy,
            Price::from_u64(100),
            Quantity::from_u64(10),
            t0() + Duration::seconds(1),
            "ub",
        ),
        Order::new("S", Side::Sell, Price::from_u64(100), Quantity::from_u64(10), t0(), "us"),
    ]);

    let skipped = verify(&[trade("match-b", "B", "S", 100, 5)], &book).unwrap();
    assert!(!skipped.valid);
    assert!(skipped.error_message.unwrap().contains("buy order A has priority over B"));

    let in_order = verify(&[trade("match-a", "A", "S", 100, 5)], &book).unwrap();
    assert!(in_order.valid);
}

#[test]
fn test_amounts_beyond_u64() {
    let huge = |s: &str| s.parse::<Price>().unwrap();
    let book = snapshot(vec![
        Order::new(
            "buy-big",
            Side::Buy,
            huge("100000000000000000001"),
            "500000000000000000000".parse().unwrap(),
            t0(),
            "whale",
        ),
        Order::new(
            "sell-big",
            Side::Sell,
            huge("100000000000000000000"),
            "500000000000000000000".parse().unwrap(),
            t0(),
            "whale-2",
        ),
    ]);

    let mut ok = trade("big-ok", "buy-big", "sell-big", 0, 0);
    ok.price = huge("100000000000000000000");
    ok.quantity = "500000000000000000000".parse().unwrap();

    let mut over = ok.clone();
    over.id = TradeId::from("big-over");
    over.price = huge("100000000000000000002");

    let result = verify(&[ok, over], &book).unwrap();
    assert_eq!(result.verified_trades, 1);
    assert_eq!(result.failed_trades, vec![TradeId::from("big-over")]);
}

#[test]
fn test_sample_book_from_publisher_demo() {
    // 0.53 / 0.515 bids against 0.53 / 0.525 asks, trade at the best ask
    let base = t0();
    let book = snapshot(vec![
        Order::new(
            "order-buy-001",
            Side::Buy,
            Price::from_u64(530_000_000_000_000_000),
            Quantity::from_u64(1_000_000_000_000_000_000),
            base,
            "user-alice",
        ),
        Order::new(
            "order-buy-002",
            Side::Buy,
            Price::from_u64(515_000_000_000_000_000),
            Quantity::from_u64(2_000_000_000_000_000_000),
            base + Duration::minutes(1),
            "user-bob",
        ),
        Order::new(
            "order-sell-001",
            Side::Sell,
            Price::from_u64(530_000_000_000_000_000),
            Quantity::from_u64(1_500_000_000_000_000_000),
            base + Duration::seconds(30),
            "user-charlie",
        ),
        Order::new(
            "order-sell-002",
            Side::Sell,
            Price::from_u64(525_000_000_000_000_000),
            Quantity::from_u64(800_000_000_000_000_000),
            base + Duration::seconds(90),
            "user-diana",
        ),
    ]);
    let claim = Trade::new(
        "trade-001",
        "order-buy-001",
        "order-sell-002",
        Price::from_u64(525_000_000_000_000_000),
        Quantity::from_u64(800_000_000_000_000_000),
        base + Duration::minutes(2),
    );

    let result = verify(&[claim.clone()], &book).unwrap();
    assert!(result.valid, "{:?}", result.error_message);

    // Matching the worse ask skips the better one
    let mut skipped = claim;
    skipped.sell_order_id = OrderId::from("order-sell-001");
    skipped.price = Price::from_u64(530_000_000_000_000_000);
    let verifier = OrderbookVerifier::new();
    let state = orderbook_verifier::OrderbookState::build(&book.orders).unwrap();
    assert!(matches!(
        verifier.verify_trade(&skipped, &state),
        Err(TradeFailure::SellPriority { .. })
    ));
}
