//! HTTP surface tests driven through the router without a socket

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use performer::{create_router, AppState, PerformerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::new(PerformerConfig::default()))
}

fn task_body() -> Value {
    json!({
        "snapshot_hash": "0xfeed",
        "trade_batch_id": "batch-7",
        "snapshot": {
            "sequence_number": 7,
            "timestamp": "2024-11-05T12:00:00Z",
            "market_id": "ETH-USD",
            "orders": [
                {"id": "buy-1", "side": "buy", "price": "100", "quantity": "10",
                 "timestamp": "2024-11-05T11:00:00Z", "user_id": "alice"},
                {"id": "sell-1", "side": "sell", "price": "99", "quantity": "10",
                 "timestamp": "2024-11-05T11:00:01Z", "user_id": "bob"}
            ],
            "merkle_root": "0xfeed",
            "prev_hash": "0x00"
        },
        "trades": [
            {"id": "t-1", "buy_order_id": "buy-1", "sell_order_id": "sell-1",
             "price": "99", "quantity": 5, "timestamp": "2024-11-05T12:00:00Z",
             "tx_hash": "0xabc", "block_number": 42}
        ]
    })
}

async fn post(app: Router, uri: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["verifier_version"], "1.0.0");
}

#[tokio::test]
async fn test_validate_accepts_task() {
    let (status, body) = post(
        app(),
        "/v1/tasks/task-7/validate",
        serde_json::to_vec(&task_body()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task_id"], "task-7");
    assert_eq!(body["status"], "valid");
}

#[tokio::test]
async fn test_validate_rejects_empty_trades() {
    let mut task = task_body();
    task["trades"] = json!([]);

    let (status, body) =
        post(app(), "/v1/tasks/task-7/validate", serde_json::to_vec(&task).unwrap()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_TASK");
    assert!(body["message"].as_str().unwrap().contains("trades array cannot be empty"));
}

#[tokio::test]
async fn test_execute_returns_verdict() {
    let (status, body) =
        post(app(), "/v1/tasks/task-7", serde_json::to_vec(&task_body()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task_id"], "task-7");
    let result = &body["result"];
    assert_eq!(result["verification_result"]["valid"], true);
    assert_eq!(result["verification_result"]["verified_trades"], 1);
    assert_eq!(result["snapshot_hash"], "0xfeed");
    assert_eq!(result["trade_batch_id"], "batch-7");
    assert_eq!(result["verifier_version"], "1.0.0");
    assert_eq!(result["performance_metrics"]["orders_processed"], 2);
}

#[tokio::test]
async fn test_execute_reports_fraud_as_success() {
    let mut task = task_body();
    task["trades"][0]["quantity"] = json!("11");

    let (status, body) = post(app(), "/v1/tasks/task-7", serde_json::to_vec(&task).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    let verdict = &body["result"]["verification_result"];
    assert_eq!(verdict["valid"], false);
    assert_eq!(verdict["failed_trades"], json!(["t-1"]));
    assert!(verdict["error_message"]
        .as_str()
        .unwrap()
        .starts_with("trade t-1 failed: quantity constraints failed"));
}

#[tokio::test]
async fn test_execute_structural_error() {
    let mut task = task_body();
    task["snapshot"]["orders"][0]["side"] = json!("BUY");

    let (status, body) = post(app(), "/v1/tasks/task-7", serde_json::to_vec(&task).unwrap()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "STRUCTURAL_ERROR");
}

#[tokio::test]
async fn test_execute_malformed_json() {
    let (status, body) = post(app(), "/v1/tasks/task-7", b"{\"snapshot_hash\":".to_vec()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "STRUCTURAL_ERROR");
}
