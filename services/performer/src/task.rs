//! Task boundary around the verification engine
//!
//! A task arrives as raw JSON bytes. `validate_task` rejects malformed
//! batches before any verification runs; `handle_task` runs the engine and
//! packages the verdict with provenance for the aggregator.

use chrono::{DateTime, Utc};
use orderbook_verifier::{OrderbookVerifier, VerificationResult};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::{error, info, warn};
use types::errors::StructuralError;
use types::ids::{OrderId, TradeId};
pub use types::task::TaskInput;

/// Task as delivered by the host runtime
#[derive(Debug, Clone)]
pub struct TaskRequest {
    pub task_id: String,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub verification_duration_ms: u64,
    pub total_duration_ms: u64,
    pub orders_processed: usize,
    pub trades_processed: usize,
}

/// Signed-over result body returned to the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    pub verification_result: VerificationResult,
    pub snapshot_hash: String,
    pub trade_batch_id: String,
    pub verified_at: DateTime<Utc>,
    pub verifier_version: String,
    pub performance_metrics: PerformanceMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task_id: String,
    pub result: TaskResult,
}

/// Request rejected before the engine ran
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("snapshot_hash is required")]
    MissingSnapshotHash,

    #[error("trade_batch_id is required")]
    MissingTradeBatchId,

    #[error("snapshot sequence_number is required")]
    MissingSequenceNumber,

    #[error("snapshot market_id is required")]
    MissingMarketId,

    #[error("trades array cannot be empty")]
    EmptyTrades,

    #[error("snapshot must contain at least one order")]
    EmptyOrders,

    #[error("trade {trade_id} references unknown buy order {order_id}")]
    UnknownBuyOrder { trade_id: TradeId, order_id: OrderId },

    #[error("trade {trade_id} references unknown sell order {order_id}")]
    UnknownSellOrder { trade_id: TradeId, order_id: OrderId },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Malformed request; says nothing about the settlement
    #[error("invalid task: {0}")]
    Validation(#[from] ValidationError),

    /// Payload could not be evaluated at all
    #[error("cannot evaluate task: {0}")]
    Structural(#[from] StructuralError),

    #[error("failed to encode result: {0}")]
    Encode(String),
}

/// Required-field and referential checks, in reporting order
pub fn validate_input(input: &TaskInput) -> Result<(), ValidationError> {
    if input.snapshot_hash.is_empty() {
        return Err(ValidationError::MissingSnapshotHash);
    }
    if input.trade_batch_id.is_empty() {
        return Err(ValidationError::MissingTradeBatchId);
    }
    if input.snapshot.sequence_number == 0 {
        return Err(ValidationError::MissingSequenceNumber);
    }
    if input.snapshot.market_id.is_empty() {
        return Err(ValidationError::MissingMarketId);
    }
    if input.trades.is_empty() {
        return Err(ValidationError::EmptyTrades);
    }
    if input.snapshot.orders.is_empty() {
        return Err(ValidationError::EmptyOrders);
    }

    let order_ids = input.snapshot.order_ids();
    for trade in &input.trades {
        if !order_ids.contains(&trade.buy_order_id) {
            return Err(ValidationError::UnknownBuyOrder {
                trade_id: trade.id.clone(),
                order_id: trade.buy_order_id.clone(),
            });
        }
        if !order_ids.contains(&trade.sell_order_id) {
            return Err(ValidationError::UnknownSellOrder {
                trade_id: trade.id.clone(),
                order_id: trade.sell_order_id.clone(),
            });
        }
    }

    Ok(())
}

fn parse_payload(payload: &[u8]) -> Result<TaskInput, StructuralError> {
    serde_json::from_slice(payload).map_err(StructuralError::from)
}

fn millis(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Runs verification tasks; cheap to share behind an `Arc`
#[derive(Debug, Clone)]
pub struct TaskWorker {
    verifier: OrderbookVerifier,
    verifier_version: String,
}

impl TaskWorker {
    pub fn new(verifier_version: impl Into<String>) -> Self {
        Self {
            verifier: OrderbookVerifier::new(),
            verifier_version: verifier_version.into(),
        }
    }

    pub fn validate_task(&self, task: &TaskRequest) -> Result<(), TaskError> {
        let started = Instant::now();
        info!(
            task_id = %task.task_id,
            payload_size = task.payload.len(),
            "Starting task validation"
        );

        let input = parse_payload(&task.payload).map_err(|e| {
            error!(task_id = %task.task_id, error = %e, "Failed to parse task payload");
            e
        })?;

        if let Err(e) = validate_input(&input) {
            error!(
                task_id = %task.task_id,
                error = %e,
                duration_ms = millis(started),
                "Task validation failed"
            );
            return Err(e.into());
        }

        info!(
            task_id = %task.task_id,
            snapshot_hash = %input.snapshot_hash,
            trade_batch_id = %input.trade_batch_id,
            market_id = %input.snapshot.market_id,
            sequence_number = input.snapshot.sequence_number,
            total_orders = input.snapshot.orders.len(),
            total_trades = input.trades.len(),
            duration_ms = millis(started),
            "Task validation completed successfully"
        );
        Ok(())
    }

    pub fn handle_task(&self, task: &TaskRequest) -> Result<TaskResponse, TaskError> {
        let started = Instant::now();
        info!(
            task_id = %task.task_id,
            payload_size = task.payload.len(),
            "Starting task execution"
        );

        let input = parse_payload(&task.payload).map_err(|e| {
            error!(
                task_id = %task.task_id,
                error = %e,
                "Failed to parse task payload during execution"
            );
            e
        })?;

        let verification_started = Instant::now();
        let verification = self
            .verifier
            .verify_snapshot(&input.trades, &input.snapshot)
            .map_err(|e| {
                error!(
                    task_id = %task.task_id,
                    snapshot_hash = %input.snapshot_hash,
                    trade_batch_id = %input.trade_batch_id,
                    error = %e,
                    "Orderbook verification could not run"
                );
                e
            })?;
        let verification_duration_ms = millis(verification_started);

        if !verification.valid {
            warn!(
                task_id = %task.task_id,
                snapshot_hash = %input.snapshot_hash,
                trade_batch_id = %input.trade_batch_id,
                market_id = %input.snapshot.market_id,
                error_message = verification.error_message.as_deref().unwrap_or_default(),
                failed_trades = ?verification.failed_trades,
                "Settlement verification FAILED - potential fraud detected"
            );
        }

        let result = TaskResult {
            performance_metrics: PerformanceMetrics {
                verification_duration_ms,
                total_duration_ms: millis(started),
                orders_processed: input.snapshot.orders.len(),
                trades_processed: input.trades.len(),
            },
            verification_result: verification,
            snapshot_hash: input.snapshot_hash,
            trade_batch_id: input.trade_batch_id,
            verified_at: Utc::now(),
            verifier_version: self.verifier_version.clone(),
        };

        let encoded = serde_json::to_vec(&result).map_err(|e| TaskError::Encode(e.to_string()))?;

        info!(
            task_id = %task.task_id,
            settlement_valid = result.verification_result.valid,
            verified_trades = result.verification_result.verified_trades,
            total_trades = result.verification_result.total_trades,
            failed_trades = result.verification_result.failed_trades.len(),
            result_size_bytes = encoded.len(),
            total_duration_ms = millis(started),
            "Task execution completed successfully"
        );

        Ok(TaskResponse {
            task_id: task.task_id.clone(),
            result,
        })
    }
}
