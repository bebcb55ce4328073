//! Batch verdict

use serde::{Deserialize, Serialize};
use types::ids::TradeId;

use crate::failure::TradeFailure;

/// Outcome of verifying one batch of trades against one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// True iff every trade passed every rule
    pub valid: bool,
    /// Reason for the first failing trade, in input order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Failing trade ids, in input order
    #[serde(default)]
    pub failed_trades: Vec<TradeId>,
    pub verified_trades: usize,
    pub total_trades: usize,
}

impl VerificationResult {
    /// Empty verdict for a batch of `total_trades` trades
    pub fn new(total_trades: usize) -> Self {
        Self {
            valid: true,
            error_message: None,
            failed_trades: Vec::new(),
            verified_trades: 0,
            total_trades,
        }
    }

    pub(crate) fn record_pass(&mut self) {
        self.verified_trades += 1;
    }

    /// Record a failing trade; only the first failure sets the message
    pub(crate) fn record_failure(&mut self, trade_id: &TradeId, failure: &TradeFailure) {
        self.valid = false;
        self.failed_trades.push(trade_id.clone());
        if self.error_message.is_none() {
            self.error_message = Some(format!("trade {} failed: {}", trade_id, failure));
        }
    }
}
