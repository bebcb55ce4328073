//! Verification task payload

use serde::{Deserialize, Serialize};

use crate::snapshot::OrderbookSnapshot;
use crate::trade::Trade;

/// One snapshot plus the trade batch claimed against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    pub snapshot_hash: String,
    pub snapshot: OrderbookSnapshot,
    pub trades: Vec<Trade>,
    pub trade_batch_id: String,
}
