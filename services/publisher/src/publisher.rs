//! Snapshot publishing
//!
//! The publisher is stateless; the sequence counter and hash chain live in
//! a [`PublishCursor`] owned by the caller and advanced only after a
//! snapshot is durably stored.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;
use types::ids::MarketId;
use types::order::Order;
use types::snapshot::{OrderbookSnapshot, ZERO_HASH};
use types::trade::Trade;

use crate::merkle::{hash_snapshot, merkle_root};
use crate::store::{SnapshotStore, StoreError};

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("failed to compute merkle root: {0}")]
    MerkleRoot(#[from] serde_json::Error),

    #[error("failed to store snapshot: {0}")]
    Store(#[from] StoreError),
}

/// Position in the snapshot hash chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishCursor {
    pub next_sequence: u64,
    pub prev_hash: String,
}

impl Default for PublishCursor {
    fn default() -> Self {
        Self {
            next_sequence: 1,
            prev_hash: ZERO_HASH.to_string(),
        }
    }
}

impl PublishCursor {
    /// Continue the chain after the highest snapshot already in `store`
    pub fn resume(store: &impl SnapshotStore) -> Result<Self, StoreError> {
        match store.list_snapshot_sequences()?.last() {
            Some(&last) => {
                let snapshot = store.load_snapshot(last)?;
                Ok(Self {
                    next_sequence: last + 1,
                    prev_hash: hash_snapshot(&snapshot),
                })
            }
            None => Ok(Self::default()),
        }
    }

    fn advance(&mut self, published: &OrderbookSnapshot) {
        self.prev_hash = hash_snapshot(published);
        self.next_sequence = published.sequence_number + 1;
    }
}

pub struct SnapshotPublisher<S> {
    store: S,
}

impl<S: SnapshotStore> SnapshotPublisher<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build, persist and chain the next snapshot
    ///
    /// Trades are written alongside the snapshot only when non-empty. The
    /// cursor is left untouched if anything fails.
    pub fn publish(
        &self,
        cursor: &mut PublishCursor,
        market_id: &MarketId,
        orders: Vec<Order>,
        trades: &[Trade],
        now: DateTime<Utc>,
    ) -> Result<OrderbookSnapshot, PublishError> {
        let merkle_root = merkle_root(&orders)?;
        let snapshot = OrderbookSnapshot {
            sequence_number: cursor.next_sequence,
            timestamp: now,
            market_id: market_id.clone(),
            orders,
            merkle_root,
            prev_hash: cursor.prev_hash.clone(),
        };

        self.store.save_snapshot(&snapshot)?;
        if !trades.is_empty() {
            self.store.save_trades(snapshot.sequence_number, trades)?;
        }

        cursor.advance(&snapshot);

        info!(
            sequence_number = snapshot.sequence_number,
            market_id = %snapshot.market_id,
            orders_count = snapshot.orders.len(),
            trades_count = trades.len(),
            merkle_root = %snapshot.merkle_root,
            "Published snapshot"
        );

        Ok(snapshot)
    }
}
