//! Snapshot watcher and task submission
//!
//! Sequencing follows a high-water mark: every poll processes the
//! sequences above the last one seen, in ascending order, then moves the
//! mark to the highest sequence present. A snapshot that fails to process
//! is logged and not retried.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use orderbook_verifier::{OrderbookVerifier, VerificationResult};
use publisher::{task_input, SnapshotStore, StoreError, TaskSubmission};
use thiserror::Error;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info, warn};
use types::errors::StructuralError;

use crate::clock::Clock;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("verification could not run: {0}")]
    Verification(#[from] StructuralError),
}

pub struct TaskSubmitter<S, C> {
    store: Arc<S>,
    clock: Arc<C>,
    verifier: OrderbookVerifier,
    last_sequence: u64,
}

impl<S: SnapshotStore, C: Clock> TaskSubmitter<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store: Arc::new(store),
            clock: Arc::new(clock),
            verifier: OrderbookVerifier::new(),
            last_sequence: 0,
        }
    }

    /// Highest snapshot sequence seen so far
    pub fn last_sequence(&self) -> u64 {
        self.last_sequence
    }

    /// Submit a task for every snapshot published since the last poll
    pub fn poll_once(&mut self) -> Result<Vec<TaskSubmission>, SubmitError> {
        let (submitted, last_sequence) =
            poll_store(&*self.store, &*self.clock, self.last_sequence)?;
        self.last_sequence = last_sequence;
        Ok(submitted)
    }

    /// Every readable task record; unreadable ones are skipped
    pub fn task_submissions(&self) -> Result<Vec<TaskSubmission>, SubmitError> {
        let mut tasks = Vec::new();
        for task_id in self.store.list_tasks()? {
            match self.store.load_task(&task_id) {
                Ok(task) => tasks.push(task),
                Err(e) => warn!(task_id = %task_id, error = %e, "Failed to read task record"),
            }
        }
        Ok(tasks)
    }

    /// Run a stored task through the verification engine locally
    pub fn simulate_task_execution(
        &self,
        task_id: &str,
    ) -> Result<VerificationResult, SubmitError> {
        let task = self.store.load_task(task_id)?;
        let result = self.verifier.verify_snapshot(&task.trades, &task.snapshot)?;

        info!(
            task_id,
            valid = result.valid,
            verified_trades = result.verified_trades,
            failed_trades = result.failed_trades.len(),
            "Task execution simulation completed"
        );
        Ok(result)
    }
}

impl<S, C> TaskSubmitter<S, C>
where
    S: SnapshotStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Poll every `interval` until `shutdown` completes
    ///
    /// The first poll happens one interval after the call. Polls run on the
    /// blocking pool; errors are logged and the loop keeps going.
    pub async fn watch(&mut self, interval: Duration, shutdown: impl Future<Output = ()>) {
        info!(
            interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
            "Starting snapshot watcher"
        );

        let mut ticker = interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Stopping snapshot watcher");
                    return;
                }
                _ = ticker.tick() => self.poll_blocking().await,
            }
        }
    }

    async fn poll_blocking(&mut self) {
        let store = Arc::clone(&self.store);
        let clock = Arc::clone(&self.clock);
        let last_sequence = self.last_sequence;

        let polled =
            tokio::task::spawn_blocking(move || poll_store(&*store, &*clock, last_sequence)).await;

        match polled {
            Ok(Ok((_, last_sequence))) => self.last_sequence = last_sequence,
            Ok(Err(e)) => error!(error = %e, "Failed to check for new snapshots"),
            Err(e) => error!(error = %e, "Snapshot poll task panicked"),
        }
    }
}

/// Submit every snapshot above `last_sequence`; returns the submissions and
/// the new high-water mark
fn poll_store<S: SnapshotStore, C: Clock>(
    store: &S,
    clock: &C,
    last_sequence: u64,
) -> Result<(Vec<TaskSubmission>, u64), SubmitError> {
    let sequences = store.list_snapshot_sequences()?;
    let Some(&max_sequence) = sequences.last() else {
        return Ok((Vec::new(), last_sequence));
    };

    let mut submitted = Vec::new();
    let mut expected = last_sequence + 1;
    for sequence in sequences.into_iter().filter(|s| *s > last_sequence) {
        if sequence != expected {
            warn!(expected, actual = sequence, "Snapshot sequence gap detected");
        }
        expected = sequence + 1;

        match submit_snapshot(store, clock, sequence) {
            Ok(task) => submitted.push(task),
            Err(e) => error!(sequence, error = %e, "Failed to process snapshot"),
        }
    }

    Ok((submitted, last_sequence.max(max_sequence)))
}

fn submit_snapshot<S: SnapshotStore, C: Clock>(
    store: &S,
    clock: &C,
    sequence: u64,
) -> Result<TaskSubmission, SubmitError> {
    info!(sequence, "Processing new snapshot");

    let snapshot = store.load_snapshot(sequence)?;
    let trades = store.load_trades(sequence)?.unwrap_or_default();

    let batch_id = format!("batch-{}", sequence);
    let input = task_input(&snapshot, &trades, batch_id.clone());

    let submitted_at = clock.now();
    let task = TaskSubmission {
        task_id: format!("task-{}-{}", snapshot.sequence_number, submitted_at.timestamp()),
        snapshot_hash: input.snapshot_hash,
        snapshot: input.snapshot,
        trades: input.trades,
        batch_id,
        submitted_at,
    };
    store.save_task(&task)?;

    info!(
        task_id = %task.task_id,
        sequence,
        batch_id = %task.batch_id,
        trades_count = task.trades.len(),
        "Successfully submitted verification task"
    );
    Ok(task)
}
