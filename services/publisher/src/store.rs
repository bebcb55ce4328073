//! File-backed snapshot store
//!
//! Layout under the store directory:
//! - `snapshot_{n}.json`: published snapshot with sequence `n`
//! - `trades_{n}.json`: trades claimed against snapshot `n` (optional)
//! - `task_{id}.json`: task submission records
//!
//! Files are pretty-printed JSON, written to a temporary file and renamed
//! into place.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use types::snapshot::OrderbookSnapshot;
use types::trade::Trade;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot {0} not found")]
    SnapshotNotFound(u64),

    #[error("Task {0} not found")]
    TaskNotFound(String),

    #[error("Invalid task id {0:?}")]
    InvalidTaskId(String),
}

// ── Records ─────────────────────────────────────────────────────────

/// Record of a verification task handed to the task network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSubmission {
    pub task_id: String,
    pub snapshot_hash: String,
    pub snapshot: OrderbookSnapshot,
    pub trades: Vec<Trade>,
    pub batch_id: String,
    pub submitted_at: DateTime<Utc>,
}

// ── Store ───────────────────────────────────────────────────────────

pub trait SnapshotStore {
    fn save_snapshot(&self, snapshot: &OrderbookSnapshot) -> Result<(), StoreError>;

    fn save_trades(&self, sequence: u64, trades: &[Trade]) -> Result<(), StoreError>;

    fn load_snapshot(&self, sequence: u64) -> Result<OrderbookSnapshot, StoreError>;

    /// `Ok(None)` when no trades were published for `sequence`
    fn load_trades(&self, sequence: u64) -> Result<Option<Vec<Trade>>, StoreError>;

    /// Published snapshot sequences, ascending
    fn list_snapshot_sequences(&self) -> Result<Vec<u64>, StoreError>;

    fn save_task(&self, task: &TaskSubmission) -> Result<(), StoreError>;

    fn load_task(&self, task_id: &str) -> Result<TaskSubmission, StoreError>;

    /// Stored task ids, sorted
    fn list_tasks(&self) -> Result<Vec<String>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    dir: PathBuf,
}

impl FsSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn snapshot_path(&self, sequence: u64) -> PathBuf {
        self.dir.join(format!("snapshot_{}.json", sequence))
    }

    pub fn trades_path(&self, sequence: u64) -> PathBuf {
        self.dir.join(format!("trades_{}.json", sequence))
    }

    pub fn task_path(&self, task_id: &str) -> Result<PathBuf, StoreError> {
        if task_id.is_empty() || task_id.contains(['/', '\\']) || task_id.contains("..") {
            return Err(StoreError::InvalidTaskId(task_id.to_string()));
        }
        Ok(self.dir.join(format!("task_{}.json", task_id)))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let data = serde_json::to_vec_pretty(value)?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&data)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// `Ok(None)` if the file does not exist
    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
        match fs::read(path) {
            Ok(data) => Ok(Some(serde_json::from_slice(&data)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Names in the store directory matching `{prefix}{key}.json`, keyed
    fn list_keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(key) = name
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix(".json"))
            {
                if !key.is_empty() {
                    keys.push(key.to_string());
                }
            }
        }
        Ok(keys)
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn save_snapshot(&self, snapshot: &OrderbookSnapshot) -> Result<(), StoreError> {
        self.write_json(&self.snapshot_path(snapshot.sequence_number), snapshot)
    }

    fn save_trades(&self, sequence: u64, trades: &[Trade]) -> Result<(), StoreError> {
        self.write_json(&self.trades_path(sequence), trades)
    }

    fn load_snapshot(&self, sequence: u64) -> Result<OrderbookSnapshot, StoreError> {
        Self::read_json(&self.snapshot_path(sequence))?
            .ok_or(StoreError::SnapshotNotFound(sequence))
    }

    fn load_trades(&self, sequence: u64) -> Result<Option<Vec<Trade>>, StoreError> {
        Self::read_json(&self.trades_path(sequence))
    }

    fn list_snapshot_sequences(&self) -> Result<Vec<u64>, StoreError> {
        let mut sequences: Vec<u64> = self
            .list_keys("snapshot_")?
            .iter()
            .filter_map(|key| key.parse().ok())
            .collect();
        sequences.sort_unstable();
        sequences.dedup();
        Ok(sequences)
    }

    fn save_task(&self, task: &TaskSubmission) -> Result<(), StoreError> {
        let path = self.task_path(&task.task_id)?;
        self.write_json(&path, task)
    }

    fn load_task(&self, task_id: &str) -> Result<TaskSubmission, StoreError> {
        let path = self.task_path(task_id)?;
        Self::read_json(&path)?.ok_or_else(|| StoreError::TaskNotFound(task_id.to_string()))
    }

    fn list_tasks(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = self.list_keys("task_")?;
        ids.sort();
        Ok(ids)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
