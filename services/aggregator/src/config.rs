use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitterConfig {
    /// Directory the publisher writes snapshots into
    pub snapshot_dir: PathBuf,
    pub poll_interval: Duration,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from("./snapshots"),
            poll_interval: Duration::from_secs(5),
        }
    }
}
