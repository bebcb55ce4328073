//! Snapshot Publisher
//!
//! Produces the hash-chained orderbook snapshots that verification tasks
//! are evaluated against, and the file-backed store both the publisher and
//! the task submitter read and write.
//!
//! - `merkle`: order-set commitment and snapshot chaining hash
//! - `store`: snapshot, trade and task-record persistence
//! - `publisher`: sequence cursor and the publish step
//! - `sample`: canonical demo book and task-input assembly

pub mod merkle;
pub mod publisher;
pub mod sample;
pub mod store;

pub use merkle::{hash_snapshot, merkle_root};
pub use publisher::{PublishCursor, PublishError, SnapshotPublisher};
pub use sample::{sample_data, task_input};
pub use store::{FsSnapshotStore, SnapshotStore, StoreError, TaskSubmission};
