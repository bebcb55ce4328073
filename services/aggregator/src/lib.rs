//! Task Submitter
//!
//! Watches the snapshot store for newly published snapshots and turns each
//! one into a verification task record. Tasks can also be executed locally
//! against the verification engine.

pub mod clock;
pub mod config;
pub mod submitter;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SubmitterConfig;
pub use submitter::{SubmitError, TaskSubmitter};
