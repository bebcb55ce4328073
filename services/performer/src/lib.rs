//! Task performer
//!
//! Hosts the orderbook verification engine behind the task interface the
//! host runtime calls: validate a task, then execute it and return a
//! verdict with provenance.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod task;

pub use config::PerformerConfig;
pub use router::create_router;
pub use state::AppState;
pub use task::{
    TaskError, TaskInput, TaskRequest, TaskResponse, TaskResult, TaskWorker, ValidationError,
};
