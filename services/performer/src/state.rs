use crate::config::PerformerConfig;
use crate::task::TaskWorker;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub worker: Arc<TaskWorker>,
    pub config: Arc<PerformerConfig>,
}

impl AppState {
    pub fn new(config: PerformerConfig) -> Self {
        Self {
            worker: Arc::new(TaskWorker::new(config.verifier_version.clone())),
            config: Arc::new(config),
        }
    }
}
