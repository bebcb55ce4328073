use crate::error::AppError;
use crate::state::AppState;
use crate::task::{TaskRequest, TaskResponse, TaskWorker};
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Verification is CPU-bound; keep it off the async workers
async fn run_blocking<T, F>(worker: Arc<TaskWorker>, job: F) -> Result<T, AppError>
where
    F: FnOnce(&TaskWorker) -> Result<T, crate::task::TaskError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || job(&worker))
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("verification task panicked: {}", e)))?
        .map_err(AppError::from)
}

pub async fn validate_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request = TaskRequest {
        task_id: task_id.clone(),
        payload: body.to_vec(),
    };

    run_blocking(state.worker.clone(), move |worker| worker.validate_task(&request)).await?;

    Ok(Json(json!({
        "task_id": task_id,
        "status": "valid"
    })))
}

pub async fn execute_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    body: Bytes,
) -> Result<Json<TaskResponse>, AppError> {
    let request = TaskRequest {
        task_id,
        payload: body.to_vec(),
    };

    let response =
        run_blocking(state.worker.clone(), move |worker| worker.handle_task(&request)).await?;
    Ok(Json(response))
}
