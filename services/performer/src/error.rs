use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::task::TaskError;

/// Central error type for the performer's HTTP surface
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Task(#[from] TaskError),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Task(TaskError::Validation(_)) => (StatusCode::BAD_REQUEST, "INVALID_TASK"),
            AppError::Task(TaskError::Structural(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "STRUCTURAL_ERROR")
            }
            AppError::Task(TaskError::Encode(_)) | AppError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let message = match &self {
            AppError::InternalError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
