use crate::handlers::{health, task};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/tasks/{task_id}/validate", post(task::validate_task))
        .route("/tasks/{task_id}", post(task::execute_task));

    Router::new()
        .route("/health", get(health::health))
        .nest("/v1", api_routes)
        .layer(DefaultBodyLimit::max(state.config.max_payload_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
