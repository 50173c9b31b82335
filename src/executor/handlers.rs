//! HTTP Handlers
//!
//! axum endpoints for submitting task batches and listing pending/running
//! tasks. Validation of task names happens here, before the core is called.

use super::error::ExecutorError;
use super::executor::TaskExecutor;
use super::protocol::*;
use super::types::{ExecutorStats, Task};

use axum::routing::{get, post};
use axum::{Extension, Json, Router, http::StatusCode};
use std::sync::Arc;

/// Builds the HTTP router for a given executor.
pub fn router(executor: Arc<TaskExecutor>) -> Router {
    Router::new()
        .route(ENDPOINT_TASKS, post(handle_submit_tasks))
        .route(ENDPOINT_RUNNING_TASKS, get(handle_get_running_tasks))
        .route(ENDPOINT_PENDING_TASKS, get(handle_get_pending_tasks))
        .route(ENDPOINT_STATS, get(handle_get_stats))
        .layer(Extension(executor))
}

/// Submits a batch of tasks in order.
///
/// The whole batch is rejected up front if any task has a blank name. Each
/// submission may wait for queue room, so a large batch against a saturated
/// executor answers slowly rather than failing.
pub async fn handle_submit_tasks(
    Extension(executor): Extension<Arc<TaskExecutor>>,
    Json(tasks): Json<Vec<TaskPayload>>,
) -> (StatusCode, Json<SubmitTasksResponse>) {
    let mut response = SubmitTasksResponse {
        requested_tasks: tasks.len(),
        submitted_tasks: 0,
        duplicate_tasks: 0,
        error: None,
    };

    if tasks.iter().any(|t| t.name.trim().is_empty()) {
        tracing::warn!("Rejected batch of {} tasks: blank task name", tasks.len());
        response.error = Some("Task name must not be empty".to_string());
        return (StatusCode::BAD_REQUEST, Json(response));
    }

    for payload in tasks {
        match executor.submit(Task::from(payload)).await {
            Ok(true) => response.submitted_tasks += 1,
            Ok(false) => response.duplicate_tasks += 1,
            Err(e @ ExecutorError::Closed) => {
                tracing::error!("Failed to submit task: {}", e);
                response.error = Some(e.to_string());
                return (StatusCode::SERVICE_UNAVAILABLE, Json(response));
            }
            Err(e) => {
                tracing::error!("Failed to submit task: {}", e);
                response.error = Some(e.to_string());
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(response));
            }
        }
    }

    tracing::info!(
        "Batch submitted: {} requested, {} accepted, {} duplicates",
        response.requested_tasks,
        response.submitted_tasks,
        response.duplicate_tasks
    );

    (StatusCode::OK, Json(response))
}

pub async fn handle_get_running_tasks(
    Extension(executor): Extension<Arc<TaskExecutor>>,
) -> (StatusCode, Json<Vec<TaskPayload>>) {
    let tasks = executor
        .running_tasks()
        .into_iter()
        .map(TaskPayload::from)
        .collect();

    (StatusCode::OK, Json(tasks))
}

pub async fn handle_get_pending_tasks(
    Extension(executor): Extension<Arc<TaskExecutor>>,
) -> (StatusCode, Json<Vec<TaskPayload>>) {
    let tasks = executor
        .pending_tasks()
        .into_iter()
        .map(TaskPayload::from)
        .collect();

    (StatusCode::OK, Json(tasks))
}

pub async fn handle_get_stats(
    Extension(executor): Extension<Arc<TaskExecutor>>,
) -> (StatusCode, Json<ExecutorStats>) {
    (StatusCode::OK, Json(executor.stats()))
}
