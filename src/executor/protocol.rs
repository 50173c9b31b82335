//! HTTP Protocol Definitions
//!
//! Data Transfer Objects for the task endpoints. Durations travel as whole
//! milliseconds.

use super::types::Task;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ENDPOINT_TASKS: &str = "/tasks";
pub const ENDPOINT_RUNNING_TASKS: &str = "/tasks/running";
pub const ENDPOINT_PENDING_TASKS: &str = "/tasks/pending";
pub const ENDPOINT_STATS: &str = "/tasks/stats";

/// A task as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskPayload {
    pub name: String,
    /// Milliseconds.
    pub duration: u64,
}

impl From<TaskPayload> for Task {
    fn from(payload: TaskPayload) -> Self {
        Task::new(payload.name, Duration::from_millis(payload.duration))
    }
}

impl From<Task> for TaskPayload {
    fn from(task: Task) -> Self {
        Self {
            name: task.name,
            duration: u64::try_from(task.duration.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitTasksResponse {
    pub requested_tasks: usize,
    pub submitted_tasks: usize,
    pub duplicate_tasks: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
