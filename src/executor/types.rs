use super::error::{ExecutorError, Result};

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const DEFAULT_POOL_SIZE: usize = 10;
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;

/// A named unit of work.
///
/// The name is the dedup key: while a task is pending or running, no other
/// task with the same name is admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    /// How long the task body keeps its worker busy.
    pub duration: Duration,
}

impl Task {
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Lifecycle state of a registered task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Accepted and buffered in the admission queue.
    Pending,
    /// Picked up by a worker and currently executing.
    Running,
}

/// The record shared between the registry, the admission queue and the worker
/// that eventually executes it.
///
/// The running flag is owned by the record itself, so flipping it never takes
/// the registry lock.
#[derive(Debug)]
pub struct TaskEntry {
    pub task: Task,
    running: AtomicBool,
}

impl TaskEntry {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            running: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.task.name
    }

    pub fn mark_running(&self) {
        self.running.store(true, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn status(&self) -> TaskStatus {
        if self.is_running() {
            TaskStatus::Running
        } else {
            TaskStatus::Pending
        }
    }
}

/// Sizing of the executor, fixed for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Number of worker loops, i.e. the maximum number of running tasks.
    pub pool_size: usize,
    /// Maximum number of tasks buffered between submission and pickup.
    pub queue_capacity: usize,
}

impl ExecutorConfig {
    pub fn new(pool_size: usize, queue_capacity: usize) -> Self {
        Self {
            pool_size,
            queue_capacity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(ExecutorError::InvalidConfig(
                "pool size must be at least 1".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(ExecutorError::InvalidConfig(
                "queue capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE, DEFAULT_QUEUE_CAPACITY)
    }
}

/// Point-in-time view of the executor's occupancy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutorStats {
    pub pool_size: usize,
    pub queue_capacity: usize,
    pub running: usize,
    pub pending: usize,
}
