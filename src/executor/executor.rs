//! Worker Pool Implementation
//!
//! `TaskExecutor` wires the registry, the admission queue and a fixed pool of
//! workers together and owns their lifecycle.
//!
//! ## Responsibilities
//! - **Admission**: dedup against the registry, then enqueue (waiting when full).
//! - **Execution**: each worker takes one task at a time, marks it running,
//!   runs it to completion and releases its registry entry.
//! - **Shutdown**: `close` stops admission; workers keep draining the queue
//!   and exit once it is empty, then `run` joins them.

use super::error::{ExecutorError, Result};
use super::queue::AdmissionQueue;
use super::registry::{RegistrationGuard, TaskRegistry};
use super::types::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// The engine that admits and executes tasks.
pub struct TaskExecutor {
    config: ExecutorConfig,
    /// Every pending and running task, keyed by name.
    registry: TaskRegistry,
    /// Accepted tasks waiting for a free worker.
    queue: AdmissionQueue,
    shutdown: CancellationToken,
    started: AtomicBool,
}

impl TaskExecutor {
    /// Creates a new executor. Workers are not started until `run`.
    pub fn new(config: ExecutorConfig) -> Result<Arc<Self>> {
        config.validate()?;

        Ok(Arc::new(Self {
            config,
            registry: TaskRegistry::new(),
            queue: AdmissionQueue::new(config.queue_capacity),
            shutdown: CancellationToken::new(),
            started: AtomicBool::new(false),
        }))
    }

    /// Submits a task for execution.
    ///
    /// # Returns
    /// * `Ok(true)` if the task was admitted. This may wait until the queue
    ///   has room.
    /// * `Ok(false)` if a task with the same name is already pending or running.
    /// * `Err(ExecutorError::Closed)` if the executor has been shut down.
    ///
    /// Dropping the returned future while it waits for room rolls back the
    /// registration, so the name becomes available again.
    pub async fn submit(&self, task: Task) -> Result<bool> {
        if self.shutdown.is_cancelled() {
            return Err(ExecutorError::Closed);
        }

        let name = task.name.clone();
        let Some(entry) = self.registry.register(task) else {
            tracing::warn!("Task {} rejected: already pending or running", name);
            return Ok(false);
        };

        // The registry lock is already released: a full queue must not stall
        // queries or other submitters.
        let guard = RegistrationGuard::new(&self.registry, entry.clone());
        self.queue.push(entry.clone()).await?;
        guard.disarm();

        tracing::info!(
            "Task {} accepted (duration: {:?})",
            entry.name(),
            entry.task.duration
        );
        Ok(true)
    }

    /// Snapshot of the tasks currently executing.
    pub fn running_tasks(&self) -> Vec<Task> {
        self.registry.snapshot(TaskStatus::Running)
    }

    /// Snapshot of the tasks accepted but not yet picked up.
    pub fn pending_tasks(&self) -> Vec<Task> {
        self.registry.snapshot(TaskStatus::Pending)
    }

    pub fn stats(&self) -> ExecutorStats {
        let (running, pending) = self.registry.status_counts();

        ExecutorStats {
            pool_size: self.config.pool_size,
            queue_capacity: self.config.queue_capacity,
            running,
            pending,
        }
    }

    /// Starts the worker pool and waits until `close` is called.
    ///
    /// On shutdown no task that was accepted is lost: workers run everything
    /// still queued, stop once the queue is empty, and are joined before this
    /// returns.
    pub async fn run(self: Arc<Self>) -> Result<()> {
        if self.started.swap(true, Ordering::AcqRel) {
            return Err(ExecutorError::AlreadyRunning);
        }

        tracing::info!("Starting {} task workers", self.config.pool_size);

        let mut workers = JoinSet::new();
        for worker_id in 0..self.config.pool_size {
            let executor = self.clone();
            workers.spawn(async move {
                executor.worker_loop(worker_id).await;
            });
        }

        tracing::info!(
            "Task executor started with {} workers (queue capacity: {})",
            self.config.pool_size,
            self.config.queue_capacity
        );

        self.shutdown.cancelled().await;
        tracing::info!(
            "Shutdown requested, draining {} pending tasks",
            self.registry.status_counts().1
        );

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Worker terminated abnormally: {}", e);
            }
        }

        tracing::info!("Task executor stopped");
        Ok(())
    }

    /// Signals shutdown and stops admitting tasks. Calling it again is a no-op.
    ///
    /// Tasks already accepted are not cancelled; they still run.
    pub fn close(&self) {
        if !self.shutdown.is_cancelled() {
            tracing::info!("Closing task executor");
            self.queue.close();
            self.shutdown.cancel();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// The main loop for a single worker.
    ///
    /// Waits for the next task, runs it to completion, repeats. Exits only
    /// when the queue is closed and empty.
    async fn worker_loop(&self, worker_id: usize) {
        tracing::debug!("Worker {} started", worker_id);

        while let Some(entry) = self.queue.pop().await {
            self.execute(worker_id, entry).await;
        }

        tracing::debug!("Worker {} stopped", worker_id);
    }

    async fn execute(&self, worker_id: usize, entry: Arc<TaskEntry>) {
        // Released on every exit path, not just on success.
        let _registration = RegistrationGuard::new(&self.registry, entry.clone());

        entry.mark_running();
        tracing::info!(
            "Worker {} running task {} ({:?})",
            worker_id,
            entry.name(),
            entry.task.duration
        );

        tokio::time::sleep(entry.task.duration).await;

        tracing::debug!("Worker {} completed task {}", worker_id, entry.name());
    }
}
