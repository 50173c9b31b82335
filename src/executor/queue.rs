//! Admission Queue
//!
//! A bounded FIFO between submitters and workers, built on a tokio `mpsc`
//! channel. The channel's capacity is the backpressure: once it is full,
//! `push` waits for a worker to take something out instead of rejecting.
//!
//! The receiving half is shared by all workers behind an async mutex, so tasks
//! are handed out strictly in submission order.

use super::error::{ExecutorError, Result};
use super::types::TaskEntry;

use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Bounded, order-preserving buffer of accepted tasks.
pub struct AdmissionQueue {
    /// `None` once the queue is closed.
    sender: parking_lot::Mutex<Option<mpsc::Sender<Arc<TaskEntry>>>>,
    receiver: Mutex<mpsc::Receiver<Arc<TaskEntry>>>,
    capacity: usize,
}

impl AdmissionQueue {
    /// Creates a queue holding at most `capacity` tasks.
    ///
    /// `capacity` must be non-zero; `ExecutorConfig::validate` guarantees it.
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity);

        Self {
            sender: parking_lot::Mutex::new(Some(sender)),
            receiver: Mutex::new(receiver),
            capacity,
        }
    }

    /// Appends a task, waiting while the queue is full.
    ///
    /// Fails with `ExecutorError::Closed` if the queue was closed before the
    /// call. A push that was already waiting for a slot when the queue closed
    /// still completes once a worker frees one.
    pub async fn push(&self, entry: Arc<TaskEntry>) -> Result<()> {
        let sender = self.sender.lock().clone().ok_or(ExecutorError::Closed)?;

        sender.send(entry).await.map_err(|_| ExecutorError::Closed)
    }

    /// Takes the oldest task, waiting while the queue is empty.
    ///
    /// Returns `None` once the queue is closed, every in-progress push has
    /// finished and the buffer is empty. Cancel safe.
    pub async fn pop(&self) -> Option<Arc<TaskEntry>> {
        self.receiver.lock().await.recv().await
    }

    /// Stops accepting new tasks. Buffered tasks stay available to `pop`.
    pub fn close(&self) {
        self.sender.lock().take();
    }

    pub fn is_closed(&self) -> bool {
        self.sender.lock().is_none()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
