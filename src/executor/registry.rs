//! Task Registry
//!
//! Maps task names to the records of every task that is currently pending or
//! running. It is the dedup authority for submissions and the only source for
//! the "what is pending / what is running" queries.
//!
//! Every operation (insert, delete, full scan) runs under one lock, so a
//! snapshot reflects a single instant. The running flag of each record lives
//! on the record itself and is never flipped under this lock.

use super::types::*;

use parking_lot::Mutex;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

/// Registry of in-flight tasks, keyed by task name.
pub struct TaskRegistry {
    tasks: Mutex<HashMap<String, Arc<TaskEntry>>>,
}

impl TaskRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Registers a task as pending.
    ///
    /// # Returns
    /// * `Some(entry)` with the shared record if the name was free.
    /// * `None` if a task with the same name is already pending or running.
    pub fn register(&self, task: Task) -> Option<Arc<TaskEntry>> {
        let mut tasks = self.tasks.lock();

        match tasks.entry(task.name.clone()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                let entry = Arc::new(TaskEntry::new(task));
                slot.insert(entry.clone());
                Some(entry)
            }
        }
    }

    /// Removes the given record.
    ///
    /// Only the exact record is removed; a different record registered under
    /// the same name is left alone. Returns whether anything was removed.
    pub fn unregister(&self, entry: &Arc<TaskEntry>) -> bool {
        let mut tasks = self.tasks.lock();

        match tasks.get(entry.name()) {
            Some(current) if Arc::ptr_eq(current, entry) => {
                tasks.remove(entry.name());
                true
            }
            _ => false,
        }
    }

    /// Copies out every registered task in the given state. Unordered.
    pub fn snapshot(&self, status: TaskStatus) -> Vec<Task> {
        let tasks = self.tasks.lock();

        tasks
            .values()
            .filter(|entry| entry.status() == status)
            .map(|entry| entry.task.clone())
            .collect()
    }

    /// Returns `(running, pending)` counts taken in one pass.
    pub fn status_counts(&self) -> (usize, usize) {
        let tasks = self.tasks.lock();

        let running = tasks.values().filter(|entry| entry.is_running()).count();
        (running, tasks.len() - running)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.lock().is_empty()
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a registry entry alive only as long as its owner says so.
///
/// Dropping the guard unregisters the entry. Submission disarms it once the
/// task is safely queued; a worker never disarms it, so the entry is released
/// on every exit path of the task body, including panics and cancellation.
pub(crate) struct RegistrationGuard<'a> {
    registry: &'a TaskRegistry,
    entry: Option<Arc<TaskEntry>>,
}

impl<'a> RegistrationGuard<'a> {
    pub(crate) fn new(registry: &'a TaskRegistry, entry: Arc<TaskEntry>) -> Self {
        Self {
            registry,
            entry: Some(entry),
        }
    }

    /// Hands responsibility for the entry to someone else.
    pub(crate) fn disarm(mut self) {
        self.entry = None;
    }
}

impl Drop for RegistrationGuard<'_> {
    fn drop(&mut self) {
        if let Some(entry) = self.entry.take() {
            self.registry.unregister(&entry);
        }
    }
}
