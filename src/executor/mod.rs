//! Bounded Task Executor Module
//!
//! An in-process job runner: clients submit named tasks, a fixed pool of
//! workers drains a capacity-limited queue and runs each task to completion.
//!
//! ## Architecture Overview
//! 1. **Submission**: the task name is checked against the `TaskRegistry`.
//!    Duplicates of a pending or running task are rejected.
//! 2. **Admission**: accepted tasks go into the bounded `AdmissionQueue`. When
//!    it is full, submission waits (backpressure) instead of failing.
//! 3. **Execution**: each worker pulls the oldest task, marks it running,
//!    executes it and removes it from the registry.
//! 4. **Queries**: pending/running listings are snapshots of the registry and
//!    never touch the queue.
//!
//! ## Submodules
//! - **`registry`**: name -> task record map, the dedup and query authority.
//! - **`queue`**: bounded FIFO between submitters and workers.
//! - **`executor`**: worker pool and lifecycle (`run` / `close`).
//! - **`handlers`** / **`protocol`**: HTTP endpoints and their DTOs.

pub mod error;
pub mod types;
pub mod protocol;
pub mod registry;
pub mod queue;
pub mod handlers;
pub mod executor;
