//! Bounded-Concurrency Task Executor Library
//!
//! This library crate holds everything the service binary (`main.rs`) wires
//! together.
//!
//! ## Modules
//! - **`executor`**: the core. A task registry that rejects duplicate names,
//!   a bounded admission queue that applies backpressure, and a fixed pool of
//!   workers that run tasks to completion. Also hosts the HTTP handlers that
//!   expose submit / list-running / list-pending.
//! - **`config`**: command-line and environment configuration.

pub mod config;
pub mod executor;
