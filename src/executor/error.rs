use thiserror::Error;

/// Errors surfaced by the executor core.
///
/// A duplicate submission is not an error: `submit` reports it as `Ok(false)`.
/// A full queue is not an error either; it makes `submit` wait.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("Invalid executor configuration: {0}")]
    InvalidConfig(String),

    #[error("Executor is closed")]
    Closed,

    #[error("Executor is already running")]
    AlreadyRunning,
}

pub type Result<T> = std::result::Result<T, ExecutorError>;
