//! Command-line and environment configuration for the service binary.

use crate::executor::types::{DEFAULT_POOL_SIZE, DEFAULT_QUEUE_CAPACITY, ExecutorConfig};

use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "pool-executor")]
#[command(author, version, about = "Bounded-concurrency task executor service", long_about = None)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "POOL_EXECUTOR_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Worker pool size
    #[arg(long, env = "POOL_EXECUTOR_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: usize,

    /// Executor task queue size
    #[arg(long, env = "POOL_EXECUTOR_QUEUE_SIZE", default_value_t = DEFAULT_QUEUE_CAPACITY)]
    pub queue_size: usize,
}

impl Config {
    pub fn executor_config(&self) -> ExecutorConfig {
        ExecutorConfig::new(self.pool_size, self.queue_size)
    }
}
