use clap::Parser;
use pool_executor::config::Config;
use pool_executor::executor::executor::TaskExecutor;
use pool_executor::executor::handlers::router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    // 1. Executor:
    let executor = TaskExecutor::new(config.executor_config())?;
    tracing::info!(
        "Executor configured: pool size {}, queue size {}",
        config.pool_size,
        config.queue_size
    );

    let runner = tokio::spawn(executor.clone().run());

    // 2. HTTP Router:
    let app = router(executor.clone());

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Server started, listening at {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 4. Drain the executor:
    executor.close();
    runner.await??;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
