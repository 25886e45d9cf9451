use anyhow::{Context, Result};
use cute_bank::{api, config::ServerConfig, observability};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init();

    let config = ServerConfig::from_env()?;
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind `{}`", config.addr))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, api::build_app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
