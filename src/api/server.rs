//! HTTP server lifecycle: bind, serve, shut down on signal.

use std::net::SocketAddr;

use thiserror::Error;

use super::router::charting_router;
use super::types::ApiContext;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bind the configured address and serve until interrupted.
pub async fn serve(addr: SocketAddr, ctx: ApiContext) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    let local = listener.local_addr()?;
    tracing::info!(%local, "listening");

    let app = charting_router(ctx);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
