//! Minimal HTTP listener for external uptime checks.
use axum::{Router, routing::get};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/healthz", get(|| async { "OK" }))
}

pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener).await
}

pub async fn serve_on(listener: TcpListener) -> std::io::Result<()> {
    info!(target = "health", addr = ?listener.local_addr().ok(), "health listener started");
    axum::serve(listener, router()).await
}
