//! Demo web server: a static page plus two JSON endpoints.

pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::utils::error::Result;

/// Immutable state shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub greeting: Arc<str>,
}

impl AppState {
    pub fn new(greeting: impl Into<Arc<str>>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.greeting.as_str())
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/static/app.js", get(handlers::app_js))
        .route("/api/hello", get(handlers::hello))
        .route("/api/time", get(handlers::time))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind `host:port` from the config and serve until Ctrl+C.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    serve_with_listener(listener, AppState::from_config(config)).await
}

pub async fn serve_with_listener(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "🚀 Demo server listening on http://{}", addr);

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Demo server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        // 無法監聽訊號時就一直執行下去
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
