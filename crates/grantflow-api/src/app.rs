//! Application builder — wires stores, services, router, and state into an
//! Axum app.

use std::sync::Arc;

use axum::Router;

use grantflow_core::config::AppConfig;
use grantflow_core::error::AppError;
use grantflow_store::memory::{
    MemoryApplicationStore, MemoryMessageStore, MemoryNotificationStore, MemoryProgramStore,
};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application over the given state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the GrantFlow server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting GrantFlow server...");

    let config = Arc::new(config);

    let state = AppState::new(
        Arc::clone(&config),
        Arc::new(MemoryApplicationStore::new()),
        Arc::new(MemoryMessageStore::new()),
        Arc::new(MemoryNotificationStore::new()),
        Arc::new(MemoryProgramStore::new()),
    );

    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("GrantFlow server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
