//! Router setup and server startup.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use seedquery_core::config::ServerConfig;
use seedquery_core::SeedQueryError;

use crate::handlers;
use crate::state::AppState;

/// Largest request envelope accepted.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/alexa", post(handlers::alexa))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the configured address.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), SeedQueryError> {
    let addr = format!("{}:{}", config.host, config.port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SeedQueryError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| SeedQueryError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
