//! Route handler functions.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::error::ApiError;
use crate::speechlet;
use crate::state::AppState;

/// POST /alexa - process one voice platform request envelope.
pub async fn alexa(
    State(state): State<AppState>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let reply = speechlet::process(&state.dispatcher, &state.verifier, envelope).await?;
    Ok(Json(reply))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// GET /health - liveness probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
