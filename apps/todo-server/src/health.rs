//! Health endpoint
//!
//! Reports the service version and whether the database still answers.

use crate::routes::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: Vec<CheckResponse>,
}

/// Outcome of one named health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub name: String,
    pub status: String,
    pub message: Option<String>,
}

/// `GET /health`: 200 when the database answers, 503 otherwise
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let connected = state.database.is_connected().await;

    let database = CheckResponse {
        name: "database".to_string(),
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        message: (!connected).then(|| "Database did not answer".to_string()),
    };

    let (code, status) = if connected {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: vec![database],
    };

    (code, Json(response))
}
