//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, state::AppState};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Catalog backend in use ("postgres" or "memory")
    pub catalog: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler. Public, no API key needed.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "catalog": "postgres",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// If the catalog backend is unreachable, returns the standard 500 error response.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Catalog backend unreachable")
    ),
    tag = "meta"
)]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    state.catalog.ping().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        catalog: state.catalog.backend().to_string(),
        timestamp: Utc::now(),
    }))
}
