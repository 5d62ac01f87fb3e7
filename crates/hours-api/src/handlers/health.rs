//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use hours_service::{HealthResponse, ReadinessResponse};
use uuid::Uuid;

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with record store health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    // A lookup that matches nothing still round-trips to the store
    let store_healthy = state
        .service_context()
        .profile_repo()
        .find_by_id(Uuid::nil())
        .await
        .map_err(|e| tracing::warn!(error = %e, "Record store probe failed"))
        .is_ok();

    let status = if store_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse::ready(store_healthy)))
}
