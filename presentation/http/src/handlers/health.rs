//! Health check handlers

use crate::{ApiError, ApiResponse, AppState, HealthStatus, Liveness};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::debug;

/// Bare liveness probe, independent of the analysis service
pub async fn liveness() -> Json<Liveness> {
    Json(Liveness::ok())
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthStatus>>, ApiError> {
    debug!("Checking core service health");

    match state.core_service.health_check().await {
        Ok(()) => Ok(Json(ApiResponse::success(HealthStatus::healthy()))),
        Err(e) => {
            let error_msg = format!("Core service unhealthy: {}", e);
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(ApiResponse::error(error_msg))))
        }
    }
}
