//! Bridge analysis handlers

use crate::{handle_core_error, ApiError, ApiResponse, AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use bridgefinder_core::prelude::*;
use tracing::{debug, info};

/// Find the bridges of a graph, returning the bare `{"bridges": [...]}` body
pub async fn list_bridges(
    State(state): State<AppState>,
    payload: Result<Json<GraphRequest>, JsonRejection>,
) -> Result<Json<BridgeResponse>, ApiError> {
    let report = run_analysis(&state, payload).await?;
    Ok(Json(report.into()))
}

/// Analyze a graph, returning the full report wrapped in an [`ApiResponse`]
pub async fn analyze_graph(
    State(state): State<AppState>,
    payload: Result<Json<GraphRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BridgeReport>>, ApiError> {
    let report = run_analysis(&state, payload).await?;
    Ok(Json(ApiResponse::success(report)))
}

async fn run_analysis(
    state: &AppState,
    payload: Result<Json<GraphRequest>, JsonRejection>,
) -> Result<BridgeReport, ApiError> {
    let Json(request) = payload.map_err(reject_payload)?;

    debug!(
        "Analyzing graph with {} nodes and {} edges",
        request.nodes,
        request.edges.len()
    );

    let report = state
        .core_service
        .analyze(request)
        .await
        .map_err(handle_core_error)?;

    info!(
        "Request {} found {} bridges in {}ms",
        report.request_id,
        report.bridges.len(),
        report.elapsed_ms
    );
    Ok(report)
}

fn reject_payload(rejection: JsonRejection) -> ApiError {
    debug!("Rejected request body: {}", rejection);
    (
        rejection.status(),
        Json(ApiResponse::error(format!("Invalid request body: {}", rejection.body_text()))),
    )
}
