//! Liveness and readiness probes. Neither requires a token.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse::new(true, state.started_at.elapsed())))
}

/// GET /api/health/detailed
///
/// Always answers 200; an unreachable database shows up as `degraded`.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedHealthResponse>> {
    let connected = state
        .db
        .ping()
        .await
        .inspect_err(|e| warn!(error = %e, "Database health probe failed"))
        .is_ok();

    Json(ApiResponse::ok(DetailedHealthResponse {
        service: HealthResponse::new(connected, state.started_at.elapsed()),
        database: if connected { "connected" } else { "unreachable" }.to_string(),
    }))
}
