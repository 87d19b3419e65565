//! Auth handlers: login and me.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use outreach_core::error::AppError;

use crate::dto::request::{LoginRequest, validate_request};
use crate::dto::response::{ApiResponse, EmployeeResponse, LoginResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let Json(req) = body.map_err(|e| AppError::validation(e.body_text()))?;
    let req = validate_request(req)?;

    let result = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: result.access_token,
        expires_at: result.expires_at,
        employee: EmployeeResponse::from(&result.employee),
    })))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<EmployeeResponse>> {
    Json(ApiResponse::ok(EmployeeResponse::from(auth.context())))
}
