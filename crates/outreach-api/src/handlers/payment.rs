//! Scout payment handlers.
//!
//! The permission check runs before any input is inspected, so a caller
//! without access gets 403 even for a malformed request.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum_extra::extract::{Query, QueryRejection};

use outreach_auth::rbac::SystemPermission;
use outreach_core::error::AppError;
use outreach_core::types::pagination::PageResponse;
use outreach_entity::payment::DisclosurePayment;

use crate::dto::request::{MarkPaidBody, PaymentListQuery, validate_request};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_permission;
use crate::state::AppState;

/// GET /api/payments/eligible
pub async fn list_eligible(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<PaymentListQuery>, QueryRejection>,
) -> ApiResult<Json<PageResponse<DisclosurePayment>>> {
    require_permission(&state, &auth, SystemPermission::PaymentView)?;
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;

    let result = state
        .payment_service
        .list_eligible(&query.filter()?, &query.page())
        .await?;

    Ok(Json(result))
}

/// GET /api/payments/history
pub async fn list_history(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<PaymentListQuery>, QueryRejection>,
) -> ApiResult<Json<PageResponse<DisclosurePayment>>> {
    require_permission(&state, &auth, SystemPermission::PaymentView)?;
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;

    let result = state
        .payment_service
        .list_history(&query.filter()?, &query.page())
        .await?;

    Ok(Json(result))
}

/// POST /api/payments/mark-paid
pub async fn mark_paid(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<MarkPaidBody>, JsonRejection>,
) -> ApiResult<StatusCode> {
    require_permission(&state, &auth, SystemPermission::PaymentMark)?;
    let Json(body) = body.map_err(|e| AppError::validation(e.body_text()))?;
    let body = validate_request(body)?;

    state
        .payment_service
        .mark_as_paid(auth.context(), body.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
