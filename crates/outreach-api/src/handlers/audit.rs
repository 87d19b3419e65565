//! Disclosure audit trail handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use outreach_auth::rbac::SystemPermission;
use outreach_core::error::AppError;
use outreach_core::types::pagination::PageResponse;
use outreach_entity::audit::{AuditChange, AuditDay};

use crate::dto::request::AuditDetailsQuery;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_permission;
use crate::state::AppState;

/// GET /api/disclosures/{id}/audit-logs
pub async fn list_grouped(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> ApiResult<Json<PageResponse<AuditDay>>> {
    require_permission(&state, &auth, SystemPermission::AuditView)?;
    let disclosure_id = parse_disclosure_id(&id)?;
    let Query(params) = params.map_err(|e| AppError::validation(e.body_text()))?;

    let result = state
        .audit_service
        .get_grouped(disclosure_id, &params.into_page_request())
        .await?;

    Ok(Json(result))
}

/// GET /api/disclosures/{id}/audit-logs/details?date=YYYY-MM-DD
pub async fn list_details(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    query: Result<Query<AuditDetailsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<AuditChange>>> {
    require_permission(&state, &auth, SystemPermission::AuditView)?;
    let disclosure_id = parse_disclosure_id(&id)?;
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;

    let changes = state
        .audit_service
        .get_details(disclosure_id, query.date)
        .await?;

    Ok(Json(changes))
}

fn parse_disclosure_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse::<Uuid>()
        .map_err(|_| AppError::validation(format!("Invalid disclosure id '{raw}'")))
}
