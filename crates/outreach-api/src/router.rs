//! Route definitions for the outreach HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logger.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(payment_routes())
        .merge(audit_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Scout payments (accountant)
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/payments/eligible", get(handlers::payment::list_eligible))
        .route("/payments/history", get(handlers::payment::list_history))
        .route("/payments/mark-paid", post(handlers::payment::mark_paid))
}

/// Disclosure audit trail (manager, supervisor)
fn audit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/disclosures/{id}/audit-logs",
            get(handlers::audit::list_grouped),
        )
        .route(
            "/disclosures/{id}/audit-logs/details",
            get(handlers::audit::list_details),
        )
}

/// Health checks
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
