//! # outreach-api
//!
//! HTTP API layer for the outreach back office built on Axum.
//!
//! Provides the REST endpoints, middleware (logging, CORS, RBAC guards),
//! extractors, DTOs, and the error boundary that turns [`AppError`] into
//! HTTP responses.
//!
//! [`AppError`]: outreach_core::error::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
