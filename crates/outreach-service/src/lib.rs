//! # outreach-service
//!
//! Business logic service layer for the outreach backend. Each service
//! orchestrates repositories and authentication primitives to implement
//! one application-level use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod audit;
pub mod auth;
pub mod context;
pub mod payment;

pub use audit::{AuditResolver, AuditTrailService};
pub use auth::{AuthService, LoginResult};
pub use context::RequestContext;
pub use payment::{MarkPaidRequest, PaymentService};
