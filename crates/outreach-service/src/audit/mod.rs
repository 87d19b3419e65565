//! Audit trail reading: per-day grouping and foreign-key resolution.

pub mod resolver;
pub mod service;

pub use resolver::AuditResolver;
pub use service::AuditTrailService;
