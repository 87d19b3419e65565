//! Request context carrying the authenticated employee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use outreach_auth::jwt::Claims;
use outreach_entity::employee::EmployeeRole;

/// Context for the current authenticated request.
///
/// Extracted from the bearer token and passed into service methods so
/// that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// The authenticated employee's ID.
    pub employee_id: Uuid,
    /// The employee's role at the time the JWT was issued.
    pub role: EmployeeRole,
    /// Display name from the JWT claims.
    pub name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(employee_id: Uuid, role: EmployeeRole, name: impl Into<String>) -> Self {
        Self {
            employee_id,
            role,
            name: name.into(),
            request_time: Utc::now(),
        }
    }
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self::new(claims.employee_id(), claims.role, claims.name)
    }
}
