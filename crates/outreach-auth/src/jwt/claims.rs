//! Access token payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use outreach_entity::employee::EmployeeRole;

/// What a signed access token asserts about its bearer.
///
/// The role is frozen at issue time; a role change takes effect on the
/// next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Employee id.
    pub sub: Uuid,
    pub role: EmployeeRole,
    pub name: String,
    /// Unix seconds.
    pub iat: i64,
    /// Unix seconds.
    pub exp: i64,
    pub jti: Uuid,
}

impl Claims {
    pub fn employee_id(&self) -> Uuid {
        self.sub
    }
}
