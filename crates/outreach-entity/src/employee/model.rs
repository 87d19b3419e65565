//! Employee entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::EmployeeRole;

/// A staff member who can sign in to the back office.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique employee identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Employee role.
    pub role: EmployeeRole,
    /// Inactive employees cannot sign in.
    pub is_active: bool,
    /// When the employee was created.
    pub created_at: DateTime<Utc>,
    /// When the employee was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Check if the employee can sign in right now.
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}

/// Data required to create an employee.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub role: EmployeeRole,
}
