//! Username/password sign-in issuing JWT access tokens.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use outreach_auth::jwt::JwtEncoder;
use outreach_auth::password::PasswordHasher;
use outreach_core::error::AppError;
use outreach_database::repositories::employee::EmployeeRepository;
use outreach_entity::employee::Employee;

/// A successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The signed-in employee.
    pub employee: Employee,
}

/// Verifies credentials and issues access tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    employee_repo: Arc<EmployeeRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        employee_repo: Arc<EmployeeRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            employee_repo,
            hasher,
            encoder,
        }
    }

    /// Signs an employee in.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let employee = self
            .employee_repo
            .find_by_username(username)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !self.hasher.verify(password, &employee.password_hash)? {
            warn!(employee_id = %employee.id, "Failed sign-in attempt");
            return Err(invalid_credentials());
        }

        if !employee.can_login() {
            return Err(AppError::authentication("Account is disabled"));
        }

        let token = self.encoder.generate_access_token(&employee)?;
        info!(employee_id = %employee.id, role = %employee.role, "Employee signed in");

        Ok(LoginResult {
            access_token: token.token,
            expires_at: token.expires_at,
            employee,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::authentication("Invalid username or password")
}
