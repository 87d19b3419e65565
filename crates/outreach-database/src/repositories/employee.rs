//! Employee repository implementation.

use sqlx::PgPool;

use outreach_core::error::{AppError, ErrorKind};
use outreach_core::result::AppResult;
use outreach_entity::employee::{CreateEmployee, Employee};

/// Repository for employee lookups.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an employee by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE LOWER(username) = LOWER($1)",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find employee by username", e)
        })
    }

    /// Create an employee.
    pub async fn create(&self, data: &CreateEmployee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, username, password_hash, role) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Failed to create employee", e))
    }
}
