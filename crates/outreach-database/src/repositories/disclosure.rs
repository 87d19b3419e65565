//! Disclosure repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use outreach_core::error::{AppError, ErrorKind};
use outreach_core::result::AppResult;
use outreach_entity::disclosure::Disclosure;

/// Read access to disclosures.
#[derive(Debug, Clone)]
pub struct DisclosureRepository {
    pool: PgPool,
}

impl DisclosureRepository {
    /// Create a new disclosure repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a disclosure by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Disclosure>> {
        sqlx::query_as::<_, Disclosure>("SELECT * FROM disclosures WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find disclosure", e)
            })
    }

    /// Check whether a disclosure exists.
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM disclosures WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check disclosure", e)
            })
    }
}
