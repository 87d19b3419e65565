//! Foreign-key value lookups for display.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use outreach_core::error::{AppError, ErrorKind};
use outreach_core::result::AppResult;
use outreach_entity::reference::{ReferenceKind, ReferenceValue};

/// Resolves an id in one of the lookup tables to its display name.
#[async_trait]
pub trait ReferenceLookup: Send + Sync + std::fmt::Debug {
    /// Returns `None` when no row has this id.
    async fn find_reference(
        &self,
        kind: ReferenceKind,
        id: Uuid,
    ) -> AppResult<Option<ReferenceValue>>;
}

/// PostgreSQL-backed [`ReferenceLookup`].
#[derive(Debug, Clone)]
pub struct ReferenceRepository {
    pool: PgPool,
}

impl ReferenceRepository {
    /// Create a new reference repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceLookup for ReferenceRepository {
    async fn find_reference(
        &self,
        kind: ReferenceKind,
        id: Uuid,
    ) -> AppResult<Option<ReferenceValue>> {
        // Table names come from a closed enum, never from input.
        let sql = format!("SELECT id, name FROM {} WHERE id = $1", kind.table());
        sqlx::query_as::<_, ReferenceValue>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to resolve {} reference", kind.table()),
                    e,
                )
            })
    }
}
