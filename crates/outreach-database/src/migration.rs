//! Schema migrations embedded from the workspace `migrations/` directory.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use outreach_core::error::{AppError, ErrorKind};
use outreach_core::result::AppResult;

/// Every migration the binary was built with.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply pending migrations. Already-applied ones are skipped by checksum.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to apply schema migrations: {e}"),
            e,
        )
    })?;

    info!(migrations = MIGRATOR.iter().count(), "Schema is up to date");
    Ok(())
}
