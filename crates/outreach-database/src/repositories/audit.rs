//! Audit log repository implementation.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use outreach_core::error::{AppError, ErrorKind};
use outreach_core::result::AppResult;
use outreach_core::types::pagination::PageRequest;
use outreach_entity::audit::{AuditLogEntry, CreateAuditLogEntry};

/// Repository for column-level audit rows.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Entries of one record, oldest first, optionally limited to one UTC day.
    pub async fn find_by_record(
        &self,
        record_id: Uuid,
        day: Option<NaiveDate>,
    ) -> AppResult<Vec<AuditLogEntry>> {
        let (from, until) = match day {
            Some(day) => {
                let (from, until) = day_bounds(day)?;
                (Some(from), Some(until))
            }
            None => (None, None),
        };

        sqlx::query_as::<_, AuditLogEntry>(
            "SELECT * FROM audit_logs WHERE record_id = $1 \
             AND ($2::timestamptz IS NULL OR created_at >= $2) \
             AND ($3::timestamptz IS NULL OR created_at < $3) \
             ORDER BY created_at ASC, id ASC",
        )
        .bind(record_id)
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find audit entries", e))
    }

    /// One page of the distinct UTC days with activity on a record, newest
    /// first, together with the total number of such days.
    pub async fn find_days(
        &self,
        record_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<(Vec<NaiveDate>, u64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT (created_at AT TIME ZONE 'UTC')::date) \
             FROM audit_logs WHERE record_id = $1",
        )
        .bind(record_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count audit days", e))?;

        if total == 0 {
            return Ok((Vec::new(), 0));
        }

        let days = sqlx::query_scalar::<_, NaiveDate>(
            "SELECT DISTINCT (created_at AT TIME ZONE 'UTC')::date AS day \
             FROM audit_logs WHERE record_id = $1 \
             ORDER BY day DESC LIMIT $2 OFFSET $3",
        )
        .bind(record_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list audit days", e))?;

        Ok((days, total as u64))
    }

    /// Entries of a record that fall on any of `days`, oldest first.
    pub async fn find_on_days(
        &self,
        record_id: Uuid,
        days: &[NaiveDate],
    ) -> AppResult<Vec<AuditLogEntry>> {
        if days.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, AuditLogEntry>(
            "SELECT * FROM audit_logs WHERE record_id = $1 \
             AND (created_at AT TIME ZONE 'UTC')::date = ANY($2) \
             ORDER BY created_at ASC, id ASC",
        )
        .bind(record_id)
        .bind(days)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find audit entries", e))
    }

    /// Append an audit row.
    pub async fn create(&self, data: &CreateAuditLogEntry) -> AppResult<AuditLogEntry> {
        sqlx::query_as::<_, AuditLogEntry>(
            "INSERT INTO audit_logs \
             (table_name, record_id, column_name, old_value, new_value, action, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.table_name)
        .bind(data.record_id)
        .bind(&data.column_name)
        .bind(&data.old_value)
        .bind(&data.new_value)
        .bind(data.action)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Failed to create audit entry", e))
    }
}

/// `[day 00:00, next day 00:00)` in UTC. The last representable day has
/// no upper bound and is rejected.
fn day_bounds(day: NaiveDate) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let next = day
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::validation(format!("Date {day} is out of range")))?;
    Ok((
        day.and_time(NaiveTime::MIN).and_utc(),
        next.and_time(NaiveTime::MIN).and_utc(),
    ))
}
