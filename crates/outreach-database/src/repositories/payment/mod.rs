//! Payment query engine over disclosures and the payment ledger.

pub mod eligibility;

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, info};
use uuid::Uuid;

use outreach_core::error::{AppError, ErrorKind};
use outreach_core::result::AppResult;
use outreach_core::types::pagination::{PageRequest, PageResponse};
use outreach_entity::payment::{PaymentCandidateRow, PaymentLedgerEntry};

pub use eligibility::{EligibilityContext, PaymentFilter, Predicate};

use eligibility::{ELIGIBLE, HISTORY, NamedPredicate, collect, push_audit_logs_join, push_where};

/// Which side of the payment partition a listing reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentListing {
    /// Completed, rated and unpaid.
    Eligible,
    /// Completed, rated and paid.
    History,
}

impl PaymentListing {
    fn fragments(self) -> &'static [NamedPredicate] {
        match self {
            Self::Eligible => ELIGIBLE,
            Self::History => HISTORY,
        }
    }

    /// Picks the surviving row per disclosure.
    fn dedup_order(self) -> &'static str {
        match self {
            Self::Eligible => " ORDER BY d.id, a.created_at DESC NULLS LAST, a.id DESC",
            Self::History => {
                " ORDER BY d.id, pay.created_at DESC, a.created_at DESC NULLS LAST, a.id DESC"
            }
        }
    }

    fn page_order(self) -> &'static str {
        match self {
            Self::Eligible => " ORDER BY completed_at DESC NULLS LAST, disclosure_id",
            Self::History => " ORDER BY paid_at DESC, disclosure_id",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Eligible => "eligible",
            Self::History => "history",
        }
    }
}

/// Repository for payment listings and the payment ledger.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
    context: EligibilityContext,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool, context: EligibilityContext) -> Self {
        Self { pool, context }
    }

    /// The server-side eligibility inputs in use.
    pub fn context(&self) -> &EligibilityContext {
        &self.context
    }

    /// Page of disclosures that can be paid now.
    pub async fn find_eligible(
        &self,
        filter: &PaymentFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PaymentCandidateRow>> {
        self.list(PaymentListing::Eligible, filter, page).await
    }

    /// Page of disclosures that were already paid.
    pub async fn find_history(
        &self,
        filter: &PaymentFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PaymentCandidateRow>> {
        self.list(PaymentListing::History, filter, page).await
    }

    /// Run one listing: a count and a deduplicated page under the same predicate.
    pub async fn list(
        &self,
        listing: PaymentListing,
        filter: &PaymentFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PaymentCandidateRow>> {
        filter.validate()?;
        let predicates = collect(listing.fragments(), filter, &self.context);

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(DISTINCT d.id) FROM disclosures d");
        push_where(&mut count, &predicates);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count payment candidates", e)
            })?;

        if total == 0 {
            debug!(listing = listing.label(), "No payment candidates");
            return Ok(PageResponse::empty(page));
        }

        let mut select = candidate_query(listing, &predicates);
        select.push(" LIMIT ");
        select.push_bind(page.limit());
        select.push(" OFFSET ");
        select.push_bind(page.offset());

        let rows = select
            .build_query_as::<PaymentCandidateRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list payment candidates", e)
            })?;

        info!(
            listing = listing.label(),
            total,
            returned = rows.len(),
            page_number = page.page_number,
            page_size = page.page_size,
            "Listed payment candidates"
        );

        Ok(PageResponse::new(rows, page, total as u64))
    }

    /// Ids of every eligible disclosure under `filter`.
    pub async fn find_eligible_ids(&self, filter: &PaymentFilter) -> AppResult<Vec<Uuid>> {
        filter.validate()?;
        let predicates = collect(ELIGIBLE, filter, &self.context);

        let mut qb = QueryBuilder::<Postgres>::new("SELECT DISTINCT d.id FROM disclosures d");
        push_where(&mut qb, &predicates);
        qb.push(" ORDER BY d.id");

        qb.build_query_scalar::<Uuid>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to select eligible ids", e)
            })
    }

    /// Write one ledger entry for every eligible disclosure of one scout.
    ///
    /// Returns the number of entries written. An empty eligible set is a
    /// no-op and opens no transaction. A disclosure paid concurrently by
    /// another caller trips the unique constraint on `payments.disclosure_id`
    /// and surfaces as [`ErrorKind::Conflict`]; the whole batch is rolled back.
    pub async fn mark_as_paid(&self, filter: &PaymentFilter, actor: Uuid) -> AppResult<u64> {
        let Some(scout_id) = filter.scout_id else {
            return Err(AppError::validation("scoutId is required to mark payments"));
        };

        let ids = self.find_eligible_ids(filter).await?;
        if ids.is_empty() {
            info!(%scout_id, "Nothing to mark as paid");
            return Ok(0);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::from_sqlx("Failed to begin payment transaction", e))?;

        let written = sqlx::query(
            "INSERT INTO payments (disclosure_id, created_by) \
             SELECT id, $2 FROM UNNEST($1::uuid[]) AS t(id)",
        )
        .bind(&ids)
        .bind(actor)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            let err = AppError::from_sqlx("Failed to write payment ledger", e);
            if err.is_conflict() {
                AppError {
                    message: "One or more disclosures were already paid".to_string(),
                    ..err
                }
            } else {
                err
            }
        })?
        .rows_affected();

        tx.commit()
            .await
            .map_err(|e| AppError::from_sqlx("Failed to commit payment transaction", e))?;

        info!(%scout_id, %actor, written, "Marked disclosures as paid");
        Ok(written)
    }

    /// The ledger entry of a disclosure, if it was paid.
    pub async fn find_by_disclosure(
        &self,
        disclosure_id: Uuid,
    ) -> AppResult<Option<PaymentLedgerEntry>> {
        sqlx::query_as::<_, PaymentLedgerEntry>("SELECT * FROM payments WHERE disclosure_id = $1")
            .bind(disclosure_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find payment", e))
    }

    /// Number of ledger entries for a disclosure.
    pub async fn count_by_disclosure(&self, disclosure_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM payments WHERE disclosure_id = $1")
            .bind(disclosure_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count payments", e))
    }
}

/// Build the deduplicated candidate select, without paging.
fn candidate_query(listing: PaymentListing, predicates: &[Predicate]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new(
        "SELECT * FROM (SELECT DISTINCT ON (d.id) \
         d.id AS disclosure_id, d.scout_id, e.name AS scout_name, \
         d.patient_id, p.name AS patient_name, \
         d.rating_id, r.name AS rating_name, d.is_custom_rating, d.custom_rating, \
         a.created_at AS completed_at, pay.created_at AS paid_at \
         FROM disclosures d \
         JOIN patients p ON p.id = d.patient_id \
         LEFT JOIN employees e ON e.id = d.scout_id \
         LEFT JOIN ratings r ON r.id = d.rating_id \
         LEFT JOIN payments pay ON pay.disclosure_id = d.id",
    );
    push_audit_logs_join(&mut qb);
    push_where(&mut qb, predicates);
    qb.push(listing.dedup_order());
    qb.push(") candidates");
    qb.push(listing.page_order());
    qb
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_core::config::PaymentConfig;

    fn predicates(listing: PaymentListing) -> Vec<Predicate> {
        let context = EligibilityContext::from_config(&PaymentConfig::default());
        collect(listing.fragments(), &PaymentFilter::default(), &context)
    }

    #[test]
    fn test_eligible_query_dedups_by_latest_audit_event() {
        let qb = candidate_query(PaymentListing::Eligible, &predicates(PaymentListing::Eligible));
        let sql = qb.sql();

        assert!(sql.contains("SELECT DISTINCT ON (d.id)"));
        assert!(sql.contains("ORDER BY d.id, a.created_at DESC NULLS LAST, a.id DESC"));
        assert!(sql.ends_with(") candidates ORDER BY completed_at DESC NULLS LAST, disclosure_id"));
        assert!(sql.contains("NOT EXISTS"));
    }

    #[test]
    fn test_history_query_orders_by_ledger_time() {
        let qb = candidate_query(PaymentListing::History, &predicates(PaymentListing::History));
        let sql = qb.sql();

        assert!(sql.contains("ORDER BY d.id, pay.created_at DESC"));
        assert!(sql.ends_with(" ORDER BY paid_at DESC, disclosure_id"));
        assert!(!sql.contains("NOT EXISTS"));
    }

    #[test]
    fn test_audit_join_precedes_where_clause() {
        let qb = candidate_query(PaymentListing::Eligible, &predicates(PaymentListing::Eligible));
        let sql = qb.sql();
        let join = sql.find("LEFT JOIN audit_logs a").unwrap();
        let filter = sql.find(" WHERE ").unwrap();
        assert!(join < filter);
    }
}
