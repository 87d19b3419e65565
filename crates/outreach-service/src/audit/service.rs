//! Audit trail views of one disclosure.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use outreach_core::error::AppError;
use outreach_core::types::pagination::{PageRequest, PageResponse};
use outreach_database::repositories::audit::AuditLogRepository;
use outreach_database::repositories::disclosure::DisclosureRepository;
use outreach_database::repositories::reference::ReferenceLookup;
use outreach_entity::audit::{AuditChange, AuditDay, AuditLogEntry};

use super::resolver::AuditResolver;

/// Reads the column-level history of disclosures.
#[derive(Debug, Clone)]
pub struct AuditTrailService {
    /// Audit log repository.
    audit_repo: Arc<AuditLogRepository>,
    /// Disclosure repository, for existence checks.
    disclosure_repo: Arc<DisclosureRepository>,
    /// Foreign-key resolution.
    resolver: AuditResolver,
}

impl AuditTrailService {
    /// Creates a new audit trail service.
    pub fn new(
        audit_repo: Arc<AuditLogRepository>,
        disclosure_repo: Arc<DisclosureRepository>,
        lookup: Arc<dyn ReferenceLookup>,
    ) -> Self {
        Self {
            audit_repo,
            disclosure_repo,
            resolver: AuditResolver::new(lookup),
        }
    }

    /// Every change of a disclosure, optionally on one UTC day, with
    /// foreign-key values resolved. Oldest first.
    pub async fn get_details(
        &self,
        disclosure_id: Uuid,
        day: Option<NaiveDate>,
    ) -> Result<Vec<AuditChange>, AppError> {
        self.ensure_disclosure(disclosure_id).await?;

        let entries = self.audit_repo.find_by_record(disclosure_id, day).await?;
        debug!(%disclosure_id, ?day, count = entries.len(), "Resolving audit entries");

        self.resolver.resolve_all(entries).await
    }

    /// Changes of a disclosure grouped by UTC day, newest day first.
    pub async fn get_grouped(
        &self,
        disclosure_id: Uuid,
        page: &PageRequest,
    ) -> Result<PageResponse<AuditDay>, AppError> {
        self.ensure_disclosure(disclosure_id).await?;

        let (days, total) = self.audit_repo.find_days(disclosure_id, page).await?;
        if days.is_empty() {
            return Ok(PageResponse::new(Vec::new(), page, total));
        }

        let entries = self.audit_repo.find_on_days(disclosure_id, &days).await?;
        Ok(PageResponse::new(group_by_day(&days, entries), page, total))
    }

    async fn ensure_disclosure(&self, disclosure_id: Uuid) -> Result<(), AppError> {
        if self.disclosure_repo.exists(disclosure_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "Disclosure {disclosure_id} not found"
            )))
        }
    }
}

/// Bucket `entries` into `days`, keeping the order of both.
///
/// Entries on a day not listed are dropped.
pub fn group_by_day(days: &[NaiveDate], entries: Vec<AuditLogEntry>) -> Vec<AuditDay> {
    let mut grouped: Vec<AuditDay> = days
        .iter()
        .map(|date| AuditDay {
            date: *date,
            logs: Vec::new(),
        })
        .collect();

    for entry in entries {
        let date = entry.created_at.date_naive();
        if let Some(day) = grouped.iter_mut().find(|d| d.date == date) {
            day.logs.push(entry);
        }
    }
    grouped
}
