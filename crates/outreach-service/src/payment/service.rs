//! Payment listings and the mark-as-paid operation.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use outreach_core::error::AppError;
use outreach_core::types::pagination::{PageRequest, PageResponse};
use outreach_database::repositories::payment::{PaymentFilter, PaymentRepository};
use outreach_entity::payment::DisclosurePayment;

use crate::context::RequestContext;

/// Input of a mark-as-paid call. The scout is mandatory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkPaidRequest {
    /// Inclusive lower bound on the disclosure creation day.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the disclosure creation day.
    pub date_to: Option<NaiveDate>,
    /// The scout whose eligible disclosures are paid.
    pub scout_id: Option<Uuid>,
}

impl MarkPaidRequest {
    /// Convert into a repository filter scoped to the scout.
    pub fn into_filter(self) -> Result<PaymentFilter, AppError> {
        let scout_id = self
            .scout_id
            .ok_or_else(|| AppError::validation("scoutId is required"))?;
        let filter = PaymentFilter::for_scout(scout_id, self.date_from, self.date_to);
        filter.validate()?;
        Ok(filter)
    }
}

/// Lists payable and paid disclosures and records payments.
#[derive(Debug, Clone)]
pub struct PaymentService {
    /// Payment repository.
    payment_repo: Arc<PaymentRepository>,
}

impl PaymentService {
    /// Creates a new payment service.
    pub fn new(payment_repo: Arc<PaymentRepository>) -> Self {
        Self { payment_repo }
    }

    /// Disclosures that can be paid now.
    pub async fn list_eligible(
        &self,
        filter: &PaymentFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<DisclosurePayment>, AppError> {
        let rows = self.payment_repo.find_eligible(filter, page).await?;
        Ok(rows.map(DisclosurePayment::from))
    }

    /// Disclosures that were already paid, most recent payment first.
    pub async fn list_history(
        &self,
        filter: &PaymentFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<DisclosurePayment>, AppError> {
        let rows = self.payment_repo.find_history(filter, page).await?;
        Ok(rows.map(DisclosurePayment::from))
    }

    /// Pays every eligible disclosure of one scout on behalf of the caller.
    ///
    /// Returns the number of ledger entries written; zero when nothing was
    /// eligible.
    pub async fn mark_as_paid(
        &self,
        ctx: &RequestContext,
        req: MarkPaidRequest,
    ) -> Result<u64, AppError> {
        let filter = req.into_filter()?;
        let written = self
            .payment_repo
            .mark_as_paid(&filter, ctx.employee_id)
            .await?;

        info!(
            actor = %ctx.employee_id,
            scout_id = ?filter.scout_id,
            written,
            "Payment batch recorded"
        );
        Ok(written)
    }
}
