//! Disclosure entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{DisclosureStatus, VisitResult};

/// One beneficiary case/visit assignment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Disclosure {
    /// Unique disclosure identifier.
    pub id: Uuid,
    /// Case status.
    pub status: DisclosureStatus,
    /// Assigned scout, if any.
    pub scout_id: Option<Uuid>,
    /// The beneficiary.
    pub patient_id: Uuid,
    /// Priority degree.
    pub priority_id: Option<Uuid>,
    /// Outcome of the visit, once reported.
    pub visit_result: Option<VisitResult>,
    /// Reason given when the visit was not completed.
    pub visit_reason: Option<String>,
    /// Structured rating.
    pub rating_id: Option<Uuid>,
    /// Whether the rating is free text instead of a structured rating.
    pub is_custom_rating: bool,
    /// Free-text rating.
    pub custom_rating: Option<String>,
    /// Note attached to the rating.
    pub rating_note: Option<String>,
    /// When the disclosure was created.
    pub created_at: DateTime<Utc>,
    /// When the disclosure was last updated.
    pub updated_at: DateTime<Utc>,
    /// Creating employee.
    pub created_by: Option<Uuid>,
    /// Last updating employee.
    pub updated_by: Option<Uuid>,
}

impl Disclosure {
    /// Only completed visits can be rated.
    pub fn is_ratable(&self) -> bool {
        self.visit_result == Some(VisitResult::Completed)
    }

    /// Exactly one of a structured rating or a custom rating is present.
    pub fn has_valid_rating(&self) -> bool {
        if self.is_custom_rating {
            self.custom_rating.is_some()
        } else {
            self.rating_id.is_some()
        }
    }
}
