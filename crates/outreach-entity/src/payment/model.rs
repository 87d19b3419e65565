//! Payment ledger entry and the rows returned by the payment queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::reference::ReferenceValue;

/// A one-time payment event for a single disclosure.
///
/// Append-only: the `payments.disclosure_id` column is unique, so a
/// disclosure can be paid at most once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLedgerEntry {
    /// Unique ledger entry identifier.
    pub id: Uuid,
    /// The paid disclosure.
    pub disclosure_id: Uuid,
    /// The accountant who marked the disclosure as paid.
    pub created_by: Uuid,
    /// When the payment was recorded.
    pub created_at: DateTime<Utc>,
}

/// Flat row produced by the eligible/history queries, one per disclosure.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCandidateRow {
    pub disclosure_id: Uuid,
    pub scout_id: Option<Uuid>,
    pub scout_name: Option<String>,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub rating_id: Option<Uuid>,
    pub rating_name: Option<String>,
    pub is_custom_rating: bool,
    pub custom_rating: Option<String>,
    /// Timestamp of the latest rating-related audit event.
    pub completed_at: Option<DateTime<Utc>>,
    /// Ledger timestamp; `None` for unpaid disclosures.
    pub paid_at: Option<DateTime<Utc>>,
}

/// Rating details shown next to a payable disclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// Structured rating id.
    pub id: Option<Uuid>,
    /// Structured rating name.
    pub name: Option<String>,
    /// Whether the rating is free text.
    pub is_custom: bool,
    /// Free-text rating.
    pub custom_rating: Option<String>,
    /// When the rating was set, recovered from the audit trail.
    pub completed_at: Option<DateTime<Utc>>,
}

/// A disclosure as listed for payment, either eligible or already paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosurePayment {
    /// The disclosure.
    pub disclosure_id: Uuid,
    /// Assigned scout.
    pub scout: Option<ReferenceValue>,
    /// The beneficiary.
    pub patient: ReferenceValue,
    /// Rating details.
    pub rating: RatingSummary,
    /// When the disclosure was paid; `null` for eligible rows.
    pub paid_at: Option<DateTime<Utc>>,
}

impl From<PaymentCandidateRow> for DisclosurePayment {
    fn from(row: PaymentCandidateRow) -> Self {
        let scout = match (row.scout_id, row.scout_name) {
            (Some(id), Some(name)) => Some(ReferenceValue::new(id, name)),
            _ => None,
        };

        Self {
            disclosure_id: row.disclosure_id,
            scout,
            patient: ReferenceValue::new(row.patient_id, row.patient_name),
            rating: RatingSummary {
                id: row.rating_id,
                name: row.rating_name,
                is_custom: row.is_custom_rating,
                custom_rating: row.custom_rating,
                completed_at: row.completed_at,
            },
            paid_at: row.paid_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_row_maps_to_nested_shape() {
        let scout_id = Uuid::new_v4();
        let row = PaymentCandidateRow {
            disclosure_id: Uuid::new_v4(),
            scout_id: Some(scout_id),
            scout_name: Some("Samir Haddad".to_string()),
            patient_id: Uuid::new_v4(),
            patient_name: "Lina Khoury".to_string(),
            rating_id: None,
            rating_name: None,
            is_custom_rating: true,
            custom_rating: Some("Needs follow-up".to_string()),
            completed_at: None,
            paid_at: None,
        };

        let payment = DisclosurePayment::from(row);
        assert_eq!(payment.scout.as_ref().map(|s| s.id), Some(scout_id));
        assert!(payment.rating.is_custom);
        assert!(payment.paid_at.is_none());

        let json = serde_json::to_value(&payment).unwrap();
        assert!(json.get("disclosureId").is_some());
        assert!(json["paidAt"].is_null());
        assert_eq!(json["rating"]["customRating"], "Needs follow-up");
    }
}
