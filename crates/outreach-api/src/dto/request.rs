//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use outreach_core::error::AppError;
use outreach_core::types::pagination::PageRequest;
use outreach_database::repositories::PaymentFilter;
use outreach_service::MarkPaidRequest;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Query string of the payment listings.
///
/// `scoutIds` may be repeated: `?scoutIds=a&scoutIds=b`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListQuery {
    /// Items per page.
    pub page_size: Option<u32>,
    /// Page number (zero-based).
    pub page_number: Option<u32>,
    /// Inclusive lower bound on the creation day.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the creation day.
    pub date_to: Option<NaiveDate>,
    /// A single scout.
    pub scout_id: Option<Uuid>,
    /// Any of several scouts.
    #[serde(default)]
    pub scout_ids: Vec<Uuid>,
}

impl PaymentListQuery {
    /// The requested page.
    pub fn page(&self) -> PageRequest {
        PageRequest::from_parts(self.page_number, self.page_size)
    }

    /// The validated repository filter.
    pub fn filter(&self) -> Result<PaymentFilter, AppError> {
        let filter = PaymentFilter {
            date_from: self.date_from,
            date_to: self.date_to,
            scout_id: self.scout_id,
            scout_ids: (!self.scout_ids.is_empty()).then(|| self.scout_ids.clone()),
        };
        filter.validate()?;
        Ok(filter)
    }
}

/// Mark-as-paid request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MarkPaidBody {
    /// Inclusive lower bound on the creation day.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the creation day.
    pub date_to: Option<NaiveDate>,
    /// The scout to pay.
    #[validate(required(message = "scoutId is required"))]
    pub scout_id: Option<Uuid>,
}

impl From<MarkPaidBody> for MarkPaidRequest {
    fn from(body: MarkPaidBody) -> Self {
        Self {
            date_from: body.date_from,
            date_to: body.date_to,
            scout_id: body.scout_id,
        }
    }
}

/// Query string of the audit detail view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditDetailsQuery {
    /// Restrict to one UTC day (`YYYY-MM-DD`).
    pub date: Option<NaiveDate>,
}

/// Run `validator` rules and turn failures into a validation error.
pub fn validate_request<T: Validate>(req: T) -> Result<T, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_core::error::ErrorKind;

    #[test]
    fn test_empty_scout_list_is_not_a_filter() {
        let filter = PaymentListQuery::default().filter().unwrap();
        assert!(filter.scout_ids.is_none());
        assert!(filter.scout_id.is_none());
    }

    #[test]
    fn test_single_and_list_scouts_are_rejected_together() {
        let query = PaymentListQuery {
            scout_id: Some(Uuid::new_v4()),
            scout_ids: vec![Uuid::new_v4()],
            ..Default::default()
        };
        assert_eq!(query.filter().unwrap_err().kind, ErrorKind::Validation);
    }

    #[test]
    fn test_reversed_dates_are_rejected() {
        let query = PaymentListQuery {
            date_from: NaiveDate::from_ymd_opt(2026, 3, 10),
            date_to: NaiveDate::from_ymd_opt(2026, 3, 1),
            ..Default::default()
        };
        assert_eq!(query.filter().unwrap_err().kind, ErrorKind::Validation);
    }

    #[test]
    fn test_mark_paid_body_requires_scout() {
        let err = validate_request(MarkPaidBody::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("scoutId is required"));

        let body = MarkPaidBody {
            scout_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        assert!(validate_request(body).is_ok());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let req = LoginRequest {
            username: "amal".to_string(),
            password: String::new(),
        };
        assert!(validate_request(req).is_err());
    }
}
