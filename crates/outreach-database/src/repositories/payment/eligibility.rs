//! Payment eligibility predicates.
//!
//! Each fragment is a pure function from the caller's [`PaymentFilter`]
//! to an optional [`Predicate`]. A query is an ordered list of named
//! fragments; the engine keeps every `Some` and joins them with `AND`.
//! Nothing in this module performs I/O.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use outreach_core::config::PaymentConfig;
use outreach_core::error::AppError;
use outreach_core::result::AppResult;
use outreach_entity::audit::columns::RATING_COLUMNS;

/// Caller-supplied filter for the payment queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFilter {
    /// Inclusive lower bound on the disclosure's creation day.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the disclosure's creation day.
    pub date_to: Option<NaiveDate>,
    /// A single scout.
    pub scout_id: Option<Uuid>,
    /// Any of several scouts.
    pub scout_ids: Option<Vec<Uuid>>,
}

impl PaymentFilter {
    /// A filter scoped to one scout.
    pub fn for_scout(
        scout_id: Uuid,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Self {
        Self {
            date_from,
            date_to,
            scout_id: Some(scout_id),
            scout_ids: None,
        }
    }

    /// Reject contradictory input.
    pub fn validate(&self) -> AppResult<()> {
        if self.scout_id.is_some() && self.scout_ids.as_ref().is_some_and(|ids| !ids.is_empty()) {
            return Err(AppError::validation(
                "scoutId and scoutIds cannot be combined",
            ));
        }
        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            if from > to {
                return Err(AppError::validation("dateFrom must not be after dateTo"));
            }
        }
        if self.date_to.is_some_and(|to| day_after(to).is_none()) {
            return Err(AppError::validation("dateTo is out of range"));
        }
        Ok(())
    }
}

/// Server-side inputs to the predicates that callers cannot influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityContext {
    /// Disclosures created at or before this instant are never payable.
    pub program_start: DateTime<Utc>,
}

impl EligibilityContext {
    /// Build the context from payment configuration.
    pub fn from_config(config: &PaymentConfig) -> Self {
        Self {
            program_start: config.program_start(),
        }
    }
}

/// A single boolean condition over `disclosures d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `d.scout_id = ANY(ids)`
    ScoutIn(Vec<Uuid>),
    /// `d.scout_id = id`
    ScoutEq(Uuid),
    /// `d.created_at >= at`
    CreatedOnOrAfter(DateTime<Utc>),
    /// `d.created_at < at`
    CreatedBefore(DateTime<Utc>),
    /// `d.created_at > at`
    CreatedAfter(DateTime<Utc>),
    /// The visit was completed.
    VisitCompleted,
    /// A structured rating or a non-empty custom rating is present.
    Rated,
    /// No ledger entry exists.
    Unpaid,
    /// A ledger entry exists.
    Paid,
}

impl Predicate {
    /// Append this predicate to `qb`, binding every value.
    pub fn push_sql(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::ScoutIn(ids) => {
                qb.push("d.scout_id = ANY(");
                qb.push_bind(ids.clone());
                qb.push(")");
            }
            Self::ScoutEq(id) => {
                qb.push("d.scout_id = ");
                qb.push_bind(*id);
            }
            Self::CreatedOnOrAfter(at) => {
                qb.push("d.created_at >= ");
                qb.push_bind(*at);
            }
            Self::CreatedBefore(at) => {
                qb.push("d.created_at < ");
                qb.push_bind(*at);
            }
            Self::CreatedAfter(at) => {
                qb.push("d.created_at > ");
                qb.push_bind(*at);
            }
            Self::VisitCompleted => {
                qb.push("d.visit_result = 'completed'");
            }
            Self::Rated => {
                qb.push(
                    "((d.rating_id IS NOT NULL AND d.is_custom_rating = FALSE) \
                     OR (d.is_custom_rating = TRUE AND d.custom_rating IS NOT NULL))",
                );
            }
            Self::Unpaid => {
                qb.push("NOT EXISTS (SELECT 1 FROM payments px WHERE px.disclosure_id = d.id)");
            }
            Self::Paid => {
                qb.push("EXISTS (SELECT 1 FROM payments px WHERE px.disclosure_id = d.id)");
            }
        }
    }
}

/// Signature shared by every predicate fragment.
pub type PredicateFn = fn(&PaymentFilter, &EligibilityContext) -> Option<Predicate>;

/// A fragment with a stable name, used in logs and tests.
pub type NamedPredicate = (&'static str, PredicateFn);

/// Fragments for disclosures that can be paid now.
pub const ELIGIBLE: &[NamedPredicate] = &[
    ("scout", scout_filter),
    ("date_from", date_from_filter),
    ("date_to", date_to_filter),
    ("visit_result", visit_result_filter),
    ("rating", rating_filter),
    ("payment_start", payment_start_filter),
    ("has_no_payment", has_no_payment_filter),
];

/// Fragments for disclosures that were already paid.
pub const HISTORY: &[NamedPredicate] = &[
    ("scout", scout_filter),
    ("date_from", date_from_filter),
    ("date_to", date_to_filter),
    ("visit_result", visit_result_filter),
    ("rating", rating_filter),
    ("payment_start", payment_start_filter),
    ("has_payment", has_payment_filter),
];

/// Evaluate `fragments` against the filter, dropping absent ones.
pub fn collect(
    fragments: &[NamedPredicate],
    filter: &PaymentFilter,
    context: &EligibilityContext,
) -> Vec<Predicate> {
    fragments
        .iter()
        .filter_map(|(_, build)| build(filter, context))
        .collect()
}

/// Append ` WHERE p1 AND p2 ...` to `qb`.
pub fn push_where(qb: &mut QueryBuilder<'_, Postgres>, predicates: &[Predicate]) {
    if predicates.is_empty() {
        return;
    }
    qb.push(" WHERE ");
    for (i, predicate) in predicates.iter().enumerate() {
        if i > 0 {
            qb.push(" AND ");
        }
        predicate.push_sql(qb);
    }
}

/// Append the audit join that recovers when a disclosure was rated.
///
/// Only audit rows of the disclosure itself whose changed column is
/// rating-related and whose new value is set are considered.
pub fn push_audit_logs_join(qb: &mut QueryBuilder<'_, Postgres>) {
    qb.push(
        " LEFT JOIN audit_logs a ON a.record_id = d.id \
         AND a.new_value IS NOT NULL AND a.column_name = ANY(",
    );
    qb.push_bind(
        RATING_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>(),
    );
    qb.push(")");
}

/// Scout restriction. `validate` rejects filters carrying both forms.
pub fn scout_filter(filter: &PaymentFilter, _: &EligibilityContext) -> Option<Predicate> {
    if let Some(id) = filter.scout_id {
        return Some(Predicate::ScoutEq(id));
    }
    match &filter.scout_ids {
        Some(ids) if !ids.is_empty() => Some(Predicate::ScoutIn(ids.clone())),
        _ => None,
    }
}

/// Lower creation bound at the start of `date_from`.
pub fn date_from_filter(filter: &PaymentFilter, _: &EligibilityContext) -> Option<Predicate> {
    filter
        .date_from
        .map(|day| Predicate::CreatedOnOrAfter(start_of_day(day)))
}

/// Upper creation bound covering the whole of `date_to`.
pub fn date_to_filter(filter: &PaymentFilter, _: &EligibilityContext) -> Option<Predicate> {
    filter
        .date_to
        .and_then(day_after)
        .map(|next| Predicate::CreatedBefore(start_of_day(next)))
}

/// Only completed visits are payable.
pub fn visit_result_filter(_: &PaymentFilter, _: &EligibilityContext) -> Option<Predicate> {
    Some(Predicate::VisitCompleted)
}

/// Only rated disclosures are payable.
pub fn rating_filter(_: &PaymentFilter, _: &EligibilityContext) -> Option<Predicate> {
    Some(Predicate::Rated)
}

/// Disclosures from before the program start are never payable.
pub fn payment_start_filter(_: &PaymentFilter, ctx: &EligibilityContext) -> Option<Predicate> {
    Some(Predicate::CreatedAfter(ctx.program_start))
}

/// Drop disclosures that already have a ledger entry.
pub fn has_no_payment_filter(_: &PaymentFilter, _: &EligibilityContext) -> Option<Predicate> {
    Some(Predicate::Unpaid)
}

/// Keep only disclosures with a ledger entry.
pub fn has_payment_filter(_: &PaymentFilter, _: &EligibilityContext) -> Option<Predicate> {
    Some(Predicate::Paid)
}

fn day_after(day: NaiveDate) -> Option<NaiveDate> {
    day.checked_add_days(Days::new(1))
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}
