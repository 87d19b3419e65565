//! Disclosure lifecycle enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Case status of a disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "disclosure_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DisclosureStatus {
    /// Case is open.
    Active,
    /// Case was withdrawn.
    Canceled,
    /// Case was closed.
    Finished,
}

impl DisclosureStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Canceled => "canceled",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for DisclosureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the scout's visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "visit_result", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VisitResult {
    /// Visit has not happened yet.
    NotCompleted,
    /// Visit was attempted but could not be carried out.
    CantBeCompleted,
    /// Visit was carried out.
    Completed,
}

impl VisitResult {
    /// Return the outcome as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotCompleted => "not_completed",
            Self::CantBeCompleted => "cant_be_completed",
            Self::Completed => "completed",
        }
    }

    /// Outcomes that require a free-text reason.
    pub fn requires_reason(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl fmt::Display for VisitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
