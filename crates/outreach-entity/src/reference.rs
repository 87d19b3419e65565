//! Display-friendly references to entities owned elsewhere.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An `{id, name}` pair used wherever a foreign key is shown to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ReferenceValue {
    /// Referenced entity id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

impl ReferenceValue {
    /// Create a new reference.
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Lookup tables a foreign-key value can be resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// `employees` (id → name).
    Employee,
    /// `priority_degrees` (id → name).
    PriorityDegree,
    /// `ratings` (id → name).
    Rating,
}

impl ReferenceKind {
    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Employee => "employees",
            Self::PriorityDegree => "priority_degrees",
            Self::Rating => "ratings",
        }
    }
}
