//! Audit log entry entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::reference::ReferenceValue;

/// Kind of write that produced an audit row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "audit_action", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Insert,
    Update,
    Delete,
}

/// An immutable, column-level change record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// Source table (e.g. `"disclosures"`, `"visits"`).
    pub table_name: String,
    /// The disclosure this change belongs to.
    pub record_id: Uuid,
    /// Changed column.
    pub column_name: String,
    /// Serialized value before the change.
    pub old_value: Option<String>,
    /// Serialized value after the change.
    pub new_value: Option<String>,
    /// Insert, update or delete.
    pub action: AuditAction,
    /// The employee who made the change.
    pub created_by: Option<Uuid>,
    /// When the change was made.
    pub created_at: DateTime<Utc>,
}

/// Data required to append an audit row.
#[derive(Debug, Clone)]
pub struct CreateAuditLogEntry {
    pub table_name: String,
    pub record_id: Uuid,
    pub column_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub action: AuditAction,
    pub created_by: Option<Uuid>,
}

impl CreateAuditLogEntry {
    /// An update of one column from `old_value` to `new_value`.
    pub fn update(
        table_name: impl Into<String>,
        record_id: Uuid,
        column_name: impl Into<String>,
        old_value: Option<String>,
        new_value: Option<String>,
        created_by: Option<Uuid>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            record_id,
            column_name: column_name.into(),
            old_value,
            new_value,
            action: AuditAction::Update,
            created_by,
        }
    }
}

/// An audit entry with its foreign-key values resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditChange {
    /// The raw entry.
    #[serde(flatten)]
    pub entry: AuditLogEntry,
    /// Entity referenced by `old_value`, when the column is a foreign key.
    pub old_record_value: Option<ReferenceValue>,
    /// Entity referenced by `new_value`, when the column is a foreign key.
    pub new_record_value: Option<ReferenceValue>,
}

impl AuditChange {
    /// Wrap an entry without resolving anything.
    pub fn unresolved(entry: AuditLogEntry) -> Self {
        Self {
            entry,
            old_record_value: None,
            new_record_value: None,
        }
    }
}

/// All audit entries of one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDay {
    /// The day.
    pub date: NaiveDate,
    /// Entries of that day, oldest first.
    pub logs: Vec<AuditLogEntry>,
}
