//! Resolution of foreign-key audit values into display references.
//!
//! Which `(table, column)` pairs hold a foreign key is decided by a fixed
//! table built once per resolver. Pairs missing from the table pass
//! through with `null` resolved values.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use uuid::Uuid;

use outreach_core::result::AppResult;
use outreach_database::repositories::reference::ReferenceLookup;
use outreach_entity::audit::{AuditChange, AuditLogEntry, columns, tables};
use outreach_entity::reference::{ReferenceKind, ReferenceValue};

/// Column name to reference kind, per audited table.
type ResolutionTable = HashMap<&'static str, HashMap<&'static str, ReferenceKind>>;

/// Turns raw audit rows into [`AuditChange`]s.
#[derive(Debug, Clone)]
pub struct AuditResolver {
    lookup: Arc<dyn ReferenceLookup>,
    table: ResolutionTable,
}

impl AuditResolver {
    /// Build a resolver over `lookup` with the standard resolution table.
    pub fn new(lookup: Arc<dyn ReferenceLookup>) -> Self {
        let entries = [
            (tables::DISCLOSURES, columns::SCOUT_ID, ReferenceKind::Employee),
            (tables::DISCLOSURES, columns::PRIORITY_ID, ReferenceKind::PriorityDegree),
            (tables::DISCLOSURES_TO_RATINGS, columns::RATING_ID, ReferenceKind::Rating),
        ];

        let mut table = ResolutionTable::new();
        for (table_name, column_name, kind) in entries {
            table.entry(table_name).or_default().insert(column_name, kind);
        }
        Self { lookup, table }
    }

    /// The lookup table a `(table, column)` pair resolves against, if any.
    pub fn kind_for(&self, table_name: &str, column_name: &str) -> Option<ReferenceKind> {
        self.table.get(table_name)?.get(column_name).copied()
    }

    /// Resolve every entry concurrently. Output order matches input order.
    pub async fn resolve_all(&self, entries: Vec<AuditLogEntry>) -> AppResult<Vec<AuditChange>> {
        try_join_all(entries.into_iter().map(|entry| self.resolve(entry))).await
    }

    /// Resolve one entry.
    pub async fn resolve(&self, entry: AuditLogEntry) -> AppResult<AuditChange> {
        let Some(kind) = self.kind_for(&entry.table_name, &entry.column_name) else {
            return Ok(AuditChange::unresolved(entry));
        };

        let (old_record_value, new_record_value) = futures::try_join!(
            self.lookup_value(kind, entry.old_value.as_deref()),
            self.lookup_value(kind, entry.new_value.as_deref()),
        )?;

        Ok(AuditChange {
            entry,
            old_record_value,
            new_record_value,
        })
    }

    async fn lookup_value(
        &self,
        kind: ReferenceKind,
        raw: Option<&str>,
    ) -> AppResult<Option<ReferenceValue>> {
        // Values that are not ids resolve to nothing.
        let Some(id) = raw.and_then(|v| Uuid::parse_str(v.trim()).ok()) else {
            return Ok(None);
        };
        self.lookup.find_reference(kind, id).await
    }
}
