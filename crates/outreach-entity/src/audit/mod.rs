//! Column-level audit trail entities.

pub mod model;

pub use model::{AuditAction, AuditChange, AuditDay, AuditLogEntry, CreateAuditLogEntry};

/// Audited table names.
pub mod tables {
    pub const DISCLOSURES: &str = "disclosures";
    pub const DISCLOSURES_TO_RATINGS: &str = "disclosures_to_ratings";
    pub const VISITS: &str = "visits";
    pub const DISCLOSURE_NOTES: &str = "disclosure_notes";
}

/// Audited column names.
pub mod columns {
    pub const SCOUT_ID: &str = "scout_id";
    pub const PRIORITY_ID: &str = "priority_id";
    pub const STATUS: &str = "status";
    pub const RATING_ID: &str = "rating_id";
    pub const IS_CUSTOM_RATING: &str = "is_custom_rating";
    pub const CUSTOM_RATING: &str = "custom_rating";
    pub const NOTE: &str = "note";

    /// Columns whose change marks a disclosure as rated.
    pub const RATING_COLUMNS: [&str; 3] = [RATING_ID, IS_CUSTOM_RATING, CUSTOM_RATING];
}
