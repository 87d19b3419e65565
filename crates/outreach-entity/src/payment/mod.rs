//! Scout payment ledger entities and read models.

pub mod model;

pub use model::{DisclosurePayment, PaymentCandidateRow, PaymentLedgerEntry, RatingSummary};
