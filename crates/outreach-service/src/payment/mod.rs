//! Scout payment use cases.

pub mod service;

pub use service::{MarkPaidRequest, PaymentService};
