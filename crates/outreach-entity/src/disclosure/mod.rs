//! Outreach record ("disclosure") entities.

pub mod model;
pub mod status;

pub use model::Disclosure;
pub use status::{DisclosureStatus, VisitResult};
