//! Repository implementations for all outreach entities.

pub mod audit;
pub mod disclosure;
pub mod employee;
pub mod payment;
pub mod reference;

pub use audit::AuditLogRepository;
pub use disclosure::DisclosureRepository;
pub use employee::EmployeeRepository;
pub use payment::{EligibilityContext, PaymentFilter, PaymentListing, PaymentRepository};
pub use reference::{ReferenceLookup, ReferenceRepository};
