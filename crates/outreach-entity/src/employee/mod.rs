//! Field staff entities.

pub mod model;
pub mod role;

pub use model::{CreateEmployee, Employee};
pub use role::EmployeeRole;
