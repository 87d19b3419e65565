//! # outreach-auth
//!
//! Authentication and authorization for the outreach back office.
//!
//! ## Modules
//!
//! - `jwt`: HS256 access token creation and validation
//! - `password`: Argon2id password hashing
//! - `rbac`: Role-to-permission policies and enforcement

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use rbac::{RbacEnforcer, RbacPolicies, SystemPermission};
