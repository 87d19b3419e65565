//! Back-office sign-in.

pub mod service;

pub use service::{AuthService, LoginResult};
