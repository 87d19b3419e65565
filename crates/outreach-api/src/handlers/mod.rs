//! Route handlers organized by domain.

pub mod audit;
pub mod auth;
pub mod health;
pub mod payment;
