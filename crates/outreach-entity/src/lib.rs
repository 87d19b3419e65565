//! # outreach-entity
//!
//! Domain entity models for the outreach backend. Every struct in this
//! crate represents a database row or a domain value object. Database
//! entities derive `sqlx::FromRow`; API-facing shapes serialize in
//! camelCase.

pub mod audit;
pub mod disclosure;
pub mod employee;
pub mod payment;
pub mod reference;
