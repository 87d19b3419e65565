//! # outreach-database
//!
//! PostgreSQL connection management, schema migrations, and repository
//! implementations, including the scout payment eligibility engine.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
