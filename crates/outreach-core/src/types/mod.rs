//! Core type definitions shared across the workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
