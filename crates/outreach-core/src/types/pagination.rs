//! Pagination types for list endpoints.
//!
//! Page numbers are zero-based: the SQL offset is always
//! `page_size * page_number`.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Default page number.
pub const DEFAULT_PAGE_NUMBER: u32 = 0;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Page number (zero-based).
    pub page_number: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl PageRequest {
    /// Create a new page request, clamping the size into `[1, MAX_PAGE_SIZE]`.
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Build a page request from optional query values.
    pub fn from_parts(page_number: Option<u32>, page_size: Option<u32>) -> Self {
        Self::new(
            page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        i64::from(self.page_size) * i64::from(self.page_number)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Number of items per page.
    pub page_size: u32,
    /// Current page number (zero-based).
    pub page_number: u32,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: &PageRequest, total_count: u64) -> Self {
        Self {
            items,
            total_count,
            page_size: page.page_size,
            page_number: page.page_number,
        }
    }

    /// Create an empty response.
    pub fn empty(page: &PageRequest) -> Self {
        Self::new(Vec::new(), page, 0)
    }

    /// Map every item on the page, keeping the paging metadata.
    pub fn map<U: Serialize>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            page_number: self.page_number,
        }
    }
}
