//! Pagination query parameters.

use serde::{Deserialize, Serialize};

use outreach_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
///
/// Page numbers start at 0. Missing values fall back to the defaults and
/// the size is clamped to the allowed range.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (zero-based).
    pub page_number: Option<u32>,
    /// Items per page.
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::from_parts(self.page_number, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_core::types::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

    #[test]
    fn test_defaults_and_clamping() {
        let page = PaginationParams::default().into_page_request();
        assert_eq!(page.page_number, 0);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);

        let page = PaginationParams {
            page_number: Some(4),
            page_size: Some(1000),
        }
        .into_page_request();
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
        assert_eq!(page.offset(), 400);
    }
}
