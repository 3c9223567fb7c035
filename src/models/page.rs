//! Pagination request and page projection

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Parsed paging parameters. `page` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// Parse string-encoded paging parameters.
    ///
    /// Absent, non-numeric or negative pages fall back to 0; absent, non-numeric or
    /// non-positive sizes fall back to `DEFAULT_PAGE_SIZE`. Sizes are capped at `MAX_PAGE_SIZE`.
    pub fn parse(page: Option<&str>, size: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 0)
            .unwrap_or(0);
        let size = size
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|s| *s > 0)
            .map(|s| s.min(MAX_PAGE_SIZE))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page, size }
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of books
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub content: Vec<Book>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub page: i64,
    pub size: i64,
    pub number_of_elements: i64,
}

impl Page {
    pub fn new(content: Vec<Book>, total_elements: i64, request: PageRequest) -> Self {
        let total_pages = (total_elements + request.size - 1) / request.size;
        Self {
            number_of_elements: content.len() as i64,
            content,
            total_elements,
            total_pages,
            page: request.page,
            size: request.size,
        }
    }
}
