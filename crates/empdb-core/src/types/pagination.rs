//! Pagination types for list reads.

use serde::{Deserialize, Serialize};

/// Default page size, used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 25;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page_id")]
    pub page_id: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request, clamping out-of-range values.
    pub fn new(page_id: u64, page_size: u64) -> Self {
        Self {
            page_id: page_id.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate the SQL `OFFSET` value. Saturates instead of
    /// overflowing on absurd page numbers.
    pub fn offset(&self) -> u64 {
        self.page_id.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_id: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A page of rows together with the total row count for the table or
/// filter that produced it.
///
/// Returned by the data-access layer in one piece so the response
/// shaping step never needs a second count query or a shared mutable
/// side channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The rows on this page.
    pub rows: Vec<T>,
    /// Total number of rows across all pages.
    pub total_count: u64,
}

impl<T> Paginated<T> {
    /// Bundle rows with their total count.
    pub fn new(rows: Vec<T>, total_count: u64) -> Self {
        Self { rows, total_count }
    }
}

fn default_page_id() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based_from_one_based_pages() {
        assert_eq!(PageRequest::new(1, 5).offset(), 0);
        assert_eq!(PageRequest::new(2, 5).offset(), 5);
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let page = PageRequest::new(0, 0);
        assert_eq!(page.page_id, 1);
        assert_eq!(page.page_size, 1);

        let page = PageRequest::new(1, 10_000);
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn huge_page_ids_saturate_instead_of_overflowing() {
        let page = PageRequest {
            page_id: u64::MAX,
            page_size: 100,
        };
        assert_eq!(page.offset(), u64::MAX);
    }

    #[test]
    fn default_uses_system_page_size() {
        let page = PageRequest::default();
        assert_eq!(page.page_id, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.limit(), DEFAULT_PAGE_SIZE);
    }
}
