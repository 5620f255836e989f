//! The uniform outbound response envelope.
//!
//! Every payload leaving the core boundary is wrapped in
//! `{status, message, data, meta?}`; `meta` is present only when the
//! call site requested pagination.

use serde::{Deserialize, Serialize};

use super::pagination::{PageRequest, Paginated};

/// Pagination metadata attached to paginated responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number (1-based).
    pub page_id: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of rows across all pages.
    pub total_count: u64,
    /// Whether another page exists beyond this one.
    pub has_next: bool,
}

impl PageMeta {
    /// Build metadata for one page.
    ///
    /// Invariant: `has_next == page_id * page_size < total_count`; on an
    /// exact boundary (`page_id * page_size == total_count`) there is no
    /// next page.
    pub fn new(page: &PageRequest, total_count: u64) -> Self {
        Self {
            page_id: page.page_id,
            page_size: page.page_size,
            total_count,
            has_next: page.page_id.saturating_mul(page.page_size) < total_count,
        }
    }
}

/// The outbound wrapper applied to every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Status code of the operation.
    pub status: u16,
    /// Human-readable message (empty on success).
    pub message: String,
    /// The payload.
    pub data: T,
    /// Pagination metadata, present only for paginated reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a plain (non-paginated) payload.
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            message: String::new(),
            data,
            meta: None,
        }
    }

    /// Wrap a freshly created resource.
    pub fn created(data: T) -> Self {
        Self {
            status: 201,
            message: String::new(),
            data,
            meta: None,
        }
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// Wrap a page of rows, attaching pagination metadata derived from
    /// the request and the count the data-access step already produced.
    pub fn paginated(page: Paginated<T>, request: &PageRequest) -> Self {
        Self {
            status: 200,
            message: String::new(),
            meta: Some(PageMeta::new(request, page.total_count)),
            data: page.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_next_follows_the_count_formula() {
        let page = PageRequest::new(1, 5);
        assert!(PageMeta::new(&page, 9).has_next);

        let page = PageRequest::new(2, 5);
        assert!(!PageMeta::new(&page, 9).has_next);
    }

    #[test]
    fn exact_boundary_has_no_next_page() {
        let page = PageRequest::new(3, 3);
        assert!(!PageMeta::new(&page, 9).has_next);
    }

    #[test]
    fn huge_page_ids_do_not_overflow_the_has_next_formula() {
        let page = PageRequest {
            page_id: u64::MAX,
            page_size: 100,
        };
        assert!(!PageMeta::new(&page, 9).has_next);
    }

    #[test]
    fn meta_is_absent_without_pagination() {
        let envelope = Envelope::ok(vec![1, 2, 3]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("meta").is_none());
        assert_eq!(json["status"], 200);
    }

    #[test]
    fn meta_is_present_for_paginated_reads() {
        let request = PageRequest::new(1, 2);
        let envelope = Envelope::paginated(Paginated::new(vec!["a", "b"], 5), &request);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["meta"]["total_count"], 5);
        assert_eq!(json["meta"]["has_next"], true);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }
}
