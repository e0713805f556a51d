//! Page-by-page loading of record collections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::api_error::ApiError;
use crate::domain::common::Record;

/// Rows requested per page, shared by every collection.
pub const PAGE_SIZE: usize = 500;

/// Query string of a list request: `limit=500&page=N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub limit: usize,
    pub page: u32,
}

impl ListQuery {
    pub fn for_page(page: u32) -> Self {
        Self {
            limit: PAGE_SIZE,
            page: page.max(1),
        }
    }
}

/// Body of `GET /api/{collection}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Record>,
    #[serde(default)]
    pub total_count: Option<i64>,
}

/// One successfully loaded page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLoad {
    pub records: Vec<Record>,
    pub has_more: bool,
    pub total_count: Option<i64>,
}

impl PageLoad {
    /// Interprets a list response body.
    ///
    /// A body without a `data` array is malformed. `has_more` is true only
    /// when a full page came back.
    pub fn from_body(body: Value, page_size: usize) -> Result<Self, ApiError> {
        match body.get("data") {
            Some(Value::Array(_)) => {}
            _ => {
                return Err(ApiError::Malformed(
                    "API response did not contain a 'data' array".to_string(),
                ))
            }
        }
        let response: ListResponse =
            serde_json::from_value(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
        let has_more = response.data.len() == page_size;
        Ok(Self {
            records: response.data,
            has_more,
            total_count: response.total_count,
        })
    }
}

/// Pagination cursor of one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based.
    pub page: u32,
    pub page_size: usize,
    pub has_more: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            has_more: false,
        }
    }
}

impl PageState {
    pub fn query(&self) -> ListQuery {
        ListQuery {
            limit: self.page_size,
            page: self.page,
        }
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    /// Advances when more rows are known to exist. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.has_more {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
        self.has_more = false;
    }
}

/// Monotonic ticket issued per list request.
///
/// Only the newest ticket may apply its response, so a slow response for an
/// old page can't overwrite the page the user moved to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Everything a list page renders: cursor, rows, loading and error flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordListState {
    pub paging: PageState,
    pub records: Vec<Record>,
    pub total_count: Option<i64>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub sequencer: RequestSequencer,
    /// Page the rows on screen came from.
    pub shown_page: Option<u32>,
}

impl RecordListState {
    /// Starts a load and returns its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.is_loading = true;
        self.sequencer.begin()
    }

    /// Applies a finished load. Returns `false` when the ticket is stale and
    /// the outcome was dropped.
    ///
    /// Success replaces the rows wholesale. A malformed body clears them; a
    /// transport or HTTP failure keeps the rows already on screen and moves
    /// the cursor back to their page. Either failure stops further "next
    /// page" attempts.
    pub fn apply(&mut self, ticket: u64, outcome: Result<PageLoad, ApiError>) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        match outcome {
            Ok(load) => {
                self.records = load.records;
                self.paging.has_more = load.has_more;
                self.total_count = load.total_count;
                self.error = None;
                self.shown_page = Some(self.paging.page);
            }
            Err(err @ ApiError::Malformed(_)) => {
                self.records.clear();
                self.paging.has_more = false;
                self.error = Some(err.to_string());
                self.shown_page = None;
            }
            Err(err) => {
                if let Some(page) = self.shown_page {
                    self.paging.page = page;
                }
                self.paging.has_more = false;
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Back to page 1 for a different record collection.
    pub fn reset(&mut self) {
        self.paging.reset();
        self.records.clear();
        self.total_count = None;
        self.error = None;
        self.shown_page = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(count: usize) -> Value {
        Value::Array((0..count).map(|i| json!({"id": i + 1})).collect())
    }

    #[test]
    fn query_carries_page_and_fixed_size() {
        for page in [1u32, 2, 17] {
            let q = ListQuery::for_page(page);
            assert_eq!(q.page, page);
            assert_eq!(q.limit, PAGE_SIZE);
        }
        assert_eq!(ListQuery::for_page(0).page, 1);
        assert_eq!(PageState::default().query(), ListQuery::for_page(1));
    }

    #[test]
    fn full_page_has_more_short_page_does_not() {
        let full = PageLoad::from_body(json!({"data": rows(500), "total_count": 637}), PAGE_SIZE)
            .unwrap();
        assert!(full.has_more);
        assert_eq!(full.records.len(), 500);
        assert_eq!(full.total_count, Some(637));

        let short = PageLoad::from_body(json!({"data": rows(137), "total_count": 637}), PAGE_SIZE)
            .unwrap();
        assert!(!short.has_more);

        let empty = PageLoad::from_body(json!({"data": []}), PAGE_SIZE).unwrap();
        assert!(!empty.has_more);
        assert_eq!(empty.total_count, None);
    }

    #[test]
    fn body_without_data_array_is_malformed() {
        for body in [
            json!({"message": "boom"}),
            json!({"data": {"id": 1}}),
            json!([{"id": 1}]),
            Value::Null,
        ] {
            assert!(matches!(
                PageLoad::from_body(body, PAGE_SIZE),
                Err(ApiError::Malformed(_))
            ));
        }
    }

    #[test]
    fn paging_walks_forward_only_while_more_exist() {
        let mut paging = PageState::default();
        assert!(!paging.prev());
        assert!(!paging.next());

        paging.has_more = true;
        assert!(paging.next());
        assert_eq!(paging.page, 2);
        assert!(paging.prev());
        assert_eq!(paging.page, 1);

        paging.page = 5;
        paging.reset();
        assert_eq!(paging.page, 1);
        assert!(!paging.has_more);
    }

    #[test]
    fn delinquency_pages_example() {
        let mut state = RecordListState::default();

        let ticket = state.begin_load();
        let page1 = PageLoad::from_body(json!({"data": rows(500)}), PAGE_SIZE);
        assert!(state.apply(ticket, page1));
        assert!(state.paging.has_more);

        assert!(state.paging.next());
        let ticket = state.begin_load();
        let page2 = PageLoad::from_body(json!({"data": rows(137)}), PAGE_SIZE);
        assert!(state.apply(ticket, page2));
        assert_eq!(state.paging.page, 2);
        assert!(!state.paging.has_more);
        assert_eq!(state.records.len(), 137);
        assert!(!state.is_loading);
    }

    #[test]
    fn malformed_body_clears_rows_network_error_keeps_them() {
        let mut state = RecordListState::default();
        let ticket = state.begin_load();
        state.apply(ticket, PageLoad::from_body(json!({"data": rows(500)}), PAGE_SIZE));

        let ticket = state.begin_load();
        state.apply(ticket, Err(ApiError::Network("offline".into())));
        assert_eq!(state.records.len(), 500);
        assert!(!state.paging.has_more);
        assert_eq!(state.error.as_deref(), Some("Network error: offline"));

        let ticket = state.begin_load();
        state.apply(ticket, PageLoad::from_body(json!({"oops": true}), PAGE_SIZE));
        assert!(state.records.is_empty());
        assert!(!state.paging.has_more);
        assert!(state.error.is_some());
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut state = RecordListState::default();
        let slow = state.begin_load();
        let fast = state.begin_load();

        assert!(state.apply(fast, PageLoad::from_body(json!({"data": rows(3)}), PAGE_SIZE)));
        assert!(!state.apply(slow, PageLoad::from_body(json!({"data": rows(500)}), PAGE_SIZE)));
        assert_eq!(state.records.len(), 3);
    }

    #[test]
    fn failed_next_page_returns_cursor_to_rows_on_screen() {
        let mut state = RecordListState::default();
        let ticket = state.begin_load();
        state.apply(ticket, PageLoad::from_body(json!({"data": rows(500)}), PAGE_SIZE));

        assert!(state.paging.next());
        assert_eq!(state.paging.page, 2);
        let ticket = state.begin_load();
        state.apply(ticket, Err(ApiError::from_status(502, "")));

        assert_eq!(state.paging.page, 1);
        assert_eq!(state.paging.query().page, 1);
        assert_eq!(state.records.len(), 500);
        assert_eq!(state.error.as_deref(), Some("HTTP error! status: 502"));
    }
}
