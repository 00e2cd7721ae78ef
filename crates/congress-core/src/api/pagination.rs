//! Pagination metadata and result extraction.
//!
//! The Congress.gov API reports totals under `pagination.count` and returns
//! the page's items under a resource-specific top-level key.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Key under which the normalized pagination block is added to responses.
pub const PAGINATION_INFO_KEY: &str = "pagination_info";

/// Top-level keys that may hold a page of results, checked in order.
pub const RESULT_KEYS: &[&str] = &[
    "bills",
    "amendments",
    "members",
    "committees",
    "nominations",
    "treaties",
    "hearings",
    "reports",
    "summaries",
    "laws",
    "communications",
    "houseCommunications",
    "senateCommunications",
    "committeeMeetings",
    "committeePrints",
    "committeeReports",
    "congressionalRecord",
    "dailyCongressionalRecord",
    "boundCongressionalRecord",
    "houseRequirements",
    "crsReports",
    "houseVotes",
    "congresses",
    "results",
];

/// Normalized view of the API's native `pagination` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total_count: u64,
    pub has_more: bool,
    pub next_offset: Option<u64>,
}

impl PageInfo {
    pub fn new(total_count: u64, offset: u64, limit: u64) -> Self {
        let has_more = offset.saturating_add(limit) < total_count;
        Self {
            total_count,
            has_more,
            next_offset: has_more.then(|| offset + limit),
        }
    }

    /// Derive page info from a response body, if it reports a total count.
    pub fn from_response(response: &Value, offset: u64, limit: u64) -> Option<Self> {
        total_count(response).map(|total| Self::new(total, offset, limit))
    }
}

/// `pagination.count` from a response body.
pub fn total_count(response: &Value) -> Option<u64> {
    response.get("pagination")?.get("count")?.as_u64()
}

/// Add the normalized pagination block next to the native one.
///
/// Leaves bodies without a total count untouched.
pub fn annotate(response: &mut Value, offset: u64, limit: u64) {
    let Some(info) = PageInfo::from_response(response, offset, limit) else {
        return;
    };
    if let Some(object) = response.as_object_mut() {
        object.insert(
            PAGINATION_INFO_KEY.to_string(),
            json!({
                "total_count": info.total_count,
                "has_more": info.has_more,
                "next_offset": info.next_offset,
            }),
        );
    }
}

/// The page's items from the first matching result key.
///
/// The first key present wins; if its value is not a list the page is
/// treated as empty.
pub fn extract_results(response: &Value) -> &[Value] {
    RESULT_KEYS
        .iter()
        .find_map(|key| response.get(*key))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Fully materialized multi-page result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResults {
    pub results: Vec<Value>,
    pub count: usize,
}

impl AggregatedResults {
    pub fn new(results: Vec<Value>) -> Self {
        let count = results.len();
        Self { results, count }
    }

    pub fn into_value(self) -> Value {
        json!({ "results": self.results, "count": self.count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_has_more() {
        let info = PageInfo::new(100, 0, 20);
        assert!(info.has_more);
        assert_eq!(info.next_offset, Some(20));

        let info = PageInfo::new(100, 80, 20);
        assert!(!info.has_more);
        assert_eq!(info.next_offset, None);

        let info = PageInfo::new(0, 0, 20);
        assert!(!info.has_more);
    }

    #[test]
    fn test_annotate_adds_block_alongside_native_pagination() {
        let mut response = json!({
            "bills": [],
            "pagination": {"count": 100, "next": "/bill/118?offset=20"}
        });
        annotate(&mut response, 0, 20);

        assert_eq!(response["pagination"]["count"], 100);
        assert_eq!(
            response[PAGINATION_INFO_KEY],
            json!({"total_count": 100, "has_more": true, "next_offset": 20})
        );
    }

    #[test]
    fn test_annotate_without_count_is_noop() {
        let mut response = json!({"bill": {"number": 1}});
        let before = response.clone();
        annotate(&mut response, 0, 20);
        assert_eq!(response, before);

        let mut response = json!({"pagination": {"next": null}});
        annotate(&mut response, 0, 20);
        assert!(response.get(PAGINATION_INFO_KEY).is_none());
    }

    #[test]
    fn test_extract_results_various_keys() {
        for key in ["bills", "members", "amendments", "committees", "houseVotes"] {
            let response = json!({ key: [{"id": 1}], "pagination": {"count": 1} });
            assert_eq!(extract_results(&response), &[json!({"id": 1})], "key {}", key);
        }
    }

    #[test]
    fn test_extract_results_first_key_wins() {
        let response = json!({"results": [{"id": 2}], "bills": [{"id": 1}]});
        assert_eq!(extract_results(&response), &[json!({"id": 1})]);
    }

    #[test]
    fn test_extract_results_non_list_is_empty() {
        let response = json!({"bills": {"id": 1}});
        assert!(extract_results(&response).is_empty());
        assert!(extract_results(&json!({"unknown": [1, 2]})).is_empty());
    }

    #[test]
    fn test_aggregated_results_value() {
        let aggregated = AggregatedResults::new(vec![json!(1), json!(2)]);
        assert_eq!(aggregated.count, 2);
        assert_eq!(
            aggregated.into_value(),
            json!({"results": [1, 2], "count": 2})
        );
    }
}
