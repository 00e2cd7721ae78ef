//! Detail enrichment for list responses.
//!
//! List endpoints return summaries; the matching detail endpoints return the
//! full records. Enrichment fetches a bounded batch of details concurrently
//! and merges them into the summaries by position.

use crate::api::client::CongressClient;
use crate::api::models::JsonMap;
use crate::error::ApiError;
use futures::future::join_all;
use serde_json::Value;

/// Default fan-out cap for one enrichment batch.
pub const DEFAULT_MAX_CONCURRENT: usize = 20;

/// Key under which failed enrichments are reported.
pub const WARNINGS_KEY: &str = "_warnings";

impl CongressClient {
    /// Fetch several detail endpoints at once.
    ///
    /// Only the first `max_concurrent` endpoints are requested; the rest are
    /// dropped. The output has one entry per requested endpoint, `None` where
    /// the fetch failed with a per-item error (not found, other HTTP status,
    /// network failure). Every request runs to completion before this returns.
    ///
    /// # Errors
    ///
    /// `RateLimited` and `Unauthorized` from any request are returned rather
    /// than downgraded, as are `Decode` and `NotInitialized`. When several
    /// requests fail this way the first one in input order is reported.
    pub async fn fetch_details_concurrent(
        &self,
        endpoints: &[String],
        max_concurrent: usize,
    ) -> Result<Vec<Option<Value>>, ApiError> {
        let batch = &endpoints[..endpoints.len().min(max_concurrent)];

        let outcomes = join_all(batch.iter().map(|endpoint| self.fetch_detail(endpoint))).await;

        outcomes.into_iter().collect()
    }

    async fn fetch_detail(&self, endpoint: &str) -> Result<Option<Value>, ApiError> {
        match self.get(endpoint, None, None, 0).await {
            Ok(detail) => Ok(Some(detail)),
            Err(error) if error.is_item_failure() => {
                log::warn!("Failed to fetch details from {}: {}", endpoint, error);
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Merge detail records into the summaries of a list response.
    ///
    /// Reads the items under `result_key`, builds a detail endpoint for each
    /// of the first `max_concurrent` items with `build_endpoint`, fetches
    /// them concurrently and merges the payload found under `detail_key`
    /// into the summary (detail fields win). A payload wrapped in a
    /// non-empty list is unwrapped to its first element. Items whose fetch
    /// failed, or whose payload is not an object, are left untouched and
    /// reported under `_warnings`. Items past the cap, and items that are
    /// not objects, are left untouched without a warning.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_details_concurrent`](Self::fetch_details_concurrent).
    pub async fn enrich_list_response<F>(
        &self,
        mut list_response: Value,
        result_key: &str,
        detail_key: &str,
        build_endpoint: F,
        max_concurrent: usize,
    ) -> Result<Value, ApiError>
    where
        F: Fn(&JsonMap) -> String,
    {
        let targets: Vec<(usize, String)> = match list_response.get(result_key) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .take(max_concurrent)
                .filter_map(|(index, item)| {
                    item.as_object().map(|map| (index, build_endpoint(map)))
                })
                .collect(),
            _ => Vec::new(),
        };
        if targets.is_empty() {
            return Ok(list_response);
        }
        let endpoints: Vec<String> = targets.iter().map(|(_, endpoint)| endpoint.clone()).collect();

        let details = self
            .fetch_details_concurrent(&endpoints, max_concurrent)
            .await?;

        let mut warnings: Vec<String> = Vec::new();
        if let Some(Value::Array(items)) = list_response.get_mut(result_key) {
            for ((index, endpoint), detail) in targets.into_iter().zip(details) {
                let payload =
                    detail.and_then(|mut response| take_detail_payload(&mut response, detail_key));
                match (payload, items.get_mut(index)) {
                    (Some(fields), Some(Value::Object(summary))) => summary.extend(fields),
                    _ => warnings.push(format!("Failed to fetch details from {}", endpoint)),
                }
            }
        }

        if !warnings.is_empty() {
            log::warn!(
                "Enrichment incomplete for '{}': {} of {} item(s) failed",
                result_key,
                warnings.len(),
                endpoints.len()
            );
            if let Some(object) = list_response.as_object_mut() {
                object.insert(
                    WARNINGS_KEY.to_string(),
                    Value::Array(warnings.into_iter().map(Value::String).collect()),
                );
            }
        }

        Ok(list_response)
    }
}

/// The detail object under `detail_key`, unwrapping a one-element list.
fn take_detail_payload(response: &mut Value, detail_key: &str) -> Option<JsonMap> {
    let payload = match response.get_mut(detail_key)?.take() {
        Value::Array(list) => list.into_iter().next()?,
        other => other,
    };
    match payload {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Read an item field as path text: strings as-is, numbers formatted.
pub fn field_text(item: &JsonMap, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
