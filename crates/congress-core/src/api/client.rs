use crate::api::models::QueryParams;
use crate::api::pagination::{self, AggregatedResults};
use crate::config::Config;
use crate::error::ApiError;
use crate::utils::error_helpers::{convert_json_error, convert_request_error};
use crate::utils::retry::{RetryPolicy, Sleeper, TokioSleeper, parse_retry_after};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

const USER_AGENT: &str = concat!("congress-cli/", env!("CARGO_PKG_VERSION"));

/// Async client for the Congress.gov API.
///
/// Handles authentication, rate-limit retries and pagination. The HTTP
/// connection pool only exists between [`open`](Self::open) and
/// [`close`](Self::close); requests on an unopened client fail with
/// [`ApiError::NotInitialized`]. Prefer [`scoped`](Self::scoped), which
/// closes the client on every exit path.
///
/// The client owns its pool and cannot be cloned; share it by reference.
///
/// ```compile_fail
/// fn shared<T: Clone>() {}
/// shared::<congress_core::api::client::CongressClient>();
/// ```
pub struct CongressClient {
    http: Option<Client>,
    config: Arc<Config>,
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl std::fmt::Debug for CongressClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CongressClient")
            .field("base_url", &self.config.base_url)
            .field("open", &self.is_open())
            .field("retry", &self.retry)
            .finish()
    }
}

impl CongressClient {
    /// Create an unopened client
    pub fn new(config: Arc<Config>) -> Self {
        let retry = RetryPolicy::from_config(&config);
        Self {
            http: None,
            config,
            retry,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replace the sleeper used between retries
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.http.is_some()
    }

    /// Acquire the HTTP connection pool
    pub fn open(&mut self) -> Result<(), ApiError> {
        if self.http.is_some() {
            return Ok(());
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(self.config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| convert_request_error(e, "client_init", self.timeout_secs()))?;

        self.http = Some(client);
        Ok(())
    }

    /// Release the connection pool; idle connections are closed on drop
    pub fn close(&mut self) {
        self.http = None;
    }

    /// Run one unit of work against an opened client.
    ///
    /// The client is moved into `work` and dropped when it finishes, so the
    /// connection pool is released on success, error and panic alike.
    pub async fn scoped<T, E, F, Fut>(config: Arc<Config>, work: F) -> Result<T, E>
    where
        E: From<ApiError>,
        F: FnOnce(CongressClient) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut client = CongressClient::new(config);
        client.open()?;
        work(client).await
    }

    /// Query string for one request: caller parameters plus authentication,
    /// format, clamped limit and offset. `params` is never modified.
    pub fn build_query(
        &self,
        params: Option<&QueryParams>,
        limit: Option<u32>,
        offset: u32,
    ) -> QueryParams {
        let mut query = params.cloned().unwrap_or_default();
        query.insert("api_key".to_string(), self.config.api_key.clone());
        query.insert("format".to_string(), "json".to_string());
        if let Some(limit) = limit {
            query.insert(
                "limit".to_string(),
                limit.min(self.config.max_limit).to_string(),
            );
        }
        query.insert("offset".to_string(), offset.to_string());
        query
    }

    /// Authenticated GET with rate-limit retries.
    ///
    /// Returns the decoded body; when the body reports a total count a
    /// normalized `pagination_info` block is added.
    ///
    /// # Errors
    ///
    /// `NotFound` (404), `Unauthorized` (401/403), `RateLimited` (429 after
    /// `max_retries` retries), `Http` (any other non-200), `Timeout` or
    /// `Transport` for network failures, `Decode` for a non-JSON body and
    /// `NotInitialized` before [`open`](Self::open).
    pub async fn get(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<Value, ApiError> {
        let http = self.http.as_ref().ok_or(ApiError::NotInitialized)?;

        let query = self.build_query(params, limit, offset);
        let effective_limit = limit
            .map(|l| l.min(self.config.max_limit))
            .unwrap_or(self.config.default_limit);
        let url = format!("{}{}", self.config.base_url, endpoint);

        let mut backoff = self.retry.backoff();
        let mut attempt: u32 = 0;

        loop {
            log::debug!(
                "GET {} (attempt {}, offset {}, limit {})",
                endpoint,
                attempt + 1,
                offset,
                effective_limit
            );

            let response = http
                .get(&url)
                .query(&query)
                .send()
                .await
                .map_err(|e| convert_request_error(e, endpoint, self.timeout_secs()))?;

            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                let mut body = self.handle_response(response, endpoint).await?;
                pagination::annotate(&mut body, u64::from(offset), u64::from(effective_limit));
                return Ok(body);
            }

            if attempt >= self.retry.max_retries {
                log::warn!(
                    "Rate limit exceeded for {} after {} attempt(s), giving up",
                    endpoint,
                    attempt + 1
                );
                return Err(ApiError::RateLimited {
                    endpoint: endpoint.to_string(),
                    attempts: attempt + 1,
                });
            }

            let retry_after = parse_retry_after(response.headers());
            let delay = self.retry.next_delay(&mut backoff, retry_after);
            log::warn!(
                "Rate limited on {} (retry {}/{}), waiting {:?}{}",
                endpoint,
                attempt + 1,
                self.retry.max_retries,
                delay,
                if retry_after.is_some() {
                    " as requested by Retry-After"
                } else {
                    ""
                }
            );
            self.sleeper.sleep(delay).await;
            attempt += 1;
        }
    }

    /// Fetch every page of `endpoint`, optionally stopping at `max_results`.
    ///
    /// Pages are requested with `min(max_results, max_limit)` items each.
    /// Stops when enough items are collected, when the reported total is
    /// reached, or when a page comes back empty.
    pub async fn get_all(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
        max_results: Option<usize>,
    ) -> Result<AggregatedResults, ApiError> {
        let max_results = max_results.filter(|&n| n > 0);
        let max_limit = self.config.max_limit;
        // A zero page size would never advance the offset.
        let batch_size = max_results
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX).min(max_limit))
            .unwrap_or(max_limit)
            .max(1);

        let mut all_results: Vec<Value> = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let response = self
                .get(endpoint, params, Some(batch_size), offset)
                .await?;

            let page = pagination::extract_results(&response);
            let page_len = page.len();
            all_results.extend_from_slice(page);

            if let Some(max) = max_results {
                if all_results.len() >= max {
                    all_results.truncate(max);
                    break;
                }
            }

            let total_count = pagination::total_count(&response).unwrap_or(0);
            if u64::from(offset) + u64::from(batch_size) >= total_count || page_len == 0 {
                break;
            }

            offset = match offset.checked_add(batch_size) {
                Some(next) => next,
                None => {
                    log::warn!("Offset overflow on {}, stopping at {}", endpoint, offset);
                    break;
                }
            };
        }

        log::info!(
            "Collected {} result(s) from {}",
            all_results.len(),
            endpoint
        );
        Ok(AggregatedResults::new(all_results))
    }

    async fn handle_response(&self, response: Response, endpoint: &str) -> Result<Value, ApiError> {
        let status = response.status();

        if status == StatusCode::OK {
            let body = response
                .text()
                .await
                .map_err(|e| convert_request_error(e, endpoint, self.timeout_secs()))?;
            let value = serde_json::from_str::<Value>(&body)
                .map_err(|e| convert_json_error(e, endpoint))?;
            log::info!("GET {} -> {}", endpoint, status.as_u16());
            return Ok(value);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        log::warn!("GET {} -> {}", endpoint, status.as_u16());

        match status.as_u16() {
            404 => Err(ApiError::NotFound {
                endpoint: endpoint.to_string(),
            }),
            401 | 403 => Err(ApiError::Unauthorized {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                server_message: error_text,
            }),
            _ => Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: error_text,
            }),
        }
    }

    fn timeout_secs(&self) -> u64 {
        self.config.timeout.as_secs()
    }
}
