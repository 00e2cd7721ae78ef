use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{ListOptions, QueryParams};
use crate::error::ApiError;
use crate::utils::validation::validate_identifier;
use serde_json::Value;

/// Congressional Research Service reports
pub struct CrsReportService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> CrsReportService<'a> {
    pub fn new(client: &'a CongressClient) -> Self {
        Self {
            client,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// Reports with their authors, summary and text links
    pub async fn list(&self, options: &ListOptions) -> Result<Value> {
        let response = fetch_list(self.client, "/crsreport", options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "crsReports",
                "crsReport",
                |item| format!("/crsreport/{}", field_text(item, "reportNumber")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    /// One report by number: R47000, RL33614, RS22000, IF12345 ...
    pub async fn get(&self, report_number: &str) -> Result<Value> {
        let report_number = validate_identifier("report_number", report_number)?;
        let endpoint = format!("/crsreport/{}", report_number);
        self.client
            .get(&endpoint, None, None, 0)
            .await
            .map_err(unknown_report_as_not_found)
            .map_err(Into::into)
    }
}

/// The API answers an unknown report number with a 500 whose body mentions
/// `NoneType`.
fn unknown_report_as_not_found(error: ApiError) -> ApiError {
    match error {
        ApiError::Http {
            status: 500,
            endpoint,
            message,
        } if message.contains("NoneType") => ApiError::NotFound { endpoint },
        other => other,
    }
}
