use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{ListOptions, QueryParams};
use crate::error::ValidationError;
use crate::utils::validation::{validate_number, validate_record_date};
use serde_json::Value;

/// Daily and bound editions of the Congressional Record
pub struct CongressionalRecordService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> CongressionalRecordService<'a> {
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

    /// Most recent daily issues
    pub async fn daily(&self, options: &ListOptions) -> Result<Value> {
        fetch_list(
            self.client,
            "/daily-congressional-record",
            options,
            QueryParams::new(),
        )
        .await
    }

    /// Daily issues of one volume, each merged with its sections
    pub async fn daily_volume(&self, volume: u32, options: &ListOptions) -> Result<Value> {
        let volume = validate_number("volume_number", volume)?;
        let endpoint = format!("/daily-congressional-record/{}", volume);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "dailyCongressionalRecord",
                "dailyCongressionalRecord",
                |item| format!("{}/{}", endpoint, field_text(item, "issueNumber")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn daily_issue(&self, volume: u32, issue: u32) -> Result<Value> {
        let endpoint = issue_path(volume, issue)?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    /// Floor proceedings, extensions of remarks and digest entries of one issue
    pub async fn daily_articles(
        &self,
        volume: u32,
        issue: u32,
        options: &ListOptions,
    ) -> Result<Value> {
        let endpoint = format!("{}/articles", issue_path(volume, issue)?);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }

    /// Bound edition, narrowed by year, month and day as given.
    /// A day requires a month; a month requires a year.
    pub async fn bound(
        &self,
        year: Option<u32>,
        month: Option<u32>,
        day: Option<u32>,
        options: &ListOptions,
    ) -> Result<Value> {
        let endpoint = bound_path(year, month, day)?;
        if day.is_some() {
            return Ok(self.client.get(&endpoint, None, None, 0).await?);
        }
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }
}

fn issue_path(volume: u32, issue: u32) -> Result<String> {
    let volume = validate_number("volume_number", volume)?;
    let issue = validate_number("issue_number", issue)?;
    Ok(format!("/daily-congressional-record/{}/{}", volume, issue))
}

fn bound_path(year: Option<u32>, month: Option<u32>, day: Option<u32>) -> Result<String> {
    let mut endpoint = "/bound-congressional-record".to_string();
    let Some(year) = year else {
        if month.is_some() || day.is_some() {
            return Err(ValidationError::InvalidValue {
                field: "year".to_string(),
                reason: "is required when a month or day is given".to_string(),
            }
            .into());
        }
        return Ok(endpoint);
    };
    if day.is_some() && month.is_none() {
        return Err(ValidationError::InvalidValue {
            field: "month".to_string(),
            reason: "is required when a day is given".to_string(),
        }
        .into());
    }
    validate_record_date(year, month, day)?;

    endpoint.push_str(&format!("/{}", year));
    for part in [month, day].into_iter().flatten() {
        endpoint.push_str(&format!("/{}", part));
    }
    Ok(endpoint)
}
