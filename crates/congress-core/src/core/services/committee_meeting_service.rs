use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{Chamber, ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_identifier};
use serde_json::Value;

/// Scheduled and past committee meetings
pub struct CommitteeMeetingService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> CommitteeMeetingService<'a> {
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

    /// Meetings with their agenda, location and related documents
    pub async fn list(&self, congress: u32, chamber: Chamber, options: &ListOptions) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/committee-meeting/{}/{}", congress, chamber);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "committeeMeetings",
                "committeeMeeting",
                |item| format!("{}/{}", endpoint, field_text(item, "eventId")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn get(&self, congress: u32, chamber: Chamber, event_id: &str) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let event_id = validate_identifier("event_id", event_id)?;
        let endpoint = format!("/committee-meeting/{}/{}/{}", congress, chamber, event_id);
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }
}
