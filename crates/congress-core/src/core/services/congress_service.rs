use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{ListOptions, QueryParams};
use crate::utils::validation::validate_congress;
use serde_json::Value;

/// Congresses and their sessions
pub struct CongressService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> CongressService<'a> {
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

    pub async fn list(&self, options: &ListOptions) -> Result<Value> {
        let response = fetch_list(self.client, "/congress", options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "congresses",
                "congress",
                |item| format!("/congress/{}", field_text(item, "number")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn get(&self, congress: u32) -> Result<Value> {
        let congress = validate_congress(congress)?;
        Ok(self
            .client
            .get(&format!("/congress/{}", congress), None, None, 0)
            .await?)
    }

    /// The Congress now in session
    pub async fn current(&self) -> Result<Value> {
        Ok(self.client.get("/congress/current", None, None, 0).await?)
    }
}
