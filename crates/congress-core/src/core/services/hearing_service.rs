use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{Chamber, ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_number};
use serde_json::Value;

/// Published committee hearing transcripts
pub struct HearingService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> HearingService<'a> {
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

    /// Hearings of one Congress; without a chamber both chambers are listed
    /// and each item's own chamber is used for its detail record
    pub async fn list(
        &self,
        congress: u32,
        chamber: Option<Chamber>,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = match chamber {
            Some(chamber) => format!("/hearing/{}/{}", congress, chamber),
            None => format!("/hearing/{}", congress),
        };
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "hearings",
                "hearing",
                |item| {
                    let item_chamber = match chamber {
                        Some(chamber) => chamber.as_str().to_string(),
                        None => field_text(item, "chamber").to_lowercase(),
                    };
                    format!(
                        "/hearing/{}/{}/{}",
                        congress,
                        item_chamber,
                        field_text(item, "jacketNumber")
                    )
                },
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn get(&self, congress: u32, chamber: Chamber, jacket_number: u32) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let jacket_number = validate_number("jacket_number", jacket_number)?;
        let endpoint = format!("/hearing/{}/{}/{}", congress, chamber, jacket_number);
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }
}
