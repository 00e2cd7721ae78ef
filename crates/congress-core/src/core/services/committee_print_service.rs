use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{Chamber, ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_number};
use serde_json::Value;

/// Committee prints: studies, compilations and other documents that are not reports
pub struct CommitteePrintService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> CommitteePrintService<'a> {
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

    pub async fn list(&self, congress: u32, chamber: Chamber, options: &ListOptions) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/committee-print/{}/{}", congress, chamber);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "committeePrints",
                "committeePrint",
                |item| format!("{}/{}", endpoint, field_text(item, "jacketNumber")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn get(&self, congress: u32, chamber: Chamber, jacket_number: u32) -> Result<Value> {
        let endpoint = print_path(congress, chamber, jacket_number)?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    pub async fn text(&self, congress: u32, chamber: Chamber, jacket_number: u32) -> Result<Value> {
        let endpoint = format!("{}/text", print_path(congress, chamber, jacket_number)?);
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }
}

fn print_path(congress: u32, chamber: Chamber, jacket_number: u32) -> Result<String> {
    let congress = validate_congress(congress)?;
    let jacket_number = validate_number("jacket_number", jacket_number)?;
    Ok(format!(
        "/committee-print/{}/{}/{}",
        congress, chamber, jacket_number
    ))
}
