use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{BillSubresource, BillType, ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_number};
use serde_json::Value;

/// Bills and resolutions
pub struct BillService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> BillService<'a> {
    pub fn new(client: &'a CongressClient) -> Self {
        Self {
            client,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Cap on detail fetches per list call
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// Bills of one Congress, each merged with its detail record
    pub async fn list(&self, congress: u32, options: &ListOptions) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/bill/{}", congress);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;

        let enriched = self
            .client
            .enrich_list_response(
                response,
                "bills",
                "bill",
                |item| {
                    format!(
                        "/bill/{}/{}/{}",
                        congress,
                        field_text(item, "type").to_lowercase(),
                        field_text(item, "number")
                    )
                },
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    /// Bills of one type in one Congress, each merged with its detail record
    pub async fn list_by_type(
        &self,
        congress: u32,
        bill_type: BillType,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/bill/{}/{}", congress, bill_type);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;

        let enriched = self
            .client
            .enrich_list_response(
                response,
                "bills",
                "bill",
                |item| format!("{}/{}", endpoint, field_text(item, "number")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn get(&self, congress: u32, bill_type: BillType, number: u32) -> Result<Value> {
        let endpoint = bill_path(congress, bill_type, number)?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    /// One sub-resource list of a bill (actions, cosponsors, text, ...)
    pub async fn subresource(
        &self,
        congress: u32,
        bill_type: BillType,
        number: u32,
        subresource: BillSubresource,
        options: &ListOptions,
    ) -> Result<Value> {
        let endpoint = format!(
            "{}/{}",
            bill_path(congress, bill_type, number)?,
            subresource
        );
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }
}

fn bill_path(congress: u32, bill_type: BillType, number: u32) -> Result<String> {
    let congress = validate_congress(congress)?;
    let number = validate_number("bill_number", number)?;
    Ok(format!("/bill/{}/{}/{}", congress, bill_type, number))
}
