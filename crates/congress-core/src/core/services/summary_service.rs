use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::models::{BillType, ListOptions, QueryParams};
use crate::utils::validation::validate_congress;
use serde_json::Value;

/// CRS bill summaries.
///
/// The API only returns summaries inside a date window, so callers should
/// set `from_date`/`to_date` on the [`ListOptions`]; a request without one
/// is sent as-is and usually comes back empty.
pub struct SummaryService<'a> {
    client: &'a CongressClient,
}

impl<'a> SummaryService<'a> {
    pub fn new(client: &'a CongressClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListOptions) -> Result<Value> {
        self.fetch("/summaries".to_string(), options).await
    }

    pub async fn list_by_congress(&self, congress: u32, options: &ListOptions) -> Result<Value> {
        let congress = validate_congress(congress)?;
        self.fetch(format!("/summaries/{}", congress), options).await
    }

    pub async fn list_by_type(
        &self,
        congress: u32,
        bill_type: BillType,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        self.fetch(format!("/summaries/{}/{}", congress, bill_type), options)
            .await
    }

    async fn fetch(&self, endpoint: String, options: &ListOptions) -> Result<Value> {
        if options.from_date.is_none() && options.to_date.is_none() {
            log::debug!("{} requested without a date range", endpoint);
        }
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }
}
