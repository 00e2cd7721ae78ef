use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::models::{AmendmentType, ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_number};
use serde_json::Value;

/// Amendments; list results are returned as summaries only
pub struct AmendmentService<'a> {
    client: &'a CongressClient,
}

impl<'a> AmendmentService<'a> {
    pub fn new(client: &'a CongressClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, congress: u32, options: &ListOptions) -> Result<Value> {
        let congress = validate_congress(congress)?;
        fetch_list(
            self.client,
            &format!("/amendment/{}", congress),
            options,
            QueryParams::new(),
        )
        .await
    }

    pub async fn list_by_type(
        &self,
        congress: u32,
        amendment_type: AmendmentType,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        fetch_list(
            self.client,
            &format!("/amendment/{}/{}", congress, amendment_type),
            options,
            QueryParams::new(),
        )
        .await
    }

    pub async fn get(
        &self,
        congress: u32,
        amendment_type: AmendmentType,
        number: u32,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let number = validate_number("amendment_number", number)?;
        let endpoint = format!("/amendment/{}/{}/{}", congress, amendment_type, number);
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }
}
