use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::models::{ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_number};
use serde_json::Value;

/// Presidential nominations sent to the Senate for confirmation
pub struct NominationService<'a> {
    client: &'a CongressClient,
}

impl<'a> NominationService<'a> {
    pub fn new(client: &'a CongressClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, congress: u32, options: &ListOptions) -> Result<Value> {
        let congress = validate_congress(congress)?;
        fetch_list(
            self.client,
            &format!("/nomination/{}", congress),
            options,
            QueryParams::new(),
        )
        .await
    }

    pub async fn get(&self, congress: u32, number: u32) -> Result<Value> {
        let endpoint = nomination_path(congress, number)?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    /// One nominee of a nomination that names several (e.g. military promotions)
    pub async fn nominee(&self, congress: u32, number: u32, ordinal: u32) -> Result<Value> {
        let ordinal = validate_number("ordinal", ordinal)?;
        let endpoint = format!("{}/{}", nomination_path(congress, number)?, ordinal);
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    pub async fn actions(&self, congress: u32, number: u32, options: &ListOptions) -> Result<Value> {
        self.sub_list(congress, number, "actions", options).await
    }

    pub async fn committees(
        &self,
        congress: u32,
        number: u32,
        options: &ListOptions,
    ) -> Result<Value> {
        self.sub_list(congress, number, "committees", options).await
    }

    /// Printed hearings held on the nomination
    pub async fn hearings(&self, congress: u32, number: u32, options: &ListOptions) -> Result<Value> {
        self.sub_list(congress, number, "hearings", options).await
    }

    async fn sub_list(
        &self,
        congress: u32,
        number: u32,
        name: &str,
        options: &ListOptions,
    ) -> Result<Value> {
        let endpoint = format!("{}/{}", nomination_path(congress, number)?, name);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }
}

fn nomination_path(congress: u32, number: u32) -> Result<String> {
    let congress = validate_congress(congress)?;
    let number = validate_number("nomination_number", number)?;
    Ok(format!("/nomination/{}/{}", congress, number))
}
