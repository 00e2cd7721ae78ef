use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::models::{ListOptions, QueryParams};
use crate::utils::validation::validate_number;
use serde_json::Value;

/// Statutory reporting requirements agencies owe the House
pub struct HouseRequirementService<'a> {
    client: &'a CongressClient,
}

impl<'a> HouseRequirementService<'a> {
    pub fn new(client: &'a CongressClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListOptions) -> Result<Value> {
        fetch_list(self.client, "/house-requirement", options, QueryParams::new()).await
    }

    pub async fn get(&self, number: u32) -> Result<Value> {
        let number = validate_number("requirement_number", number)?;
        Ok(self
            .client
            .get(&format!("/house-requirement/{}", number), None, None, 0)
            .await?)
    }

    /// Executive communications submitted to fulfil the requirement
    pub async fn communications(&self, number: u32, options: &ListOptions) -> Result<Value> {
        let number = validate_number("requirement_number", number)?;
        let endpoint = format!("/house-requirement/{}/matching-communications", number);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }
}
