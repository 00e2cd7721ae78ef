use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::models::{HouseCommunicationType, ListOptions, QueryParams, SenateCommunicationType};
use crate::utils::validation::{validate_congress, validate_number};
use serde_json::Value;

/// Executive communications, presidential messages, petitions and memorials
/// received by either chamber
pub struct CommunicationService<'a> {
    client: &'a CongressClient,
}

impl<'a> CommunicationService<'a> {
    pub fn new(client: &'a CongressClient) -> Self {
        Self { client }
    }

    pub async fn list_house(
        &self,
        congress: u32,
        communication_type: HouseCommunicationType,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/house-communication/{}/{}", congress, communication_type);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }

    pub async fn get_house(
        &self,
        congress: u32,
        communication_type: HouseCommunicationType,
        number: u32,
    ) -> Result<Value> {
        let endpoint = communication_path(
            "house-communication",
            congress,
            communication_type.as_str(),
            number,
        )?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    pub async fn list_senate(
        &self,
        congress: u32,
        communication_type: SenateCommunicationType,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/senate-communication/{}/{}", congress, communication_type);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }

    pub async fn get_senate(
        &self,
        congress: u32,
        communication_type: SenateCommunicationType,
        number: u32,
    ) -> Result<Value> {
        let endpoint = communication_path(
            "senate-communication",
            congress,
            communication_type.as_str(),
            number,
        )?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }
}

fn communication_path(resource: &str, congress: u32, kind: &str, number: u32) -> Result<String> {
    let congress = validate_congress(congress)?;
    let number = validate_number("communication_number", number)?;
    Ok(format!("/{}/{}/{}/{}", resource, congress, kind, number))
}
