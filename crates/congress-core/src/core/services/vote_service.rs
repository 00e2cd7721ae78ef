use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_number, validate_session};
use serde_json::Value;

/// House roll call votes
pub struct VoteService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> VoteService<'a> {
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

    /// Roll call votes of one session, each merged with its vote counts
    pub async fn list_house(
        &self,
        congress: u32,
        session: u32,
        options: &ListOptions,
    ) -> Result<Value> {
        let endpoint = session_path(congress, session)?;
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "houseVotes",
                "houseVote",
                |item| format!("{}/{}", endpoint, field_text(item, "rollCallNumber")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn get_house(&self, congress: u32, session: u32, roll_call: u32) -> Result<Value> {
        let endpoint = roll_call_path(congress, session, roll_call)?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    /// How each member voted on one roll call
    pub async fn house_members(
        &self,
        congress: u32,
        session: u32,
        roll_call: u32,
        options: &ListOptions,
    ) -> Result<Value> {
        let endpoint = format!("{}/members", roll_call_path(congress, session, roll_call)?);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }
}

fn session_path(congress: u32, session: u32) -> Result<String> {
    Ok(format!(
        "/house-vote/{}/{}",
        validate_congress(congress)?,
        validate_session(session)?
    ))
}

fn roll_call_path(congress: u32, session: u32, roll_call: u32) -> Result<String> {
    let roll_call = validate_number("roll_call_number", roll_call)?;
    Ok(format!("{}/{}", session_path(congress, session)?, roll_call))
}
