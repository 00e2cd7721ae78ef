use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{Chamber, ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_identifier};
use serde_json::Value;

/// Standing, select and joint committees
pub struct CommitteeService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> CommitteeService<'a> {
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

    /// Committees of both chambers; list items carry their own chamber
    pub async fn list(&self, options: &ListOptions) -> Result<Value> {
        let response = fetch_list(self.client, "/committee", options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "committees",
                "committee",
                |item| {
                    format!(
                        "/committee/{}/{}",
                        field_text(item, "chamber").to_lowercase(),
                        field_text(item, "systemCode")
                    )
                },
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn list_by_chamber(&self, chamber: Chamber, options: &ListOptions) -> Result<Value> {
        let endpoint = format!("/committee/{}", chamber);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "committees",
                "committee",
                |item| format!("{}/{}", endpoint, field_text(item, "systemCode")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn list_by_congress_chamber(
        &self,
        congress: u32,
        chamber: Chamber,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/committee/{}/{}", congress, chamber);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "committees",
                "committee",
                |item| format!("{}/{}", endpoint, field_text(item, "systemCode")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    /// One committee by system code (e.g. `hsju00`), optionally as it stood
    /// in a given Congress
    pub async fn get(
        &self,
        chamber: Chamber,
        committee_code: &str,
        congress: Option<u32>,
    ) -> Result<Value> {
        let committee_code = validate_identifier("committee_code", committee_code)?;
        let endpoint = match congress {
            Some(congress) => format!(
                "/committee/{}/{}/{}",
                validate_congress(congress)?,
                chamber,
                committee_code
            ),
            None => format!("/committee/{}/{}", chamber, committee_code),
        };
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    /// Bills referred to or reported by a committee
    pub async fn bills(
        &self,
        chamber: Chamber,
        committee_code: &str,
        options: &ListOptions,
    ) -> Result<Value> {
        let committee_code = validate_identifier("committee_code", committee_code)?;
        let endpoint = format!("/committee/{}/{}/bills", chamber, committee_code);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }
}
