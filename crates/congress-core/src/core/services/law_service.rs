use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{LawType, ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_number};
use serde_json::Value;

/// Public and private laws
pub struct LawService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> LawService<'a> {
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

    pub async fn list(&self, congress: u32, options: &ListOptions) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/law/{}", congress);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "laws",
                "law",
                |item| {
                    format!(
                        "/law/{}/{}/{}",
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

    pub async fn list_by_type(
        &self,
        congress: u32,
        law_type: LawType,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/law/{}/{}", congress, law_type);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "laws",
                "law",
                |item| format!("{}/{}", endpoint, field_text(item, "number")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn get(&self, congress: u32, law_type: LawType, number: u32) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let number = validate_number("law_number", number)?;
        let endpoint = format!("/law/{}/{}/{}", congress, law_type, number);
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use crate::config::Config;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_rejects_zero_law_number() {
        let client = CongressClient::new(Arc::new(Config::new("test_key")));
        let result = LawService::new(&client).get(118, LawType::Public, 0).await;
        match result {
            Err(AppError::Validation(err)) => assert!(err.to_string().contains("law_number")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
