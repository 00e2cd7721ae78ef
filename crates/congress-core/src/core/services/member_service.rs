use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{JsonMap, ListOptions, QueryParams};
use crate::utils::validation::{normalize_state, validate_congress, validate_identifier};
use serde_json::Value;

/// Members of Congress, keyed by bioguide ID
pub struct MemberService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

fn member_endpoint(item: &JsonMap) -> String {
    format!("/member/{}", field_text(item, "bioguideId"))
}

fn current_member_param(current_member: Option<bool>) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(current) = current_member {
        params.insert("currentMember".to_string(), current.to_string());
    }
    params
}

impl<'a> MemberService<'a> {
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

    async fn enriched_members(
        &self,
        endpoint: &str,
        current_member: Option<bool>,
        options: &ListOptions,
    ) -> Result<Value> {
        let response = fetch_list(
            self.client,
            endpoint,
            options,
            current_member_param(current_member),
        )
        .await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "members",
                "member",
                member_endpoint,
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    /// All members, optionally only those currently serving
    pub async fn list(&self, current_member: Option<bool>, options: &ListOptions) -> Result<Value> {
        self.enriched_members("/member", current_member, options)
            .await
    }

    pub async fn list_by_congress(
        &self,
        congress: u32,
        current_member: Option<bool>,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        self.enriched_members(
            &format!("/member/congress/{}", congress),
            current_member,
            options,
        )
        .await
    }

    pub async fn list_by_state(
        &self,
        state: &str,
        current_member: Option<bool>,
        options: &ListOptions,
    ) -> Result<Value> {
        let state = normalize_state(state)?;
        self.enriched_members(&format!("/member/{}", state), current_member, options)
            .await
    }

    /// Members who have represented one House district; at-large seats use 0
    pub async fn list_by_state_district(
        &self,
        state: &str,
        district: u32,
        current_member: Option<bool>,
        options: &ListOptions,
    ) -> Result<Value> {
        let state = normalize_state(state)?;
        self.enriched_members(
            &format!("/member/{}/{}", state, district),
            current_member,
            options,
        )
        .await
    }

    pub async fn get(&self, bioguide_id: &str) -> Result<Value> {
        let bioguide_id = validate_identifier("bioguide_id", bioguide_id)?;
        Ok(self
            .client
            .get(&format!("/member/{}", bioguide_id), None, None, 0)
            .await?)
    }

    pub async fn sponsored(&self, bioguide_id: &str, options: &ListOptions) -> Result<Value> {
        let bioguide_id = validate_identifier("bioguide_id", bioguide_id)?;
        let endpoint = format!("/member/{}/sponsored-legislation", bioguide_id);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }

    pub async fn cosponsored(&self, bioguide_id: &str, options: &ListOptions) -> Result<Value> {
        let bioguide_id = validate_identifier("bioguide_id", bioguide_id)?;
        let endpoint = format!("/member/{}/cosponsored-legislation", bioguide_id);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use crate::config::Config;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_member_endpoint() {
        let item = json!({"bioguideId": "P000197", "name": "Pelosi, Nancy"});
        let item = item.as_object().expect("object");
        assert_eq!(member_endpoint(item), "/member/P000197");
    }

    #[test]
    fn test_current_member_param() {
        assert!(current_member_param(None).is_empty());
        assert_eq!(
            current_member_param(Some(true))
                .get("currentMember")
                .map(String::as_str),
            Some("true")
        );
        assert_eq!(
            current_member_param(Some(false))
                .get("currentMember")
                .map(String::as_str),
            Some("false")
        );
    }

    #[tokio::test]
    async fn test_invalid_inputs_fail_before_request() {
        let client = CongressClient::new(Arc::new(Config::new("test_key")));
        let service = MemberService::new(&client);

        let result = service
            .list_by_state("California", None, &ListOptions::default())
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = service.get("../bill").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
