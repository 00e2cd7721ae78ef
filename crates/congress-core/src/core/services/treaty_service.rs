use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::models::{ListOptions, QueryParams};
use crate::utils::validation::{validate_congress, validate_identifier, validate_number};
use serde_json::Value;

/// Treaties submitted to the Senate for ratification
pub struct TreatyService<'a> {
    client: &'a CongressClient,
}

impl<'a> TreatyService<'a> {
    pub fn new(client: &'a CongressClient) -> Self {
        Self { client }
    }

    /// Treaties of one Congress, or of every Congress when `congress` is None
    pub async fn list(&self, congress: Option<u32>, options: &ListOptions) -> Result<Value> {
        let endpoint = match congress {
            Some(congress) => format!("/treaty/{}", validate_congress(congress)?),
            None => "/treaty".to_string(),
        };
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }

    pub async fn get(&self, congress: u32, number: u32) -> Result<Value> {
        let endpoint = treaty_path(congress, number, None)?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    /// One part ("A", "B", ...) of a partitioned treaty
    pub async fn part(&self, congress: u32, number: u32, suffix: &str) -> Result<Value> {
        let endpoint = treaty_path(congress, number, Some(suffix))?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    pub async fn actions(
        &self,
        congress: u32,
        number: u32,
        suffix: Option<&str>,
        options: &ListOptions,
    ) -> Result<Value> {
        let endpoint = format!("{}/actions", treaty_path(congress, number, suffix)?);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }

    pub async fn committees(
        &self,
        congress: u32,
        number: u32,
        options: &ListOptions,
    ) -> Result<Value> {
        let endpoint = format!("{}/committees", treaty_path(congress, number, None)?);
        fetch_list(self.client, &endpoint, options, QueryParams::new()).await
    }
}

fn treaty_path(congress: u32, number: u32, suffix: Option<&str>) -> Result<String> {
    let congress = validate_congress(congress)?;
    let number = validate_number("treaty_number", number)?;
    match suffix {
        Some(suffix) => Ok(format!(
            "/treaty/{}/{}/{}",
            congress,
            number,
            validate_identifier("treaty_suffix", suffix)?
        )),
        None => Ok(format!("/treaty/{}/{}", congress, number)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treaty_path() {
        assert_eq!(treaty_path(118, 3, None).expect("path"), "/treaty/118/3");
        assert_eq!(treaty_path(114, 13, Some("A")).expect("path"), "/treaty/114/13/A");
        assert!(treaty_path(114, 13, Some("")).is_err());
        assert!(treaty_path(114, 0, None).is_err());
    }
}
