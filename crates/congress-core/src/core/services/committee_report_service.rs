use super::fetch_list;
use crate::Result;
use crate::api::client::CongressClient;
use crate::api::enrich::{DEFAULT_MAX_CONCURRENT, field_text};
use crate::api::models::{ListOptions, QueryParams, ReportType};
use crate::utils::validation::{validate_congress, validate_number};
use serde_json::Value;

/// House, Senate and executive committee reports
pub struct CommitteeReportService<'a> {
    client: &'a CongressClient,
    max_concurrent: usize,
}

impl<'a> CommitteeReportService<'a> {
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

    pub async fn list(
        &self,
        congress: u32,
        report_type: ReportType,
        options: &ListOptions,
    ) -> Result<Value> {
        let congress = validate_congress(congress)?;
        let endpoint = format!("/committee-report/{}/{}", congress, report_type);
        let response = fetch_list(self.client, &endpoint, options, QueryParams::new()).await?;
        let enriched = self
            .client
            .enrich_list_response(
                response,
                "committeeReports",
                "committeeReport",
                |item| format!("{}/{}", endpoint, field_text(item, "number")),
                self.max_concurrent,
            )
            .await?;
        Ok(enriched)
    }

    pub async fn get(&self, congress: u32, report_type: ReportType, number: u32) -> Result<Value> {
        let endpoint = report_path(congress, report_type, number)?;
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }

    /// Links to the PDF, HTML and XML renditions
    pub async fn text(&self, congress: u32, report_type: ReportType, number: u32) -> Result<Value> {
        let endpoint = format!("{}/text", report_path(congress, report_type, number)?);
        Ok(self.client.get(&endpoint, None, None, 0).await?)
    }
}

fn report_path(congress: u32, report_type: ReportType, number: u32) -> Result<String> {
    let congress = validate_congress(congress)?;
    let number = validate_number("report_number", number)?;
    Ok(format!(
        "/committee-report/{}/{}/{}",
        congress, report_type, number
    ))
}
