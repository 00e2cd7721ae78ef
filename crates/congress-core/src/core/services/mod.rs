//! Query services for the Congress.gov resources.
//!
//! Each service borrows an opened [`CongressClient`], validates its inputs
//! and turns them into endpoint paths. List operations that have a matching
//! detail endpoint return enriched responses.

pub mod amendment_service;
pub mod bill_service;
pub mod committee_meeting_service;
pub mod committee_print_service;
pub mod committee_report_service;
pub mod committee_service;
pub mod communication_service;
pub mod congress_service;
pub mod congressional_record_service;
pub mod crs_report_service;
pub mod hearing_service;
pub mod house_requirement_service;
pub mod law_service;
pub mod member_service;
pub mod nomination_service;
pub mod summary_service;
pub mod treaty_service;
pub mod vote_service;

use crate::Result;
use crate::api::client::CongressClient;
use crate::api::models::{ListOptions, QueryParams};
use crate::utils::validation::validate_limit;
use serde_json::Value;

/// One page of a list endpoint with the filters from `options` plus `extra`
pub(crate) async fn fetch_list(
    client: &CongressClient,
    endpoint: &str,
    options: &ListOptions,
    extra: QueryParams,
) -> Result<Value> {
    if let Some(limit) = options.limit {
        validate_limit(limit)?;
    }
    let mut params = options.to_params();
    params.extend(extra);
    let response = client
        .get(endpoint, Some(&params), options.limit, options.offset)
        .await?;
    Ok(response)
}
