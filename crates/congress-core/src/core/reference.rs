//! Offline reference data: API facts and the valid parameter codes.

use crate::api::models::{
    AmendmentType, BillType, Chamber, HouseCommunicationType, LawType, ReportType,
    SenateCommunicationType,
};
use crate::config::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::storage::credentials::SIGN_UP_URL;
use chrono::{Datelike, Utc};
use serde_json::{Map, Value, json};

pub const API_VERSION: &str = "v3";
pub const RATE_LIMIT: &str = "5,000 requests per hour";
pub const DOCUMENTATION_URL: &str = "https://api.congress.gov";
pub const GITHUB_URL: &str = "https://github.com/LibraryOfCongress/api.congress.gov";

/// Year in which the given Congress first convened
pub fn first_year(congress: u32) -> u32 {
    1789 + 2 * congress.saturating_sub(1)
}

/// Congress in session for most of `year`; a new Congress convenes on
/// January 3 of odd years
pub fn congress_for_year(year: u32) -> u32 {
    year.saturating_sub(1789) / 2 + 1
}

/// API facts for the given base URL and page sizes
pub fn api_info(base_url: &str, default_limit: u32, max_limit: u32) -> Value {
    json!({
        "name": "Congress.gov API",
        "version": API_VERSION,
        "base_url": base_url,
        "rate_limit": RATE_LIMIT,
        "default_limit": default_limit,
        "max_limit": max_limit,
        "documentation": DOCUMENTATION_URL,
        "github": GITHUB_URL,
        "sign_up": SIGN_UP_URL,
    })
}

/// API facts with the built-in defaults
pub fn default_api_info() -> Value {
    api_info(crate::config::DEFAULT_BASE_URL, DEFAULT_LIMIT, MAX_LIMIT)
}

macro_rules! enum_table {
    ($ty:ty) => {{
        let mut table = Map::new();
        for value in <$ty>::all() {
            table.insert(
                value.as_str().to_string(),
                json!({
                    "name": value.label(),
                    "description": format!("{} - {}", value.label(), value.description()),
                }),
            );
        }
        Value::Object(table)
    }};
}

pub fn bill_types() -> Value {
    enum_table!(BillType)
}

pub fn amendment_types() -> Value {
    enum_table!(AmendmentType)
}

pub fn chambers() -> Value {
    enum_table!(Chamber)
}

pub fn law_types() -> Value {
    enum_table!(LawType)
}

pub fn report_types() -> Value {
    enum_table!(ReportType)
}

pub fn house_communication_types() -> Value {
    enum_table!(HouseCommunicationType)
}

pub fn senate_communication_types() -> Value {
    enum_table!(SenateCommunicationType)
}

/// All code tables keyed by parameter name
pub fn enum_reference() -> Value {
    json!({
        (BillType::FIELD): bill_types(),
        (AmendmentType::FIELD): amendment_types(),
        (Chamber::FIELD): chambers(),
        (LawType::FIELD): law_types(),
        (ReportType::FIELD): report_types(),
        "house_communication_type": house_communication_types(),
        "senate_communication_type": senate_communication_types(),
    })
}

/// Convening years of the `count` Congresses up to and including `latest`
pub fn congress_numbers(latest: u32, count: u32) -> Value {
    let mut table = Map::new();
    let oldest = latest.saturating_sub(count.saturating_sub(1)).max(1);
    for congress in (oldest..=latest).rev() {
        let start = first_year(congress);
        table.insert(
            congress.to_string(),
            json!({ "years": format!("{}-{}", start, start + 2) }),
        );
    }
    table.insert(
        "note".to_string(),
        json!("Each Congress begins on January 3 of odd-numbered years and lasts two years. The first Congress began in 1789."),
    );
    Value::Object(table)
}

/// [`congress_numbers`] ending at the Congress of the current year
pub fn recent_congresses(count: u32) -> Value {
    let year = u32::try_from(Utc::now().year()).unwrap_or(1789);
    congress_numbers(congress_for_year(year), count)
}
