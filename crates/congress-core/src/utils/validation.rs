//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating user input, configuration
//! values, and API parameters before they are turned into endpoint paths.

use crate::error::ValidationError;
use chrono::NaiveDate;

pub const MIN_CONGRESS: u32 = 1;
pub const MAX_CONGRESS: u32 = 200;
pub const MAX_PAGE_LIMIT: u32 = 250;
pub const FIRST_BOUND_RECORD_YEAR: u32 = 1873;

type Result<T> = std::result::Result<T, ValidationError>;

fn invalid(field: &str, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(invalid("url", "URL cannot be empty"));
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(invalid(
            "url",
            format!("'{}' must start with http:// or https://", url),
        ));
    }

    Ok(())
}

/// Validate a Congress number (the 1st Congress began in 1789)
pub fn validate_congress(congress: u32) -> Result<u32> {
    if !(MIN_CONGRESS..=MAX_CONGRESS).contains(&congress) {
        return Err(invalid(
            "congress",
            format!(
                "{} is out of range; must be between {} and {} (e.g. 118)",
                congress, MIN_CONGRESS, MAX_CONGRESS
            ),
        ));
    }
    Ok(congress)
}

/// Validate a requested page size
pub fn validate_limit(limit: u32) -> Result<u32> {
    if limit == 0 || limit > MAX_PAGE_LIMIT {
        return Err(invalid(
            "limit",
            format!("{} is out of range; must be between 1 and {}", limit, MAX_PAGE_LIMIT),
        ));
    }
    Ok(limit)
}

/// Bill, law and amendment numbers start at 1
pub fn validate_number(field: &str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(invalid(field, "must be greater than 0"));
    }
    Ok(value)
}

/// Each Congress has two regular sessions
pub fn validate_session(session: u32) -> Result<u32> {
    if !(1..=2).contains(&session) {
        return Err(invalid("session", format!("{} must be 1 or 2", session)));
    }
    Ok(session)
}

/// Year, month and day of a bound Congressional Record issue.
/// The bound edition starts in 1873; a missing month or day means "all".
pub fn validate_record_date(year: u32, month: Option<u32>, day: Option<u32>) -> Result<()> {
    if year < FIRST_BOUND_RECORD_YEAR {
        return Err(invalid(
            "year",
            format!("{} is before {}", year, FIRST_BOUND_RECORD_YEAR),
        ));
    }
    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            return Err(invalid("month", format!("{} must be between 1 and 12", month)));
        }
    }
    if let Some(day) = day {
        if !(1..=31).contains(&day) {
            return Err(invalid("day", format!("{} must be between 1 and 31", day)));
        }
    }
    Ok(())
}

/// Parse a YYYY-MM-DD date filter
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| invalid(field, format!("'{}' is not a date in YYYY-MM-DD format", value)))
}

/// Normalize a two-letter state or territory code to upper case
pub fn normalize_state(state: &str) -> Result<String> {
    let state = state.trim();
    if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid(
            "state",
            format!("'{}' must be a two-letter state code (e.g. CA)", state),
        ));
    }
    Ok(state.to_ascii_uppercase())
}

/// Reject empty identifiers and identifiers that would alter the endpoint path
pub fn validate_identifier(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(field, "cannot be empty"));
    }
    if value.contains('/') || value.contains('?') || value.contains('#') {
        return Err(invalid(
            field,
            format!("'{}' must not contain '/', '?' or '#'", value),
        ));
    }
    Ok(value.to_string())
}
