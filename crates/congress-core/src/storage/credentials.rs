//! API key credential management
//!
//! The Congress.gov API authenticates with a static key passed as the
//! `api_key` query parameter. The key is read from CONGRESS_API_KEY.

use std::env;

pub const API_KEY_ENV: &str = "CONGRESS_API_KEY";
pub const SIGN_UP_URL: &str = "https://api.congress.gov/sign-up/";

/// Get the API key from environment variable
///
/// Returns the value of CONGRESS_API_KEY if set and non-empty, otherwise None.
pub fn get_api_key() -> Option<String> {
    env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
}

/// Render a key for display without revealing it
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
