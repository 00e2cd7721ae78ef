//! Runtime configuration
//!
//! Built once at startup from defaults, the optional settings file and the
//! environment, then shared read-only (`Arc<Config>`) by every request.

use crate::error::ConfigError;
use crate::storage::config::Settings;
use crate::storage::credentials::{API_KEY_ENV, SIGN_UP_URL};
use crate::utils::validation::validate_url;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.congress.gov/v3";
pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 250;
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_BASE_DELAY_SECS: f64 = 1.0;

pub const BASE_URL_ENV: &str = "CONGRESS_API_BASE_URL";
pub const DEFAULT_LIMIT_ENV: &str = "CONGRESS_DEFAULT_LIMIT";
pub const MAX_LIMIT_ENV: &str = "CONGRESS_MAX_LIMIT";
pub const TIMEOUT_ENV: &str = "CONGRESS_TIMEOUT";
pub const MAX_RETRIES_ENV: &str = "CONGRESS_MAX_RETRIES";
pub const RETRY_BASE_DELAY_ENV: &str = "CONGRESS_RETRY_BASE_DELAY";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub default_limit: u32,
    pub max_limit: u32,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_base_delay: Duration,
}

impl Config {
    /// Config with default settings for the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: Duration::from_secs_f64(DEFAULT_RETRY_BASE_DELAY_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_retry(mut self, max_retries: u32, retry_base_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_base_delay = retry_base_delay;
        self
    }

    pub fn with_limits(mut self, default_limit: u32, max_limit: u32) -> Self {
        self.default_limit = default_limit;
        self.max_limit = max_limit;
        self
    }

    /// Load from the process environment layered over `settings`
    pub fn from_env(settings: &Settings) -> Result<Self, ConfigError> {
        Self::from_lookup(settings, |key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup layered over `settings`
    pub fn from_lookup<F>(settings: &Settings, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                field: API_KEY_ENV.to_string(),
                hint: format!(
                    "{} environment variable is required. Get your API key at {}",
                    API_KEY_ENV, SIGN_UP_URL
                ),
            })?;
        Self::resolve(api_key, settings, lookup)
    }

    /// Everything but the API key, for commands that never reach the API
    pub fn without_key<F>(settings: &Settings, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(String::new(), settings, lookup)
    }

    fn resolve<F>(api_key: String, settings: &Settings, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = var(BASE_URL_ENV)
            .or_else(|| settings.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let default_limit = match var(DEFAULT_LIMIT_ENV) {
            Some(raw) => parse_number::<u32>(DEFAULT_LIMIT_ENV, &raw)?,
            None => settings.default_limit.unwrap_or(DEFAULT_LIMIT),
        };
        let max_limit = match var(MAX_LIMIT_ENV) {
            Some(raw) => parse_number::<u32>(MAX_LIMIT_ENV, &raw)?,
            None => settings.max_limit.unwrap_or(MAX_LIMIT),
        };
        let timeout_secs = match var(TIMEOUT_ENV) {
            Some(raw) => parse_number::<f64>(TIMEOUT_ENV, &raw)?,
            None => settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        let max_retries = match var(MAX_RETRIES_ENV) {
            Some(raw) => parse_number::<u32>(MAX_RETRIES_ENV, &raw)?,
            None => settings.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        };
        let retry_base_delay_secs = match var(RETRY_BASE_DELAY_ENV) {
            Some(raw) => parse_number::<f64>(RETRY_BASE_DELAY_ENV, &raw)?,
            None => settings
                .retry_base_delay_secs
                .unwrap_or(DEFAULT_RETRY_BASE_DELAY_SECS),
        };

        let config = Config {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_limit,
            max_limit,
            timeout: seconds(TIMEOUT_ENV, timeout_secs)?,
            max_retries,
            retry_base_delay: seconds(RETRY_BASE_DELAY_ENV, retry_base_delay_secs)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: BASE_URL_ENV.to_string(),
            value: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if self.max_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: MAX_LIMIT_ENV.to_string(),
                value: self.max_limit.to_string(),
                reason: "Maximum page size must be at least 1".to_string(),
            });
        }

        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(ConfigError::InvalidValue {
                field: DEFAULT_LIMIT_ENV.to_string(),
                value: self.default_limit.to_string(),
                reason: format!(
                    "Default page size must be between 1 and {}",
                    self.max_limit
                ),
            });
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: TIMEOUT_ENV.to_string(),
                value: "0".to_string(),
                reason: "Timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue {
            field: field.to_string(),
            value: raw.to_string(),
            reason: format!("{} must be a number", field),
        })
}

fn seconds(field: &str, secs: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        value: secs.to_string(),
        reason: format!("{} must be a non-negative number of seconds", field),
    })
}
