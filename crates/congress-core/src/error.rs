use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ValidationError: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Output error: {0}")]
    Output(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {endpoint}")]
    NotFound { endpoint: String },
    #[error("Rate limit exceeded (5,000 requests/hour) after {attempts} attempts")]
    RateLimited { endpoint: String, attempts: u32 },
    #[error("Authentication failed: invalid or missing API key")]
    Unauthorized {
        status: u16,
        endpoint: String,
        server_message: String,
    },
    #[error("API error {status}: {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
    #[error("Client not initialized: open a session before issuing requests")]
    NotInitialized,
}

impl ApiError {
    /// HTTP status carried by the error, if the server produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::Unauthorized { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Errors that mean the whole session is unusable, not just one request.
    pub fn is_session_fatal(&self) -> bool {
        matches!(
            self,
            ApiError::RateLimited { .. } | ApiError::Unauthorized { .. }
        )
    }

    /// Per-request failures that enrichment may downgrade to a missing detail.
    pub fn is_item_failure(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound { .. }
                | ApiError::Http { .. }
                | ApiError::Timeout { .. }
                | ApiError::Transport { .. }
        )
    }

    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { endpoint }
            | ApiError::RateLimited { endpoint, .. }
            | ApiError::Unauthorized { endpoint, .. }
            | ApiError::Http { endpoint, .. }
            | ApiError::Timeout { endpoint, .. }
            | ApiError::Transport { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => Some(endpoint),
            ApiError::NotInitialized => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field '{field}' is missing")]
    MissingField { field: String, hint: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Settings parse error: {message}")]
    SettingsParse { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{message}")]
    InvalidChoice {
        field: String,
        value: String,
        message: String,
    },
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Unauthorized { .. } => ErrorSeverity::High,
                ApiError::RateLimited { .. } => ErrorSeverity::High,
                ApiError::NotInitialized => ErrorSeverity::Critical,
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Validation(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(ApiError::Unauthorized { .. }) => {
                Some("Check the CONGRESS_API_KEY environment variable or --api-key".to_string())
            }
            AppError::Api(ApiError::RateLimited { .. }) => Some(
                "Wait before retrying; the Congress.gov API allows 5,000 requests per hour"
                    .to_string(),
            ),
            AppError::Api(ApiError::Timeout { .. } | ApiError::Transport { .. }) => Some(
                "Check your internet connection or CONGRESS_API_BASE_URL and try again"
                    .to_string(),
            ),
            AppError::Api(ApiError::NotFound { .. }) => Some(
                "Verify the congress number, type and identifier of the requested record"
                    .to_string(),
            ),
            AppError::Config(ConfigError::MissingField { hint, .. }) => Some(hint.clone()),
            AppError::Config(ConfigError::InvalidValue { reason, .. }) => Some(reason.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let api_err = ApiError::NotFound {
            endpoint: "/bill/999/hr/99999".to_string(),
        };
        assert!(api_err.to_string().to_lowercase().contains("not found"));

        let api_err = ApiError::Http {
            status: 500,
            endpoint: "/bill/118".to_string(),
            message: "Internal server error".to_string(),
        };
        assert_eq!(api_err.to_string(), "API error 500: Internal server error");

        let api_err = ApiError::RateLimited {
            endpoint: "/bill/118".to_string(),
            attempts: 4,
        };
        assert!(api_err.to_string().contains("5,000 requests/hour"));
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::NotFound {
                endpoint: "e".to_string()
            }
            .status_code(),
            Some(404)
        );
        assert_eq!(
            ApiError::RateLimited {
                endpoint: "e".to_string(),
                attempts: 1
            }
            .status_code(),
            Some(429)
        );
        assert_eq!(
            ApiError::Unauthorized {
                status: 403,
                endpoint: "e".to_string(),
                server_message: String::new()
            }
            .status_code(),
            Some(403)
        );
        assert_eq!(ApiError::NotInitialized.status_code(), None);
    }

    #[test]
    fn test_session_fatal_classification() {
        let rate = ApiError::RateLimited {
            endpoint: "e".to_string(),
            attempts: 1,
        };
        assert!(rate.is_session_fatal());
        assert!(!rate.is_item_failure());

        let auth = ApiError::Unauthorized {
            status: 401,
            endpoint: "e".to_string(),
            server_message: String::new(),
        };
        assert!(auth.is_session_fatal());

        let missing = ApiError::NotFound {
            endpoint: "e".to_string(),
        };
        assert!(!missing.is_session_fatal());
        assert!(missing.is_item_failure());

        let decode = ApiError::Decode {
            endpoint: "e".to_string(),
            message: "eof".to_string(),
        };
        assert!(!decode.is_session_fatal());
        assert!(!decode.is_item_failure());
        assert!(!ApiError::NotInitialized.is_item_failure());
    }

    #[test]
    fn test_app_error_display_api() {
        let app_err = AppError::Api(ApiError::Unauthorized {
            status: 401,
            endpoint: "endpoint".to_string(),
            server_message: "message".to_string(),
        });
        assert!(matches!(
            app_err,
            AppError::Api(ApiError::Unauthorized { .. })
        ));
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert!(
            app_err
                .troubleshooting_hint()
                .is_some_and(|hint| hint.contains("CONGRESS_API_KEY"))
        );
    }

    #[test]
    fn test_config_error_hint_passthrough() {
        let app_err = AppError::Config(ConfigError::MissingField {
            field: "CONGRESS_API_KEY".to_string(),
            hint: "Get your API key".to_string(),
        });
        assert_eq!(
            format!("{}", app_err),
            "ConfigError: Configuration field 'CONGRESS_API_KEY' is missing"
        );
        assert_eq!(
            app_err.troubleshooting_hint(),
            Some("Get your API key".to_string())
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidValue {
            field: "congress".to_string(),
            reason: "must be between 1 and 200".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'congress': must be between 1 and 200"
        );
        let app_err: AppError = err.into();
        assert_eq!(app_err.severity(), ErrorSeverity::Low);
    }
}
