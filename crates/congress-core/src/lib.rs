//! # congress-core
//!
//! Core library for Congress.gov API interaction.
//!
//! This crate provides the resilient fetch client used by `congress-cli`:
//! authenticated requests with rate-limit retries, multi-page collection and
//! concurrent detail enrichment of list responses.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use congress_core::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> congress_core::Result<()> {
//!     let settings = Settings::load(None)?;
//!     let config = Arc::new(Config::from_env(&settings)?);
//!
//!     let bills = CongressClient::scoped(config, |client| async move {
//!         BillService::new(&client)
//!             .list(118, &ListOptions::new(Some(10), 0))
//!             .await
//!     })
//!     .await?;
//!
//!     println!("{}", bills);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           API Layer                 │  HTTP client, retries, pagination, enrichment
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  Resource services, reference data
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  Settings file, API key lookup
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  Validation, retry policy, error conversion
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`]: Congress.gov HTTP client and parameter models
//! - [`core`]: Resource services and offline reference data
//! - [`config`]: Runtime configuration from defaults, settings file and environment
//! - [`storage`]: Settings file and credential lookup
//! - [`utils`]: Shared utilities (validation, retry, error conversion)
//! - [`display`]: Table output for list results
//! - [`error`]: Hierarchical error system with troubleshooting hints

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use congress_core::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::{ApiError, AppError};

    // API client and models
    pub use crate::api::client::CongressClient;
    pub use crate::api::models::{
        AmendmentType, BillSubresource, BillType, Chamber, HouseCommunicationType, LawType,
        ListOptions, QueryParams, ReportType, SenateCommunicationType, SortOrder,
    };
    pub use crate::api::pagination::AggregatedResults;

    // Services
    pub use crate::core::services::amendment_service::AmendmentService;
    pub use crate::core::services::bill_service::BillService;
    pub use crate::core::services::committee_meeting_service::CommitteeMeetingService;
    pub use crate::core::services::committee_print_service::CommitteePrintService;
    pub use crate::core::services::committee_report_service::CommitteeReportService;
    pub use crate::core::services::committee_service::CommitteeService;
    pub use crate::core::services::communication_service::CommunicationService;
    pub use crate::core::services::congress_service::CongressService;
    pub use crate::core::services::congressional_record_service::CongressionalRecordService;
    pub use crate::core::services::crs_report_service::CrsReportService;
    pub use crate::core::services::hearing_service::HearingService;
    pub use crate::core::services::house_requirement_service::HouseRequirementService;
    pub use crate::core::services::law_service::LawService;
    pub use crate::core::services::member_service::MemberService;
    pub use crate::core::services::nomination_service::NominationService;
    pub use crate::core::services::summary_service::SummaryService;
    pub use crate::core::services::treaty_service::TreatyService;
    pub use crate::core::services::vote_service::VoteService;

    // Configuration
    pub use crate::config::Config;
    pub use crate::storage::config::Settings;
    pub use crate::storage::credentials::get_api_key;

    // Display utilities
    pub use crate::display::TableDisplay;
}

/// API layer - Congress.gov HTTP client and parameter models.
///
/// - [`api::client`]: authenticated GET with rate-limit retries, `get_all`
/// - [`api::enrich`]: concurrent detail fetches merged into list responses
/// - [`api::pagination`]: result extraction and `pagination_info`
/// - [`api::models`]: typed request parameters
pub mod api;

/// Runtime configuration shared by every request.
pub mod config;

/// Business logic layer - resource services and reference data.
pub mod core;

/// Storage layer - settings file and credential lookup.
///
/// - [`storage::config`]: optional TOML settings file
/// - [`storage::credentials`]: API key retrieval from environment
pub mod storage;

/// Utilities layer - shared helpers.
///
/// - [`utils::validation`]: congress numbers, limits, dates, identifiers
/// - [`utils::retry`]: backoff schedule, Retry-After parsing, sleeper seam
/// - [`utils::error_helpers`]: transport error conversion
pub mod utils;

/// Display layer - table output for list results.
pub mod display;

/// Error handling - hierarchical error system.
///
/// - Domain-specific error variants (API, Config, Storage, Validation, CLI)
/// - Severity levels (Critical, High, Medium, Low)
/// - Troubleshooting hints for common issues
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

#[doc(hidden)]
pub use api::client::CongressClient;
#[doc(hidden)]
pub use config::Config;
