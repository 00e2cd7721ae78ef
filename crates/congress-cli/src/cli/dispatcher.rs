use crate::cli::command_handlers::{
    AmendmentHandler, BillHandler, CommitteeDocumentHandler, CommitteeHandler,
    CommunicationHandler, ConfigHandler, CongressHandler, CrsReportHandler, HearingHandler,
    HouseRequirementHandler, InfoHandler, LawHandler, MemberHandler, NominationHandler,
    RawHandler, RecordHandler, SummaryHandler, TreatyHandler, VoteHandler, render_output,
};
use crate::cli::main_types::{Commands, OutputFormat};
use congress_core::api::client::CongressClient;
use congress_core::config::Config;
use congress_core::error::AppError;
use congress_core::storage::config::Settings;
use congress_core::storage::credentials::{API_KEY_ENV, get_api_key};
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Dispatcher {
    settings: Settings,
    settings_path: Option<PathBuf>,
    api_key: Option<String>,
    format: OutputFormat,
}

impl Dispatcher {
    pub fn new(
        settings: Settings,
        settings_path: Option<PathBuf>,
        api_key: Option<String>,
        format: OutputFormat,
    ) -> Self {
        Self {
            settings,
            settings_path,
            api_key,
            format,
        }
    }

    // CLI argument > environment variable
    fn effective_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(get_api_key)
    }

    fn build_config(&self) -> Result<Arc<Config>, AppError> {
        let api_key = self.effective_api_key();
        let config = Config::from_lookup(&self.settings, |key| {
            if key == API_KEY_ENV {
                api_key.clone()
            } else {
                env::var(key).ok()
            }
        })?;
        log::debug!(
            "Using {} (timeout {:?}, {} retries)",
            config.base_url,
            config.timeout,
            config.max_retries
        );
        Ok(Arc::new(config))
    }

    fn print(&self, value: &Value) -> Result<(), AppError> {
        println!("{}", render_output(value, self.format)?);
        Ok(())
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        // Offline commands never need an API key.
        match command {
            Commands::Info { enums } => {
                let info = InfoHandler::new().handle(enums, &self.settings)?;
                return self.print(&info);
            }
            Commands::Config { command } => {
                let api_key = self.effective_api_key();
                return ConfigHandler::new().handle(
                    command,
                    &self.settings,
                    self.settings_path.clone(),
                    api_key.as_deref(),
                );
            }
            _ => {}
        }

        let config = self.build_config()?;
        let value = CongressClient::scoped(config, |client| async move {
            match command {
                Commands::Bill { command } => BillHandler::new().handle(command, &client).await,
                Commands::Member { command } => {
                    MemberHandler::new().handle(command, &client).await
                }
                Commands::Committee { command } => {
                    CommitteeHandler::new().handle(command, &client).await
                }
                Commands::Law { command } => LawHandler::new().handle(command, &client).await,
                Commands::Amendment { command } => {
                    AmendmentHandler::new().handle(command, &client).await
                }
                Commands::Congress { command } => {
                    CongressHandler::new().handle(command, &client).await
                }
                Commands::Nomination { command } => {
                    NominationHandler::new().handle(command, &client).await
                }
                Commands::Treaty { command } => {
                    TreatyHandler::new().handle(command, &client).await
                }
                Commands::Summary { command } => {
                    SummaryHandler::new().handle(command, &client).await
                }
                Commands::Vote { command } => VoteHandler::new().handle(command, &client).await,
                Commands::CrsReport { command } => {
                    CrsReportHandler::new().handle(command, &client).await
                }
                Commands::Hearing { command } => {
                    HearingHandler::new().handle(command, &client).await
                }
                Commands::CommitteeReport { command } => {
                    CommitteeDocumentHandler::new()
                        .handle_report(command, &client)
                        .await
                }
                Commands::CommitteePrint { command } => {
                    CommitteeDocumentHandler::new()
                        .handle_print(command, &client)
                        .await
                }
                Commands::CommitteeMeeting { command } => {
                    CommitteeDocumentHandler::new()
                        .handle_meeting(command, &client)
                        .await
                }
                Commands::Communication { command } => {
                    CommunicationHandler::new().handle(command, &client).await
                }
                Commands::Record { command } => {
                    RecordHandler::new().handle(command, &client).await
                }
                Commands::HouseRequirement { command } => {
                    HouseRequirementHandler::new().handle(command, &client).await
                }
                Commands::Raw { command } => RawHandler::new().handle(command, &client).await,
                Commands::Info { .. } | Commands::Config { .. } => Ok(Value::Null),
            }
        })
        .await?;

        if let Some(warnings) = value.get(congress_core::api::enrich::WARNINGS_KEY) {
            log::warn!("Some details could not be fetched: {}", warnings);
        }
        self.print(&value)
    }
}
