use crate::cli::main_types::{
    AmendmentCommands, BillCommands, CommitteeCommands, CommitteeMeetingCommands,
    CommitteePrintCommands, CommitteeReportCommands, CommunicationCommands, ConfigCommands,
    CongressCommands, CrsReportCommands, HearingCommands, HouseRequirementCommands, LawCommands,
    ListArgs, MemberCommands, NominationCommands, OutputFormat, RawCommands, RecordCommands,
    SummaryCommands, TreatyCommands, VoteCommands,
};
use congress_core::api::client::CongressClient;
use congress_core::api::models::{
    AmendmentType, BillSubresource, BillType, Chamber, HouseCommunicationType, LawType,
    ListOptions, QueryParams, ReportType, SenateCommunicationType, SortOrder,
};
use congress_core::config::{
    BASE_URL_ENV, Config, DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_LIMIT_ENV,
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BASE_DELAY_SECS, DEFAULT_TIMEOUT_SECS, MAX_LIMIT,
    MAX_LIMIT_ENV, MAX_RETRIES_ENV, RETRY_BASE_DELAY_ENV, TIMEOUT_ENV,
};
use congress_core::core::reference;
use congress_core::core::services::amendment_service::AmendmentService;
use congress_core::core::services::bill_service::BillService;
use congress_core::core::services::committee_meeting_service::CommitteeMeetingService;
use congress_core::core::services::committee_print_service::CommitteePrintService;
use congress_core::core::services::committee_report_service::CommitteeReportService;
use congress_core::core::services::committee_service::CommitteeService;
use congress_core::core::services::communication_service::CommunicationService;
use congress_core::core::services::congress_service::CongressService;
use congress_core::core::services::congressional_record_service::CongressionalRecordService;
use congress_core::core::services::crs_report_service::CrsReportService;
use congress_core::core::services::hearing_service::HearingService;
use congress_core::core::services::house_requirement_service::HouseRequirementService;
use congress_core::core::services::law_service::LawService;
use congress_core::core::services::member_service::MemberService;
use congress_core::core::services::nomination_service::NominationService;
use congress_core::core::services::summary_service::SummaryService;
use congress_core::core::services::treaty_service::TreatyService;
use congress_core::core::services::vote_service::VoteService;
use congress_core::display::TableDisplay;
use congress_core::error::{AppError, CliError};
use congress_core::storage::config::Settings;
use congress_core::storage::credentials::{API_KEY_ENV, mask_api_key};
use congress_core::utils::validation::parse_date;
use serde_json::Value;
use std::path::PathBuf;

/// Render a command result for stdout
pub fn render_output(value: &Value, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => to_pretty_json(value),
        OutputFormat::Table => match TableDisplay::new().render_response(value) {
            Ok(table) => Ok(table),
            Err(AppError::Cli(CliError::Output(reason))) => {
                // Single records have no rows to tabulate.
                log::debug!("{}", reason);
                to_pretty_json(value)
            }
            Err(e) => Err(e),
        },
    }
}

fn to_pretty_json(value: &Value) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Cli(CliError::Output(format!("Failed to format JSON: {}", e))))
}

fn list_options(args: &ListArgs) -> Result<ListOptions, AppError> {
    let from_date = args
        .from_date
        .as_deref()
        .map(|d| parse_date("from_date", d))
        .transpose()?;
    let to_date = args
        .to_date
        .as_deref()
        .map(|d| parse_date("to_date", d))
        .transpose()?;
    let sort = args
        .sort
        .as_deref()
        .map(str::parse::<SortOrder>)
        .transpose()?;

    Ok(ListOptions::new(args.limit, args.offset)
        .with_dates(from_date, to_date)
        .with_sort(sort))
}

/// Parse repeated `key=value` arguments
fn parse_params(params: &[String]) -> Result<QueryParams, AppError> {
    let mut parsed = QueryParams::new();
    for param in params {
        let (key, value) = param.split_once('=').ok_or_else(|| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Invalid parameter '{}': expected key=value",
                param
            )))
        })?;
        if key.trim().is_empty() {
            return Err(AppError::Cli(CliError::InvalidArguments(format!(
                "Invalid parameter '{}': key cannot be empty",
                param
            ))));
        }
        parsed.insert(key.trim().to_string(), value.to_string());
    }
    Ok(parsed)
}

fn normalize_endpoint(endpoint: &str) -> String {
    let endpoint = endpoint.trim();
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{}", endpoint)
    }
}

#[derive(Default)]
pub struct BillHandler;

impl BillHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: BillCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            BillCommands::List {
                congress,
                bill_type,
                list,
            } => {
                let options = list_options(&list)?;
                let service = BillService::new(client).with_max_concurrent(list.max_concurrent);
                match bill_type {
                    Some(bill_type) => {
                        let bill_type: BillType = bill_type.parse()?;
                        log::info!("Listing {} bills of Congress {}", bill_type, congress);
                        service.list_by_type(congress, bill_type, &options).await
                    }
                    None => {
                        log::info!("Listing bills of Congress {}", congress);
                        service.list(congress, &options).await
                    }
                }
            }
            BillCommands::Get {
                congress,
                bill_type,
                number,
            } => {
                let bill_type: BillType = bill_type.parse()?;
                BillService::new(client)
                    .get(congress, bill_type, number)
                    .await
            }
            BillCommands::Detail {
                congress,
                bill_type,
                number,
                subresource,
                list,
            } => {
                let bill_type: BillType = bill_type.parse()?;
                let subresource: BillSubresource = subresource.parse()?;
                let options = list_options(&list)?;
                BillService::new(client)
                    .subresource(congress, bill_type, number, subresource, &options)
                    .await
            }
        }
    }
}

#[derive(Default)]
pub struct MemberHandler;

impl MemberHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: MemberCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            MemberCommands::List {
                congress,
                state,
                district,
                current,
                list,
            } => {
                let options = list_options(&list)?;
                let service = MemberService::new(client).with_max_concurrent(list.max_concurrent);
                match (congress, state, district) {
                    (Some(congress), _, _) => {
                        service.list_by_congress(congress, current, &options).await
                    }
                    (None, Some(state), Some(district)) => {
                        service
                            .list_by_state_district(&state, district, current, &options)
                            .await
                    }
                    (None, Some(state), None) => {
                        service.list_by_state(&state, current, &options).await
                    }
                    (None, None, _) => service.list(current, &options).await,
                }
            }
            MemberCommands::Get { bioguide_id } => {
                MemberService::new(client).get(&bioguide_id).await
            }
            MemberCommands::Sponsored { bioguide_id, list } => {
                MemberService::new(client)
                    .sponsored(&bioguide_id, &list_options(&list)?)
                    .await
            }
            MemberCommands::Cosponsored { bioguide_id, list } => {
                MemberService::new(client)
                    .cosponsored(&bioguide_id, &list_options(&list)?)
                    .await
            }
        }
    }
}

#[derive(Default)]
pub struct CommitteeHandler;

impl CommitteeHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: CommitteeCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            CommitteeCommands::List {
                chamber,
                congress,
                list,
            } => {
                let options = list_options(&list)?;
                let service =
                    CommitteeService::new(client).with_max_concurrent(list.max_concurrent);
                let chamber = chamber.as_deref().map(str::parse::<Chamber>).transpose()?;
                match (chamber, congress) {
                    (Some(chamber), Some(congress)) => {
                        service
                            .list_by_congress_chamber(congress, chamber, &options)
                            .await
                    }
                    (Some(chamber), None) => service.list_by_chamber(chamber, &options).await,
                    (None, _) => service.list(&options).await,
                }
            }
            CommitteeCommands::Get {
                chamber,
                committee_code,
                congress,
            } => {
                let chamber: Chamber = chamber.parse()?;
                CommitteeService::new(client)
                    .get(chamber, &committee_code, congress)
                    .await
            }
            CommitteeCommands::Bills {
                chamber,
                committee_code,
                list,
            } => {
                let chamber: Chamber = chamber.parse()?;
                CommitteeService::new(client)
                    .bills(chamber, &committee_code, &list_options(&list)?)
                    .await
            }
        }
    }
}

#[derive(Default)]
pub struct LawHandler;

impl LawHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: LawCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            LawCommands::List {
                congress,
                law_type,
                list,
            } => {
                let options = list_options(&list)?;
                let service = LawService::new(client).with_max_concurrent(list.max_concurrent);
                match law_type {
                    Some(law_type) => {
                        let law_type: LawType = law_type.parse()?;
                        service.list_by_type(congress, law_type, &options).await
                    }
                    None => service.list(congress, &options).await,
                }
            }
            LawCommands::Get {
                congress,
                law_type,
                number,
            } => {
                let law_type: LawType = law_type.parse()?;
                LawService::new(client).get(congress, law_type, number).await
            }
        }
    }
}

#[derive(Default)]
pub struct AmendmentHandler;

impl AmendmentHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: AmendmentCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        let service = AmendmentService::new(client);
        match command {
            AmendmentCommands::List {
                congress,
                amendment_type,
                list,
            } => {
                let options = list_options(&list)?;
                match amendment_type {
                    Some(amendment_type) => {
                        let amendment_type: AmendmentType = amendment_type.parse()?;
                        service.list_by_type(congress, amendment_type, &options).await
                    }
                    None => service.list(congress, &options).await,
                }
            }
            AmendmentCommands::Get {
                congress,
                amendment_type,
                number,
            } => {
                let amendment_type: AmendmentType = amendment_type.parse()?;
                service.get(congress, amendment_type, number).await
            }
        }
    }
}

#[derive(Default)]
pub struct CongressHandler;

impl CongressHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: CongressCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            CongressCommands::List { list } => {
                CongressService::new(client)
                    .with_max_concurrent(list.max_concurrent)
                    .list(&list_options(&list)?)
                    .await
            }
            CongressCommands::Get { congress } => CongressService::new(client).get(congress).await,
            CongressCommands::Current => CongressService::new(client).current().await,
        }
    }
}

#[derive(Default)]
pub struct NominationHandler;

impl NominationHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: NominationCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        let service = NominationService::new(client);
        match command {
            NominationCommands::List { congress, list } => {
                service.list(congress, &list_options(&list)?).await
            }
            NominationCommands::Get { congress, number } => service.get(congress, number).await,
            NominationCommands::Nominee {
                congress,
                number,
                ordinal,
            } => service.nominee(congress, number, ordinal).await,
            NominationCommands::Actions {
                congress,
                number,
                list,
            } => service.actions(congress, number, &list_options(&list)?).await,
            NominationCommands::Committees {
                congress,
                number,
                list,
            } => {
                service
                    .committees(congress, number, &list_options(&list)?)
                    .await
            }
            NominationCommands::Hearings {
                congress,
                number,
                list,
            } => service.hearings(congress, number, &list_options(&list)?).await,
        }
    }
}

#[derive(Default)]
pub struct TreatyHandler;

impl TreatyHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: TreatyCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        let service = TreatyService::new(client);
        match command {
            TreatyCommands::List { congress, list } => {
                service.list(congress, &list_options(&list)?).await
            }
            TreatyCommands::Get {
                congress,
                number,
                suffix,
            } => match suffix {
                Some(suffix) => service.part(congress, number, &suffix).await,
                None => service.get(congress, number).await,
            },
            TreatyCommands::Actions {
                congress,
                number,
                suffix,
                list,
            } => {
                service
                    .actions(congress, number, suffix.as_deref(), &list_options(&list)?)
                    .await
            }
            TreatyCommands::Committees {
                congress,
                number,
                list,
            } => {
                service
                    .committees(congress, number, &list_options(&list)?)
                    .await
            }
        }
    }
}

#[derive(Default)]
pub struct SummaryHandler;

impl SummaryHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: SummaryCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        let service = SummaryService::new(client);
        match command {
            SummaryCommands::List {
                congress,
                bill_type,
                list,
            } => {
                let options = list_options(&list)?;
                let bill_type = bill_type.as_deref().map(str::parse::<BillType>).transpose()?;
                match (congress, bill_type) {
                    (Some(congress), Some(bill_type)) => {
                        service.list_by_type(congress, bill_type, &options).await
                    }
                    (Some(congress), None) => service.list_by_congress(congress, &options).await,
                    (None, _) => service.list(&options).await,
                }
            }
        }
    }
}

#[derive(Default)]
pub struct VoteHandler;

impl VoteHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: VoteCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            VoteCommands::List {
                congress,
                session,
                list,
            } => {
                VoteService::new(client)
                    .with_max_concurrent(list.max_concurrent)
                    .list_house(congress, session, &list_options(&list)?)
                    .await
            }
            VoteCommands::Get {
                congress,
                session,
                roll_call,
            } => {
                VoteService::new(client)
                    .get_house(congress, session, roll_call)
                    .await
            }
            VoteCommands::Members {
                congress,
                session,
                roll_call,
                list,
            } => {
                VoteService::new(client)
                    .house_members(congress, session, roll_call, &list_options(&list)?)
                    .await
            }
        }
    }
}

#[derive(Default)]
pub struct CrsReportHandler;

impl CrsReportHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: CrsReportCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            CrsReportCommands::List { list } => {
                CrsReportService::new(client)
                    .with_max_concurrent(list.max_concurrent)
                    .list(&list_options(&list)?)
                    .await
            }
            CrsReportCommands::Get { report_number } => {
                CrsReportService::new(client).get(&report_number).await
            }
        }
    }
}

#[derive(Default)]
pub struct HearingHandler;

impl HearingHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: HearingCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            HearingCommands::List {
                congress,
                chamber,
                list,
            } => {
                let chamber = chamber.as_deref().map(str::parse::<Chamber>).transpose()?;
                HearingService::new(client)
                    .with_max_concurrent(list.max_concurrent)
                    .list(congress, chamber, &list_options(&list)?)
                    .await
            }
            HearingCommands::Get {
                congress,
                chamber,
                jacket_number,
            } => {
                let chamber: Chamber = chamber.parse()?;
                HearingService::new(client)
                    .get(congress, chamber, jacket_number)
                    .await
            }
        }
    }
}

/// Committee reports, prints and meetings
#[derive(Default)]
pub struct CommitteeDocumentHandler;

impl CommitteeDocumentHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle_report(
        &self,
        command: CommitteeReportCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            CommitteeReportCommands::List {
                congress,
                report_type,
                list,
            } => {
                let report_type: ReportType = report_type.parse()?;
                CommitteeReportService::new(client)
                    .with_max_concurrent(list.max_concurrent)
                    .list(congress, report_type, &list_options(&list)?)
                    .await
            }
            CommitteeReportCommands::Get {
                congress,
                report_type,
                number,
            } => {
                let report_type: ReportType = report_type.parse()?;
                CommitteeReportService::new(client)
                    .get(congress, report_type, number)
                    .await
            }
            CommitteeReportCommands::Text {
                congress,
                report_type,
                number,
            } => {
                let report_type: ReportType = report_type.parse()?;
                CommitteeReportService::new(client)
                    .text(congress, report_type, number)
                    .await
            }
        }
    }

    pub async fn handle_print(
        &self,
        command: CommitteePrintCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            CommitteePrintCommands::List {
                congress,
                chamber,
                list,
            } => {
                let chamber: Chamber = chamber.parse()?;
                CommitteePrintService::new(client)
                    .with_max_concurrent(list.max_concurrent)
                    .list(congress, chamber, &list_options(&list)?)
                    .await
            }
            CommitteePrintCommands::Get {
                congress,
                chamber,
                jacket_number,
            } => {
                let chamber: Chamber = chamber.parse()?;
                CommitteePrintService::new(client)
                    .get(congress, chamber, jacket_number)
                    .await
            }
            CommitteePrintCommands::Text {
                congress,
                chamber,
                jacket_number,
            } => {
                let chamber: Chamber = chamber.parse()?;
                CommitteePrintService::new(client)
                    .text(congress, chamber, jacket_number)
                    .await
            }
        }
    }

    pub async fn handle_meeting(
        &self,
        command: CommitteeMeetingCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            CommitteeMeetingCommands::List {
                congress,
                chamber,
                list,
            } => {
                let chamber: Chamber = chamber.parse()?;
                CommitteeMeetingService::new(client)
                    .with_max_concurrent(list.max_concurrent)
                    .list(congress, chamber, &list_options(&list)?)
                    .await
            }
            CommitteeMeetingCommands::Get {
                congress,
                chamber,
                event_id,
            } => {
                let chamber: Chamber = chamber.parse()?;
                CommitteeMeetingService::new(client)
                    .get(congress, chamber, &event_id)
                    .await
            }
        }
    }
}

#[derive(Default)]
pub struct CommunicationHandler;

impl CommunicationHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: CommunicationCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        let service = CommunicationService::new(client);
        match command {
            CommunicationCommands::List {
                congress,
                chamber,
                communication_type,
                list,
            } => {
                let options = list_options(&list)?;
                // Each chamber has its own set of type codes.
                match chamber.parse::<Chamber>()? {
                    Chamber::House => {
                        let kind: HouseCommunicationType = communication_type.parse()?;
                        service.list_house(congress, kind, &options).await
                    }
                    Chamber::Senate => {
                        let kind: SenateCommunicationType = communication_type.parse()?;
                        service.list_senate(congress, kind, &options).await
                    }
                }
            }
            CommunicationCommands::Get {
                congress,
                chamber,
                communication_type,
                number,
            } => match chamber.parse::<Chamber>()? {
                Chamber::House => {
                    let kind: HouseCommunicationType = communication_type.parse()?;
                    service.get_house(congress, kind, number).await
                }
                Chamber::Senate => {
                    let kind: SenateCommunicationType = communication_type.parse()?;
                    service.get_senate(congress, kind, number).await
                }
            },
        }
    }
}

#[derive(Default)]
pub struct RecordHandler;

impl RecordHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: RecordCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            RecordCommands::Daily { list } => {
                CongressionalRecordService::new(client)
                    .daily(&list_options(&list)?)
                    .await
            }
            RecordCommands::Volume { volume, list } => {
                CongressionalRecordService::new(client)
                    .with_max_concurrent(list.max_concurrent)
                    .daily_volume(volume, &list_options(&list)?)
                    .await
            }
            RecordCommands::Issue { volume, issue } => {
                CongressionalRecordService::new(client)
                    .daily_issue(volume, issue)
                    .await
            }
            RecordCommands::Articles {
                volume,
                issue,
                list,
            } => {
                CongressionalRecordService::new(client)
                    .daily_articles(volume, issue, &list_options(&list)?)
                    .await
            }
            RecordCommands::Bound {
                year,
                month,
                day,
                list,
            } => {
                CongressionalRecordService::new(client)
                    .bound(year, month, day, &list_options(&list)?)
                    .await
            }
        }
    }
}

#[derive(Default)]
pub struct HouseRequirementHandler;

impl HouseRequirementHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: HouseRequirementCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        let service = HouseRequirementService::new(client);
        match command {
            HouseRequirementCommands::List { list } => service.list(&list_options(&list)?).await,
            HouseRequirementCommands::Get { number } => service.get(number).await,
            HouseRequirementCommands::Communications { number, list } => {
                service.communications(number, &list_options(&list)?).await
            }
        }
    }
}

#[derive(Default)]
pub struct RawHandler;

impl RawHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: RawCommands,
        client: &CongressClient,
    ) -> Result<Value, AppError> {
        match command {
            RawCommands::Get {
                endpoint,
                param,
                limit,
                offset,
            } => {
                let params = parse_params(&param)?;
                let endpoint = normalize_endpoint(&endpoint);
                Ok(client.get(&endpoint, Some(&params), limit, offset).await?)
            }
            RawCommands::All {
                endpoint,
                param,
                max_results,
            } => {
                let params = parse_params(&param)?;
                let endpoint = normalize_endpoint(&endpoint);
                let all = client.get_all(&endpoint, Some(&params), max_results).await?;
                Ok(all.into_value())
            }
        }
    }
}

/// Offline API facts; never needs an API key
#[derive(Default)]
pub struct InfoHandler;

impl InfoHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, enums: bool, settings: &Settings) -> Result<Value, AppError> {
        let config = Config::without_key(settings, |key| std::env::var(key).ok())?;
        let mut info = reference::api_info(&config.base_url, config.default_limit, config.max_limit);
        if let Some(object) = info.as_object_mut() {
            object.insert("recent_congresses".to_string(), reference::recent_congresses(7));
            if enums {
                object.insert("enums".to_string(), reference::enum_reference());
            }
        }
        Ok(info)
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        settings: &Settings,
        settings_path: Option<PathBuf>,
        api_key: Option<&str>,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                let path = match settings_path {
                    Some(path) => path.display().to_string(),
                    None => Settings::settings_file_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| "(unavailable)".to_string()),
                };

                println!("Current Configuration:");
                println!("=====================");
                println!("Settings file: {}", path);

                match api_key.filter(|key| !key.trim().is_empty()) {
                    Some(key) => println!("API Key: {} ({})", mask_api_key(key), API_KEY_ENV),
                    None => println!("API Key: Not set ({})", API_KEY_ENV),
                }

                let rows = [
                    (
                        "base_url",
                        BASE_URL_ENV,
                        settings.base_url.clone(),
                        DEFAULT_BASE_URL.to_string(),
                    ),
                    (
                        "default_limit",
                        DEFAULT_LIMIT_ENV,
                        settings.default_limit.map(|v| v.to_string()),
                        DEFAULT_LIMIT.to_string(),
                    ),
                    (
                        "max_limit",
                        MAX_LIMIT_ENV,
                        settings.max_limit.map(|v| v.to_string()),
                        MAX_LIMIT.to_string(),
                    ),
                    (
                        "timeout_secs",
                        TIMEOUT_ENV,
                        settings.timeout_secs.map(|v| v.to_string()),
                        DEFAULT_TIMEOUT_SECS.to_string(),
                    ),
                    (
                        "max_retries",
                        MAX_RETRIES_ENV,
                        settings.max_retries.map(|v| v.to_string()),
                        DEFAULT_MAX_RETRIES.to_string(),
                    ),
                    (
                        "retry_base_delay_secs",
                        RETRY_BASE_DELAY_ENV,
                        settings.retry_base_delay_secs.map(|v| v.to_string()),
                        DEFAULT_RETRY_BASE_DELAY_SECS.to_string(),
                    ),
                ];

                for (name, env, file_value, default) in rows {
                    let (value, source) = effective_value(env, file_value, default);
                    println!("  {}: {} ({})", name, value, source);
                }

                Ok(())
            }
            ConfigCommands::Set {
                base_url,
                default_limit,
                max_limit,
                timeout,
                max_retries,
                retry_base_delay,
            } => {
                let mut updated = settings.clone();
                let mut updated_fields = Vec::new();

                if let Some(url) = base_url {
                    updated_fields.push(format!("base_url to: {}", url));
                    updated.base_url = Some(url);
                }
                if let Some(limit) = default_limit {
                    updated.default_limit = Some(limit);
                    updated_fields.push(format!("default_limit to: {}", limit));
                }
                if let Some(limit) = max_limit {
                    updated.max_limit = Some(limit);
                    updated_fields.push(format!("max_limit to: {}", limit));
                }
                if let Some(secs) = timeout {
                    updated.timeout_secs = Some(secs);
                    updated_fields.push(format!("timeout_secs to: {}", secs));
                }
                if let Some(retries) = max_retries {
                    updated.max_retries = Some(retries);
                    updated_fields.push(format!("max_retries to: {}", retries));
                }
                if let Some(secs) = retry_base_delay {
                    updated.retry_base_delay_secs = Some(secs);
                    updated_fields.push(format!("retry_base_delay_secs to: {}", secs));
                }

                if updated_fields.is_empty() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No configuration values provided. Use --base-url, --default-limit, --max-limit, --timeout, --max-retries or --retry-base-delay".to_string(),
                    )));
                }

                // Reject values the client would refuse at startup.
                Config::without_key(&updated, |_| None)?;

                updated.save(settings_path)?;
                println!("Set {}", updated_fields.join(", "));
                println!("Configuration saved successfully.");
                Ok(())
            }
        }
    }
}

/// Value and source label: environment, settings file or default
fn effective_value(env: &str, file_value: Option<String>, default: String) -> (String, &'static str) {
    if let Some(value) = std::env::var(env).ok().filter(|v| !v.trim().is_empty()) {
        return (value, "env");
    }
    match file_value {
        Some(value) => (value, "settings file"),
        None => (default, "default"),
    }
}
