use clap::{Args, Parser, Subcommand, ValueEnum};
use congress_core::api::enrich::DEFAULT_MAX_CONCURRENT;

#[derive(Parser)]
#[command(name = "congress-cli")]
#[command(about = "Command line interface for the Congress.gov API")]
#[command(version)]
#[command(after_help = "Examples:
  congress-cli bill list 118 --limit 10          # Latest bills of the 118th Congress
  congress-cli bill get 117 hr 3076              # One bill
  congress-cli bill detail 117 hr 3076 actions   # Actions taken on a bill
  congress-cli member list --state CA --current true
  congress-cli committee list --chamber house --format table
  congress-cli nomination list 118 --limit 5
  congress-cli vote list 118 1                   # House roll call votes, first session
  congress-cli crs-report get R47000
  congress-cli record bound --year 2023 --month 6
  congress-cli raw all /law/118 --max-results 500
  congress-cli info --enums                      # Valid type codes (no API key needed)

Environment Variables:
  CONGRESS_API_KEY            Congress.gov API key (required for API commands)
  CONGRESS_API_BASE_URL       API base URL
  CONGRESS_DEFAULT_LIMIT      Page size when --limit is omitted
  CONGRESS_MAX_LIMIT          Largest page size sent to the API
  CONGRESS_TIMEOUT            Request timeout in seconds
  CONGRESS_MAX_RETRIES        Retries after a rate-limited response
  CONGRESS_RETRY_BASE_DELAY   First retry delay in seconds (doubles each retry)
  RUST_LOG                    Log filter, e.g. congress_core=debug")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Congress.gov API key for authentication
    #[arg(long, global = true, env = "CONGRESS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Table of list results
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bills and resolutions
    Bill {
        #[command(subcommand)]
        command: BillCommands,
    },
    /// Members of Congress
    Member {
        #[command(subcommand)]
        command: MemberCommands,
    },
    /// Congressional committees
    Committee {
        #[command(subcommand)]
        command: CommitteeCommands,
    },
    /// Public and private laws
    Law {
        #[command(subcommand)]
        command: LawCommands,
    },
    /// Amendments
    Amendment {
        #[command(subcommand)]
        command: AmendmentCommands,
    },
    /// Congresses and sessions
    Congress {
        #[command(subcommand)]
        command: CongressCommands,
    },
    /// Presidential nominations
    Nomination {
        #[command(subcommand)]
        command: NominationCommands,
    },
    /// Treaties submitted to the Senate
    Treaty {
        #[command(subcommand)]
        command: TreatyCommands,
    },
    /// CRS bill summaries
    Summary {
        #[command(subcommand)]
        command: SummaryCommands,
    },
    /// House roll call votes
    Vote {
        #[command(subcommand)]
        command: VoteCommands,
    },
    /// Congressional Research Service reports
    CrsReport {
        #[command(subcommand)]
        command: CrsReportCommands,
    },
    /// Printed committee hearings
    Hearing {
        #[command(subcommand)]
        command: HearingCommands,
    },
    /// Committee reports
    CommitteeReport {
        #[command(subcommand)]
        command: CommitteeReportCommands,
    },
    /// Committee prints
    CommitteePrint {
        #[command(subcommand)]
        command: CommitteePrintCommands,
    },
    /// Committee meetings and markups
    CommitteeMeeting {
        #[command(subcommand)]
        command: CommitteeMeetingCommands,
    },
    /// House and Senate communications
    Communication {
        #[command(subcommand)]
        command: CommunicationCommands,
    },
    /// Daily and bound Congressional Record
    Record {
        #[command(subcommand)]
        command: RecordCommands,
    },
    /// House reporting requirements
    HouseRequirement {
        #[command(subcommand)]
        command: HouseRequirementCommands,
    },
    /// Any API endpoint
    Raw {
        #[command(subcommand)]
        command: RawCommands,
    },
    /// API information and reference tables (works offline)
    Info {
        /// Include the valid bill, amendment, chamber, law, report and communication type codes
        #[arg(long)]
        enums: bool,
    },
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Paging, date filters and sort order shared by list commands
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Maximum number of results to return (1-250)
    #[arg(long, help_heading = "List Options")]
    pub limit: Option<u32>,

    /// Starting position for pagination
    #[arg(long, default_value_t = 0, help_heading = "List Options")]
    pub offset: u32,

    /// Only records updated on or after this date (YYYY-MM-DD)
    #[arg(long, help_heading = "List Options")]
    pub from_date: Option<String>,

    /// Only records updated on or before this date (YYYY-MM-DD)
    #[arg(long, help_heading = "List Options")]
    pub to_date: Option<String>,

    /// Sort order: updateDate+asc or updateDate+desc
    #[arg(long, help_heading = "List Options")]
    pub sort: Option<String>,

    /// Detail records fetched per list (items past this are not enriched)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT, help_heading = "List Options")]
    pub max_concurrent: usize,
}

#[derive(Subcommand, Debug)]
pub enum BillCommands {
    /// List bills of a Congress with full details
    #[command(after_help = "Examples:
  congress-cli bill list 118
  congress-cli bill list 118 --bill-type hjres --sort updateDate+desc")]
    List {
        /// Congress number (e.g. 118)
        congress: u32,
        /// Restrict to one type: hr, s, hjres, sjres, hconres, sconres, hres, sres
        #[arg(long, short = 't')]
        bill_type: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one bill
    Get {
        congress: u32,
        /// Bill type: hr, s, hjres, sjres, hconres, sconres, hres, sres
        bill_type: String,
        number: u32,
    },
    /// List a bill's actions, amendments, committees, cosponsors, relatedbills,
    /// subjects, summaries, text or titles
    Detail {
        congress: u32,
        bill_type: String,
        number: u32,
        subresource: String,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// List members with full details
    #[command(after_help = "Examples:
  congress-cli member list --current true
  congress-cli member list --congress 118
  congress-cli member list --state MI --district 10")]
    List {
        /// Members of one Congress
        #[arg(long, conflicts_with = "state")]
        congress: Option<u32>,
        /// Two-letter state code
        #[arg(long)]
        state: Option<String>,
        /// House district within --state (0 for at-large)
        #[arg(long, requires = "state")]
        district: Option<u32>,
        /// true for currently serving members, false for former members
        #[arg(long)]
        current: Option<bool>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one member by bioguide ID
    Get { bioguide_id: String },
    /// Legislation sponsored by a member
    Sponsored {
        bioguide_id: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Legislation cosponsored by a member
    Cosponsored {
        bioguide_id: String,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommitteeCommands {
    /// List committees with full details
    List {
        /// house or senate
        #[arg(long)]
        chamber: Option<String>,
        /// Committees of one Congress (requires --chamber)
        #[arg(long, requires = "chamber")]
        congress: Option<u32>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one committee by system code
    Get {
        chamber: String,
        /// System code, e.g. hsju00
        committee_code: String,
        /// Committee as it stood in this Congress
        #[arg(long)]
        congress: Option<u32>,
    },
    /// Bills referred to a committee
    Bills {
        chamber: String,
        committee_code: String,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum LawCommands {
    /// List laws of a Congress with full details
    List {
        congress: u32,
        /// pub or priv
        #[arg(long)]
        law_type: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one law
    Get {
        congress: u32,
        law_type: String,
        number: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum AmendmentCommands {
    /// List amendments of a Congress
    List {
        congress: u32,
        /// hamdt, samdt or suamdt
        #[arg(long)]
        amendment_type: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one amendment
    Get {
        congress: u32,
        amendment_type: String,
        number: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum CongressCommands {
    /// List Congresses with their sessions
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one Congress
    Get { congress: u32 },
    /// Show the Congress currently in session
    Current,
}

#[derive(Subcommand, Debug)]
pub enum NominationCommands {
    /// List nominations of a Congress
    List {
        congress: u32,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one nomination, e.g. PN1064 is number 1064
    Get { congress: u32, number: u32 },
    /// Nominees of one position within a nomination
    Nominee {
        congress: u32,
        number: u32,
        /// Position ordinal within the nomination
        ordinal: u32,
    },
    /// Actions taken on a nomination
    Actions {
        congress: u32,
        number: u32,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Committees a nomination was referred to
    Committees {
        congress: u32,
        number: u32,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Printed hearings on a nomination
    Hearings {
        congress: u32,
        number: u32,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TreatyCommands {
    /// List treaties, optionally of one Congress
    List {
        #[arg(long)]
        congress: Option<u32>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one treaty
    Get {
        congress: u32,
        number: u32,
        /// Partitioned treaty suffix, e.g. A
        #[arg(long)]
        suffix: Option<String>,
    },
    /// Actions taken on a treaty
    Actions {
        congress: u32,
        number: u32,
        #[arg(long)]
        suffix: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Committees a treaty was referred to
    Committees {
        congress: u32,
        number: u32,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum SummaryCommands {
    /// List bill summaries; pass --from-date/--to-date to bound the window
    #[command(after_help = "Examples:
  congress-cli summary list --from-date 2024-03-01 --to-date 2024-03-31
  congress-cli summary list --congress 118 --bill-type hr")]
    List {
        #[arg(long)]
        congress: Option<u32>,
        /// Restrict to one bill type (requires --congress)
        #[arg(long, requires = "congress")]
        bill_type: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum VoteCommands {
    /// List House roll call votes of one session with their results
    List {
        congress: u32,
        /// Session: 1 or 2
        session: u32,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one roll call vote
    Get {
        congress: u32,
        session: u32,
        roll_call: u32,
    },
    /// How each member voted
    Members {
        congress: u32,
        session: u32,
        roll_call: u32,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum CrsReportCommands {
    /// List CRS reports with full details
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one report, e.g. R47000
    Get { report_number: String },
}

#[derive(Subcommand, Debug)]
pub enum HearingCommands {
    /// List hearings of a Congress with full details
    List {
        congress: u32,
        /// house or senate
        #[arg(long)]
        chamber: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one hearing by jacket number
    Get {
        congress: u32,
        chamber: String,
        jacket_number: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommitteeReportCommands {
    /// List committee reports of one type with full details
    List {
        congress: u32,
        /// hrpt, srpt or erpt
        report_type: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one committee report
    Get {
        congress: u32,
        report_type: String,
        number: u32,
    },
    /// Text versions of a committee report
    Text {
        congress: u32,
        report_type: String,
        number: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommitteePrintCommands {
    /// List committee prints of one chamber with full details
    List {
        congress: u32,
        chamber: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one committee print by jacket number
    Get {
        congress: u32,
        chamber: String,
        jacket_number: u32,
    },
    /// Text versions of a committee print
    Text {
        congress: u32,
        chamber: String,
        jacket_number: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommitteeMeetingCommands {
    /// List committee meetings of one chamber with full details
    List {
        congress: u32,
        chamber: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one meeting by event ID
    Get {
        congress: u32,
        chamber: String,
        event_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommunicationCommands {
    /// List communications of one type
    #[command(after_help = "Communication types:
  house:  ec, pm, pt, ml
  senate: ec, pom, pm")]
    List {
        congress: u32,
        chamber: String,
        communication_type: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one communication
    Get {
        congress: u32,
        chamber: String,
        communication_type: String,
        number: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Daily Congressional Record volumes
    Daily {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Issues of one daily volume with their sections
    Volume {
        volume: u32,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one daily issue
    Issue { volume: u32, issue: u32 },
    /// Articles of one daily issue
    Articles {
        volume: u32,
        issue: u32,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Bound Congressional Record, narrowed by date
    Bound {
        #[arg(long)]
        year: Option<u32>,
        #[arg(long, requires = "year")]
        month: Option<u32>,
        #[arg(long, requires = "month")]
        day: Option<u32>,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum HouseRequirementCommands {
    /// List House reporting requirements
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one requirement
    Get { number: u32 },
    /// Communications submitted under a requirement
    Communications {
        number: u32,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum RawCommands {
    /// Fetch one page of any endpoint
    #[command(after_help = "Examples:
  congress-cli raw get /nomination/118 --limit 5
  congress-cli raw get /summaries/118/hr --param sort=updateDate+desc")]
    Get {
        /// Endpoint path, e.g. /bill/118
        endpoint: String,
        /// Query parameter in key=value format (can be repeated)
        #[arg(long, action = clap::ArgAction::Append)]
        param: Vec<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Fetch every page of any endpoint
    All {
        endpoint: String,
        #[arg(long, action = clap::ArgAction::Append)]
        param: Vec<String>,
        /// Stop after this many results
        #[arg(long)]
        max_results: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration and where each value comes from
    Show,
    /// Store connection settings in the settings file
    #[command(after_help = "Examples:
  congress-cli config set --max-retries 5 --retry-base-delay 2
  congress-cli config set --base-url http://localhost:8080/v3")]
    Set {
        #[arg(long)]
        base_url: Option<String>,
        #[arg(long)]
        default_limit: Option<u32>,
        #[arg(long)]
        max_limit: Option<u32>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<f64>,
        #[arg(long)]
        max_retries: Option<u32>,
        /// First retry delay in seconds
        #[arg(long)]
        retry_base_delay: Option<f64>,
    },
}
