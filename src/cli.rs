use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "matchmeter",
    version,
    about = "Relationship progress scoring and hope tracking CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding matchmeter.toml and .matchmeter/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Stage(StageCommand),
    Score(ScoreCommand),
    Validate(ValidateCommand),
    His(HisCommand),
    RecordExperience(RecordExperienceCommand),
    RecordEvent(RecordEventCommand),
    Weekly(WeeklyCommand),
    Prompt(PromptCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum EventKind {
    PositiveMessage,
    DatePlanned,
    DateWentWell,
    NegativeSignal,
    NoResponse,
}

/// Print the points a stage label is worth
#[derive(Args)]
pub struct StageCommand {
    pub label: String,
}

/// Score every connection in a snapshot file or directory
#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

/// Validate raw connection form data
#[derive(Args)]
pub struct ValidateCommand {
    pub path: PathBuf,
    /// Sanitize nickname and platform before validating
    #[arg(long)]
    pub sanitize: bool,
}

/// Print the Hope Implementation Score of one connection
#[derive(Args)]
pub struct HisCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub connection: String,
    #[arg(long)]
    pub store: PathBuf,
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

/// Append a daily hope check-in
#[derive(Args)]
pub struct RecordExperienceCommand {
    #[arg(long)]
    pub store: PathBuf,
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub connection: String,
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long)]
    pub morning: u8,
    #[arg(long)]
    pub afternoon: u8,
    #[arg(long)]
    pub evening: u8,
}

/// Append a hope event
#[derive(Args)]
pub struct RecordEventCommand {
    #[arg(long)]
    pub store: PathBuf,
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub connection: String,
    #[arg(long = "type", value_enum)]
    pub event_type: EventKind,
    #[arg(long)]
    pub intensity: u8,
    #[arg(long, allow_negative_numbers = true)]
    pub impact: i8,
    #[arg(long)]
    pub note: Option<String>,
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,
}

/// Summarise the last seven days of hope observations
#[derive(Args)]
pub struct WeeklyCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub store: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

/// Build an AI analysis prompt for one connection
#[derive(Args)]
pub struct PromptCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub connection: String,
    /// Exported chat transcript to include
    #[arg(long)]
    pub chat: Option<PathBuf>,
}
