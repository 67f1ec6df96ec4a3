mod cli;
mod config;
mod error;
mod experience;
mod prompt;
mod report;
mod scan;
mod scoring;
mod types;
mod validate;

use crate::error::MatchmeterError;
use crate::experience::store::JsonlStore;
use crate::experience::ExperienceTracker;
use crate::types::hope::{DailyHopeExperience, HopeEvent, HopeEventType};
use chrono::Utc;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn event_type(kind: &cli::EventKind) -> HopeEventType {
    match kind {
        cli::EventKind::PositiveMessage => HopeEventType::PositiveMessage,
        cli::EventKind::DatePlanned => HopeEventType::DatePlanned,
        cli::EventKind::DateWentWell => HopeEventType::DateWentWell,
        cli::EventKind::NegativeSignal => HopeEventType::NegativeSignal,
        cli::EventKind::NoResponse => HopeEventType::NoResponse,
    }
}

fn tracker(
    store: &std::path::Path,
    cfg: &types::config::MatchmeterConfig,
) -> ExperienceTracker<JsonlStore> {
    ExperienceTracker::new(
        JsonlStore::new(store),
        cfg.his_weights(),
        cfg.report_settings(),
    )
}

fn run() -> Result<i32, MatchmeterError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let cfg = config::load_config(&cli.config_dir)?;

    match cli.command {
        cli::Commands::Stage(cmd) => {
            println!("{}", scoring::stage::stage_score(&cmd.label));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let connections = scan::load_connections(&cmd.path)?;
            if connections.is_empty() {
                warn!(path = %cmd.path.display(), "no connections found");
            }
            let score_report = scoring::score_report(&connections);
            let rendered = report::render_scores(&score_report, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let inputs = scan::load_inputs(&cmd.path)?;
            let mut invalid = 0usize;
            for (index, input) in inputs.into_iter().enumerate() {
                let input = if cmd.sanitize {
                    validate::sanitize(input)
                } else {
                    input
                };
                let result = validate::validate(&input);
                if result.is_valid {
                    println!("record {}: ok", index + 1);
                } else {
                    invalid += 1;
                    println!("record {}: invalid", index + 1);
                    for error in &result.errors {
                        println!("  - {error}");
                    }
                }
            }
            if invalid > 0 {
                info!(invalid, "validation found invalid records");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::His(cmd) => {
            let connections = scan::load_connections(&cmd.path)?;
            let connection = scan::find_connection(&connections, &cmd.connection)?;
            let his = tracker(&cmd.store, &cfg)
                .his_for_connection(connection, cmd.now.unwrap_or_else(Utc::now))?;
            println!(
                "HIS for {} [{}]: {:.1}",
                connection.nickname, connection.id, his
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::RecordExperience(cmd) => {
            let experience = DailyHopeExperience {
                user_id: cmd.user,
                connection_id: cmd.connection,
                date: cmd.date,
                morning_hope: cmd.morning,
                afternoon_hope: cmd.afternoon,
                evening_hope: cmd.evening,
                events: Vec::new(),
            };
            tracker(&cmd.store, &cfg).record_daily_experience(&experience)?;
            println!(
                "recorded {} for {} (total hope {})",
                experience.date,
                experience.connection_id,
                experience.total_hope_points()
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::RecordEvent(cmd) => {
            let event = HopeEvent {
                user_id: cmd.user,
                connection_id: cmd.connection,
                timestamp: cmd.at.unwrap_or_else(Utc::now),
                event_type: event_type(&cmd.event_type),
                intensity: cmd.intensity,
                his_impact: cmd.impact,
                note: cmd.note,
            };
            tracker(&cmd.store, &cfg).record_hope_event(&event)?;
            println!(
                "recorded {} for {} (impact {:+})",
                event.event_type, event.connection_id, event.his_impact
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Weekly(cmd) => {
            let connections = scan::load_connections(&cmd.path)?;
            let weekly = tracker(&cmd.store, &cfg).generate_weekly_hope_report(
                &cmd.user,
                &connections,
                cmd.now.unwrap_or_else(Utc::now),
            )?;
            let rendered = report::render_weekly(&weekly, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Prompt(cmd) => {
            let connections = scan::load_connections(&cmd.path)?;
            let connection = scan::find_connection(&connections, &cmd.connection)?;
            let chat = match &cmd.chat {
                Some(path) => {
                    if !path.exists() {
                        return Err(MatchmeterError::PathNotFound(path.display().to_string()));
                    }
                    std::fs::read_to_string(path)?
                }
                None => String::new(),
            };
            println!(
                "{}",
                prompt::build_analysis_prompt(connection, &chat, cfg.max_chat_chars())
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
