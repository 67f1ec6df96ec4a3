pub mod json;
pub mod md;

use crate::error::MatchmeterError;
use crate::types::report::{ScoreReport, WeeklyHopeReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_scores(report: &ScoreReport, format: OutputFormat) -> Result<String, MatchmeterError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(MatchmeterError::Json),
        OutputFormat::Md => Ok(md::scores_to_markdown(report)),
    }
}

pub fn render_weekly(
    report: &WeeklyHopeReport,
    format: OutputFormat,
) -> Result<String, MatchmeterError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(MatchmeterError::Json),
        OutputFormat::Md => Ok(md::weekly_to_markdown(report)),
    }
}
