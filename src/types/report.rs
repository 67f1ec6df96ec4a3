use crate::scoring::ScoreBreakdown;
use crate::types::connection::Stage;
use crate::types::hope::HopeEvent;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    pub connection_id: String,
    pub nickname: String,
    pub stage: Stage,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub entries: Vec<ScoreEntry>,
    pub average_score: u32,
}

impl ScoreReport {
    pub fn sort_entries(&mut self) {
        self.entries.sort_by(|left, right| {
            right
                .breakdown
                .total
                .cmp(&left.breakdown.total)
                .then_with(|| left.connection_id.cmp(&right.connection_id))
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Increasing => "increasing",
            Trend::Stable => "stable",
            Trend::Decreasing => "decreasing",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestConnection {
    pub connection_id: String,
    pub nickname: String,
    pub his: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyHopeReport {
    pub user_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub trend: Trend,
    pub average_hope: Option<f64>,
    pub best_connection: Option<BestConnection>,
    pub recent_events: Vec<HopeEvent>,
    pub recommendations: Vec<String>,
}
