use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_READING: u8 = 100;
pub const INTENSITY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;
pub const IMPACT_RANGE: std::ops::RangeInclusive<i8> = -10..=10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HopeEventType {
    PositiveMessage,
    DatePlanned,
    DateWentWell,
    NegativeSignal,
    NoResponse,
}

impl HopeEventType {
    pub fn as_str(self) -> &'static str {
        match self {
            HopeEventType::PositiveMessage => "positive_message",
            HopeEventType::DatePlanned => "date_planned",
            HopeEventType::DateWentWell => "date_went_well",
            HopeEventType::NegativeSignal => "negative_signal",
            HopeEventType::NoResponse => "no_response",
        }
    }
}

impl fmt::Display for HopeEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopeEvent {
    pub user_id: String,
    pub connection_id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: HopeEventType,
    pub intensity: u8,
    pub his_impact: i8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl HopeEvent {
    /// Impact scaled by intensity, in -10.0..=10.0.
    pub fn weighted_impact(&self) -> f64 {
        f64::from(self.his_impact) * f64::from(self.intensity) / 10.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHopeExperience {
    pub user_id: String,
    pub connection_id: String,
    pub date: NaiveDate,
    pub morning_hope: u8,
    pub afternoon_hope: u8,
    pub evening_hope: u8,
    #[serde(default)]
    pub events: Vec<HopeEvent>,
}

impl DailyHopeExperience {
    pub fn total_hope_points(&self) -> u16 {
        u16::from(self.morning_hope) + u16::from(self.afternoon_hope) + u16::from(self.evening_hope)
    }

    pub fn average_hope(&self) -> f64 {
        f64::from(self.total_hope_points()) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_and_average_follow_readings() {
        let experience = DailyHopeExperience {
            user_id: "u1".to_string(),
            connection_id: "c1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 1).expect("date should be valid"),
            morning_hope: 90,
            afternoon_hope: 60,
            evening_hope: 30,
            events: vec![],
        };
        assert_eq!(experience.total_hope_points(), 180);
        assert!((experience.average_hope() - 60.0).abs() < f64::EPSILON);
    }
}
