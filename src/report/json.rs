use serde::Serialize;

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreBreakdown;
    use crate::types::connection::Stage;
    use crate::types::report::{ScoreEntry, ScoreReport, Trend, WeeklyHopeReport};
    use chrono::NaiveDate;

    #[test]
    fn score_json_contains_average_and_stage_label() {
        let report = ScoreReport {
            entries: vec![ScoreEntry {
                connection_id: "c1".to_string(),
                nickname: "Aki".to_string(),
                stage: Stage::Exclusive,
                breakdown: ScoreBreakdown::new(30, 25, 6, 14),
            }],
            average_score: 75,
        };

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"average_score\": 75"));
        assert!(rendered.contains("\"stage\": \"交際中\""));
        assert!(rendered.contains("\"total\": 75"));
    }

    #[test]
    fn weekly_json_uses_lowercase_trend() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).expect("date should be valid");
        let report = WeeklyHopeReport {
            user_id: "u1".to_string(),
            week_start: date,
            week_end: date,
            trend: Trend::Decreasing,
            average_hope: None,
            best_connection: None,
            recent_events: vec![],
            recommendations: vec!["rest".to_string()],
        };

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"trend\": \"decreasing\""));
        assert!(rendered.contains("\"week_start\": \"2026-03-10\""));
    }
}
