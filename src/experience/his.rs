use crate::scoring::relationship_score;
use crate::types::config::HisWeights;
use crate::types::connection::Connection;
use crate::types::hope::{DailyHopeExperience, HopeEvent};

pub const MIN_HIS: f64 = 1.0;
pub const MAX_HIS: f64 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct CurrentMetrics {
    pub relationship_score: u32,
    pub recent_events: Vec<HopeEvent>,
}

impl CurrentMetrics {
    pub fn for_connection(connection: &Connection, recent_events: Vec<HopeEvent>) -> Self {
        Self {
            relationship_score: relationship_score(connection),
            recent_events,
        }
    }
}

/// Hope Implementation Score in [1, 100], one decimal place.
///
/// Blends the recency-weighted daily hope history with the current
/// relationship score, then shifts the blend by the intensity-weighted
/// impact of recent events. Without history the relationship score stands
/// in for it.
pub fn calculate_his(
    connection: &Connection,
    recent_experiences: &[DailyHopeExperience],
    current: &CurrentMetrics,
    weights: &HisWeights,
) -> f64 {
    let progress = f64::from(current.relationship_score.min(100));
    let history = history_component(connection, recent_experiences, weights.decay)
        .unwrap_or(progress);
    let events: f64 = current
        .recent_events
        .iter()
        .filter(|event| event.connection_id == connection.id)
        .map(HopeEvent::weighted_impact)
        .sum::<f64>()
        * weights.event_scale;

    let raw = weights.history_weight * history + weights.progress_weight * progress + events;
    round_tenth(raw.clamp(MIN_HIS, MAX_HIS))
}

fn history_component(
    connection: &Connection,
    experiences: &[DailyHopeExperience],
    decay: f64,
) -> Option<f64> {
    let mut own: Vec<&DailyHopeExperience> = experiences
        .iter()
        .filter(|experience| experience.connection_id == connection.id)
        .collect();
    if own.is_empty() {
        return None;
    }
    own.sort_by(|left, right| right.date.cmp(&left.date));

    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    let mut weight = 1.0;
    for experience in own {
        weighted += experience.average_hope() * weight;
        total_weight += weight;
        weight *= decay;
    }
    Some(weighted / total_weight)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::connection::fixtures::connection;
    use crate::types::connection::Stage;
    use crate::types::hope::HopeEventType;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn day(connection_id: &str, day: u32, hope: u8) -> DailyHopeExperience {
        DailyHopeExperience {
            user_id: "user-1".to_string(),
            connection_id: connection_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, day).expect("date should be valid"),
            morning_hope: hope,
            afternoon_hope: hope,
            evening_hope: hope,
            events: vec![],
        }
    }

    fn event(connection_id: &str, intensity: u8, impact: i8) -> HopeEvent {
        HopeEvent {
            user_id: "user-1".to_string(),
            connection_id: connection_id.to_string(),
            timestamp: Utc
                .with_ymd_and_hms(2026, 3, 5, 12, 0, 0)
                .single()
                .expect("timestamp should be valid"),
            event_type: HopeEventType::DateWentWell,
            intensity,
            his_impact: impact,
            note: None,
        }
    }

    fn metrics(score: u32, events: Vec<HopeEvent>) -> CurrentMetrics {
        CurrentMetrics {
            relationship_score: score,
            recent_events: events,
        }
    }

    #[test]
    fn without_history_the_score_stands_in() {
        let c = connection("c1", Stage::Dating);
        let his = calculate_his(&c, &[], &metrics(40, vec![]), &HisWeights::default());
        assert!((his - 40.0).abs() < 1e-9);
    }

    #[test]
    fn history_blends_with_progress() {
        let c = connection("c1", Stage::Dating);
        let history = [day("c1", 1, 80)];
        let his = calculate_his(&c, &history, &metrics(40, vec![]), &HisWeights::default());
        // 0.6 * 80 + 0.4 * 40
        assert!((his - 64.0).abs() < 1e-9);
    }

    #[test]
    fn recent_days_weigh_more_than_old_ones() {
        let c = connection("c1", Stage::Dating);
        let rising = [day("c1", 1, 20), day("c1", 2, 80)];
        let falling = [day("c1", 1, 80), day("c1", 2, 20)];
        let weights = HisWeights::default();
        let up = calculate_his(&c, &rising, &metrics(50, vec![]), &weights);
        let down = calculate_his(&c, &falling, &metrics(50, vec![]), &weights);
        assert!(up > down, "rising {up} should beat falling {down}");
    }

    #[test]
    fn other_connections_are_ignored() {
        let c = connection("c1", Stage::Dating);
        let history = [day("c2", 1, 100)];
        let his = calculate_his(
            &c,
            &history,
            &metrics(30, vec![event("c2", 10, 10)]),
            &HisWeights::default(),
        );
        assert!((his - 30.0).abs() < 1e-9);
    }

    #[test]
    fn events_shift_the_index_by_weighted_impact() {
        let c = connection("c1", Stage::Dating);
        let his = calculate_his(
            &c,
            &[],
            &metrics(50, vec![event("c1", 5, 4), event("c1", 10, -2)]),
            &HisWeights::default(),
        );
        // 50 + (2.0 - 2.0) * 1.5
        assert!((his - 50.0).abs() < 1e-9);

        let his = calculate_his(
            &c,
            &[],
            &metrics(50, vec![event("c1", 10, 6)]),
            &HisWeights::default(),
        );
        assert!((his - 59.0).abs() < 1e-9);
    }

    #[test]
    fn index_is_clamped_to_one_through_hundred() {
        let c = connection("c1", Stage::Dating);
        let weights = HisWeights::default();
        let low = calculate_his(
            &c,
            &[day("c1", 1, 0)],
            &metrics(0, vec![event("c1", 10, -10); 3]),
            &weights,
        );
        assert!((low - MIN_HIS).abs() < 1e-9);

        let high = calculate_his(
            &c,
            &[day("c1", 1, 100)],
            &metrics(100, vec![event("c1", 10, 10); 3]),
            &weights,
        );
        assert!((high - MAX_HIS).abs() < 1e-9);
    }

    #[test]
    fn for_connection_uses_relationship_score() {
        let c = connection("c1", Stage::Exclusive);
        assert_eq!(CurrentMetrics::for_connection(&c, vec![]).relationship_score, 30);
    }
}
