use crate::experience::his::{calculate_his, CurrentMetrics};
use crate::types::config::{HisWeights, ReportSettings};
use crate::types::connection::Connection;
use crate::types::hope::{DailyHopeExperience, HopeEvent};
use crate::types::report::{BestConnection, Trend, WeeklyHopeReport};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;

pub const WINDOW_DAYS: i64 = 7;

pub struct WeeklyInputs<'a> {
    pub user_id: &'a str,
    pub connections: &'a [Connection],
    pub experiences: &'a [DailyHopeExperience],
    pub events: &'a [HopeEvent],
    pub now: DateTime<Utc>,
}

pub fn build_weekly_report(
    inputs: &WeeklyInputs<'_>,
    weights: &HisWeights,
    settings: &ReportSettings,
) -> WeeklyHopeReport {
    let week_end = inputs.now.date_naive();
    let week_start = week_end - Duration::days(WINDOW_DAYS - 1);
    let in_window = |date: NaiveDate| date >= week_start && date <= week_end;

    let experiences: Vec<DailyHopeExperience> = inputs
        .experiences
        .iter()
        .filter(|experience| experience.user_id == inputs.user_id && in_window(experience.date))
        .cloned()
        .collect();
    let mut events: Vec<HopeEvent> = inputs
        .events
        .iter()
        .filter(|event| event.user_id == inputs.user_id && in_window(event.timestamp.date_naive()))
        .cloned()
        .collect();
    events.sort_by(|left, right| right.timestamp.cmp(&left.timestamp));

    let daily = daily_means(&experiences);
    let trend = classify_trend(&daily, settings.trend_threshold);
    let average_hope = if experiences.is_empty() {
        None
    } else {
        let sum: f64 = experiences.iter().map(DailyHopeExperience::average_hope).sum();
        Some(((sum / experiences.len() as f64) * 10.0).round() / 10.0)
    };
    let best_connection = best_connection(inputs, &experiences, &events, weights);
    let recommendations = recommendations(trend, &experiences, &events, best_connection.as_ref());

    events.truncate(settings.max_recent_events);

    WeeklyHopeReport {
        user_id: inputs.user_id.to_string(),
        week_start,
        week_end,
        trend,
        average_hope,
        best_connection,
        recent_events: events,
        recommendations,
    }
}

fn daily_means(experiences: &[DailyHopeExperience]) -> Vec<f64> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for experience in experiences {
        let slot = by_date.entry(experience.date).or_insert((0.0, 0));
        slot.0 += experience.average_hope();
        slot.1 += 1;
    }
    by_date
        .values()
        .map(|(sum, count)| sum / *count as f64)
        .collect()
}

/// Compares the earlier half of the dated means against the later half.
pub fn classify_trend(daily_means: &[f64], threshold: f64) -> Trend {
    if daily_means.len() < 2 {
        return Trend::Stable;
    }
    let half = daily_means.len() / 2;
    let earlier = mean(&daily_means[..half]);
    let later = mean(&daily_means[daily_means.len() - half..]);
    let delta = later - earlier;
    if delta > threshold {
        Trend::Increasing
    } else if delta < -threshold {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn best_connection(
    inputs: &WeeklyInputs<'_>,
    experiences: &[DailyHopeExperience],
    events: &[HopeEvent],
    weights: &HisWeights,
) -> Option<BestConnection> {
    inputs
        .connections
        .iter()
        .filter(|connection| connection.user_id == inputs.user_id)
        .filter(|connection| {
            experiences
                .iter()
                .any(|experience| experience.connection_id == connection.id)
        })
        .map(|connection| {
            let metrics = CurrentMetrics::for_connection(connection, events.to_vec());
            BestConnection {
                connection_id: connection.id.clone(),
                nickname: connection.nickname.clone(),
                his: calculate_his(connection, experiences, &metrics, weights),
            }
        })
        .fold(None, |best: Option<BestConnection>, candidate| match best {
            Some(current)
                if current.his > candidate.his
                    || (current.his == candidate.his
                        && current.connection_id <= candidate.connection_id) =>
            {
                Some(current)
            }
            _ => Some(candidate),
        })
}

fn recommendations(
    trend: Trend,
    experiences: &[DailyHopeExperience],
    events: &[HopeEvent],
    best: Option<&BestConnection>,
) -> Vec<String> {
    if experiences.is_empty() && events.is_empty() {
        return vec![
            "Record a daily hope check-in for each connection to start building a trend."
                .to_string(),
        ];
    }

    let mut out = Vec::new();
    match trend {
        Trend::Decreasing => out.push(
            "Hope is trending down this week; consider pausing to reflect on what you want from these connections."
                .to_string(),
        ),
        Trend::Increasing => out.push(
            "Hope is trending up this week; keep the momentum with regular, genuine contact."
                .to_string(),
        ),
        Trend::Stable => {}
    }

    let negative = events.iter().filter(|event| event.his_impact < 0).count();
    let positive = events.iter().filter(|event| event.his_impact > 0).count();
    if negative > positive {
        out.push(format!(
            "{negative} of {} recent events lowered your hope; look for patterns before investing more time.",
            events.len()
        ));
    }

    if let Some(best) = best {
        out.push(format!(
            "{} is your most promising connection this week (HIS {:.1}); prioritise planning your next step together.",
            best.nickname, best.his
        ));
    }

    if out.is_empty() {
        out.push(
            "Hope is steady this week; try a new conversation topic or plan a date to move things forward."
                .to_string(),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::connection::fixtures::connection;
    use crate::types::connection::Stage;
    use crate::types::hope::HopeEventType;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 20, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

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

    fn event(connection_id: &str, day: u32, impact: i8) -> HopeEvent {
        HopeEvent {
            user_id: "user-1".to_string(),
            connection_id: connection_id.to_string(),
            timestamp: Utc
                .with_ymd_and_hms(2026, 3, day, 12, 0, 0)
                .single()
                .expect("timestamp should be valid"),
            event_type: if impact < 0 {
                HopeEventType::NoResponse
            } else {
                HopeEventType::PositiveMessage
            },
            intensity: 5,
            his_impact: impact,
            note: None,
        }
    }

    fn report(
        connections: &[Connection],
        experiences: &[DailyHopeExperience],
        events: &[HopeEvent],
    ) -> WeeklyHopeReport {
        build_weekly_report(
            &WeeklyInputs {
                user_id: "user-1",
                connections,
                experiences,
                events,
                now: now(),
            },
            &HisWeights::default(),
            &ReportSettings::default(),
        )
    }

    #[test]
    fn trend_needs_two_days_and_a_threshold_move() {
        assert_eq!(classify_trend(&[], 5.0), Trend::Stable);
        assert_eq!(classify_trend(&[90.0], 5.0), Trend::Stable);
        assert_eq!(classify_trend(&[40.0, 60.0], 5.0), Trend::Increasing);
        assert_eq!(classify_trend(&[60.0, 40.0], 5.0), Trend::Decreasing);
        assert_eq!(classify_trend(&[50.0, 53.0], 5.0), Trend::Stable);
        // The middle day of an odd-length week is left out.
        assert_eq!(classify_trend(&[50.0, 0.0, 52.0], 5.0), Trend::Stable);
    }

    #[test]
    fn empty_week_asks_for_check_ins() {
        let report = report(&[], &[], &[]);
        assert_eq!(report.trend, Trend::Stable);
        assert!(report.average_hope.is_none());
        assert!(report.best_connection.is_none());
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0].contains("daily hope check-in"));
    }

    #[test]
    fn window_covers_seven_days_ending_today() {
        let experiences = [day("c1", 3, 10), day("c1", 4, 40), day("c1", 10, 80)];
        let report = report(&[], &experiences, &[]);
        assert_eq!(report.week_start.to_string(), "2026-03-04");
        assert_eq!(report.week_end.to_string(), "2026-03-10");
        assert_eq!(report.average_hope, Some(60.0));
        assert_eq!(report.trend, Trend::Increasing);
    }

    #[test]
    fn best_connection_has_the_highest_his() {
        let connections = [
            connection("c1", Stage::Messaging),
            connection("c2", Stage::Exclusive),
            connection("c3", Stage::Exclusive),
        ];
        let experiences = [day("c1", 8, 40), day("c2", 8, 70), day("c3", 9, 70)];
        let report = report(&connections, &experiences, &[]);
        let best = report.best_connection.expect("best connection should exist");
        // c2 and c3 tie; the smaller id wins.
        assert_eq!(best.connection_id, "c2");
        assert!(report
            .recommendations
            .iter()
            .any(|line| line.contains("most promising")));
    }

    #[test]
    fn recent_events_are_newest_first_and_capped() {
        let events: Vec<HopeEvent> = (4..=10)
            .flat_map(|d| [event("c1", d, 2), event("c1", d, -3)])
            .collect();
        let report = build_weekly_report(
            &WeeklyInputs {
                user_id: "user-1",
                connections: &[],
                experiences: &[],
                events: &events,
                now: now(),
            },
            &HisWeights::default(),
            &ReportSettings {
                trend_threshold: 5.0,
                max_recent_events: 3,
            },
        );
        assert_eq!(report.recent_events.len(), 3);
        assert_eq!(
            report.recent_events[0].timestamp.date_naive().to_string(),
            "2026-03-10"
        );
    }

    #[test]
    fn negative_events_trigger_a_warning() {
        let events = [event("c1", 9, -5), event("c1", 9, -2), event("c1", 10, 3)];
        let experiences = [day("c1", 9, 50), day("c1", 10, 50)];
        let report = report(&[], &experiences, &events);
        assert!(report
            .recommendations
            .iter()
            .any(|line| line.starts_with("2 of 3 recent events")));
    }
}
