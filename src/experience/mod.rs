pub mod his;
pub mod store;
pub mod weekly;

use crate::error::{MatchmeterError, Result};
use crate::types::config::{HisWeights, ReportSettings};
use crate::types::connection::Connection;
use crate::types::hope::{
    DailyHopeExperience, HopeEvent, IMPACT_RANGE, INTENSITY_RANGE, MAX_READING,
};
use crate::types::report::WeeklyHopeReport;
use chrono::{DateTime, Duration, Utc};
use his::CurrentMetrics;
use store::ExperienceStore;
use tracing::{debug, info};
use weekly::{WeeklyInputs, WINDOW_DAYS};

pub struct ExperienceTracker<S: ExperienceStore> {
    store: S,
    weights: HisWeights,
    settings: ReportSettings,
}

impl<S: ExperienceStore> ExperienceTracker<S> {
    pub fn new(store: S, weights: HisWeights, settings: ReportSettings) -> Self {
        Self {
            store,
            weights,
            settings,
        }
    }

    pub fn record_daily_experience(&mut self, experience: &DailyHopeExperience) -> Result<()> {
        for (slot, reading) in [
            ("morning_hope", experience.morning_hope),
            ("afternoon_hope", experience.afternoon_hope),
            ("evening_hope", experience.evening_hope),
        ] {
            if reading > MAX_READING {
                return Err(MatchmeterError::InvalidObservation(format!(
                    "{slot} must be between 0 and {MAX_READING} (found {reading})"
                )));
            }
        }
        for event in &experience.events {
            check_event(event)?;
        }
        self.store.append_experience(experience)?;
        info!(
            connection = %experience.connection_id,
            date = %experience.date,
            total = experience.total_hope_points(),
            "recorded daily experience"
        );
        Ok(())
    }

    pub fn record_hope_event(&mut self, event: &HopeEvent) -> Result<()> {
        check_event(event)?;
        self.store.append_event(event)?;
        info!(
            connection = %event.connection_id,
            event_type = %event.event_type,
            impact = event.his_impact,
            "recorded hope event"
        );
        Ok(())
    }

    pub fn calculate_his(
        &self,
        connection: &Connection,
        recent_experiences: &[DailyHopeExperience],
        current: &CurrentMetrics,
    ) -> f64 {
        his::calculate_his(connection, recent_experiences, current, &self.weights)
    }

    /// HIS as of `now`: readings dated up to `now` plus the events of the
    /// last week, stand-alone or embedded in a daily check-in.
    pub fn his_for_connection(&self, connection: &Connection, now: DateTime<Utc>) -> Result<f64> {
        let today = now.date_naive();
        let experiences: Vec<DailyHopeExperience> = self
            .store
            .experiences_for_user(&connection.user_id)?
            .into_iter()
            .filter(|experience| experience.date <= today)
            .collect();
        let cutoff = now - Duration::days(WINDOW_DAYS);
        let recent_events = self
            .stored_events(&connection.user_id, &experiences)?
            .into_iter()
            .filter(|event| event.timestamp > cutoff && event.timestamp <= now)
            .collect();
        let current = CurrentMetrics::for_connection(connection, recent_events);
        let his = self.calculate_his(connection, &experiences, &current);
        debug!(connection = %connection.id, his, "calculated his");
        Ok(his)
    }

    pub fn generate_weekly_hope_report(
        &self,
        user_id: &str,
        connections: &[Connection],
        now: DateTime<Utc>,
    ) -> Result<WeeklyHopeReport> {
        let experiences = self.store.experiences_for_user(user_id)?;
        let events = self.stored_events(user_id, &experiences)?;
        let report = weekly::build_weekly_report(
            &WeeklyInputs {
                user_id,
                connections,
                experiences: &experiences,
                events: &events,
                now,
            },
            &self.weights,
            &self.settings,
        );
        info!(user = user_id, trend = %report.trend, "generated weekly hope report");
        Ok(report)
    }

    /// Stand-alone events followed by those recorded inside check-ins.
    fn stored_events(
        &self,
        user_id: &str,
        experiences: &[DailyHopeExperience],
    ) -> Result<Vec<HopeEvent>> {
        let mut events = self.store.events_for_user(user_id)?;
        events.extend(
            experiences
                .iter()
                .flat_map(|experience| experience.events.iter().cloned()),
        );
        Ok(events)
    }
}

fn check_event(event: &HopeEvent) -> Result<()> {
    if !INTENSITY_RANGE.contains(&event.intensity) {
        return Err(MatchmeterError::InvalidObservation(format!(
            "intensity must be between 1 and 10 (found {})",
            event.intensity
        )));
    }
    if !IMPACT_RANGE.contains(&event.his_impact) {
        return Err(MatchmeterError::InvalidObservation(format!(
            "his_impact must be between -10 and 10 (found {})",
            event.his_impact
        )));
    }
    Ok(())
}
