use crate::error::MatchmeterError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchmeterConfig {
    pub his: Option<HisConfig>,
    pub report: Option<ReportConfig>,
    pub prompt: Option<PromptConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HisConfig {
    pub history_weight: Option<f64>,
    pub progress_weight: Option<f64>,
    pub event_scale: Option<f64>,
    pub decay: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub trend_threshold: Option<f64>,
    pub max_recent_events: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    pub max_chat_chars: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HisWeights {
    pub history_weight: f64,
    pub progress_weight: f64,
    pub event_scale: f64,
    pub decay: f64,
}

impl Default for HisWeights {
    fn default() -> Self {
        Self {
            history_weight: 0.6,
            progress_weight: 0.4,
            event_scale: 1.5,
            decay: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSettings {
    pub trend_threshold: f64,
    pub max_recent_events: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            trend_threshold: 5.0,
            max_recent_events: 10,
        }
    }
}

pub const DEFAULT_MAX_CHAT_CHARS: usize = 4000;

impl MatchmeterConfig {
    pub fn his_weights(&self) -> HisWeights {
        let defaults = HisWeights::default();
        match &self.his {
            Some(his) => HisWeights {
                history_weight: his.history_weight.unwrap_or(defaults.history_weight),
                progress_weight: his.progress_weight.unwrap_or(defaults.progress_weight),
                event_scale: his.event_scale.unwrap_or(defaults.event_scale),
                decay: his.decay.unwrap_or(defaults.decay),
            },
            None => defaults,
        }
    }

    pub fn report_settings(&self) -> ReportSettings {
        let defaults = ReportSettings::default();
        match &self.report {
            Some(report) => ReportSettings {
                trend_threshold: report.trend_threshold.unwrap_or(defaults.trend_threshold),
                max_recent_events: report
                    .max_recent_events
                    .unwrap_or(defaults.max_recent_events),
            },
            None => defaults,
        }
    }

    pub fn max_chat_chars(&self) -> usize {
        self.prompt
            .as_ref()
            .and_then(|prompt| prompt.max_chat_chars)
            .unwrap_or(DEFAULT_MAX_CHAT_CHARS)
    }

    pub fn validate(&self) -> Result<(), MatchmeterError> {
        let weights = self.his_weights();
        if !(0.0..=1.0).contains(&weights.history_weight)
            || !(0.0..=1.0).contains(&weights.progress_weight)
        {
            return Err(MatchmeterError::ConfigParse(
                "his weights must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum = weights.history_weight + weights.progress_weight;
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(MatchmeterError::ConfigParse(format!(
                "his.history_weight + his.progress_weight must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }
        if !(weights.event_scale.is_finite() && weights.event_scale > 0.0) {
            return Err(MatchmeterError::ConfigParse(
                "his.event_scale must be a finite number greater than 0".to_string(),
            ));
        }
        if !(weights.decay > 0.0 && weights.decay <= 1.0) {
            return Err(MatchmeterError::ConfigParse(
                "his.decay must be in (0.0, 1.0]".to_string(),
            ));
        }

        let report = self.report_settings();
        if !(report.trend_threshold.is_finite() && report.trend_threshold >= 0.0) {
            return Err(MatchmeterError::ConfigParse(
                "report.trend_threshold must be a finite, non-negative number".to_string(),
            ));
        }
        if report.max_recent_events == 0 {
            return Err(MatchmeterError::ConfigParse(
                "report.max_recent_events must be greater than 0".to_string(),
            ));
        }
        if self.max_chat_chars() == 0 {
            return Err(MatchmeterError::ConfigParse(
                "prompt.max_chat_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
