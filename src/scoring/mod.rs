pub mod communication;
pub mod compatibility;
pub mod emotional;
pub mod stage;

use crate::types::connection::Connection;
use crate::types::report::{ScoreEntry, ScoreReport};
use serde::Serialize;

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub stage: u32,
    pub communication: u32,
    pub compatibility: u32,
    pub emotional: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    pub fn new(stage: u32, communication: u32, compatibility: u32, emotional: u32) -> Self {
        let total = stage
            .saturating_add(communication)
            .saturating_add(compatibility)
            .saturating_add(emotional)
            .min(MAX_SCORE);
        Self {
            stage,
            communication,
            compatibility,
            emotional,
            total,
        }
    }
}

pub fn score_breakdown(connection: &Connection) -> ScoreBreakdown {
    ScoreBreakdown::new(
        connection.current_stage.points(),
        communication::communication_score(&connection.communication),
        compatibility::compatibility_score(connection),
        emotional::emotional_score(connection),
    )
}

pub fn relationship_score(connection: &Connection) -> u32 {
    score_breakdown(connection).total
}

/// Mean of the relationship scores, rounded half away from zero; 0 when empty.
pub fn average_score(connections: &[Connection]) -> u32 {
    if connections.is_empty() {
        return 0;
    }
    let sum: u64 = connections
        .iter()
        .map(|connection| u64::from(relationship_score(connection)))
        .sum();
    (sum as f64 / connections.len() as f64).round() as u32
}

pub fn score_report(connections: &[Connection]) -> ScoreReport {
    let mut report = ScoreReport {
        entries: connections
            .iter()
            .map(|connection| ScoreEntry {
                connection_id: connection.id.clone(),
                nickname: connection.nickname.clone(),
                stage: connection.current_stage,
                breakdown: score_breakdown(connection),
            })
            .collect(),
        average_score: average_score(connections),
    };
    report.sort_entries();
    report
}
