use crate::types::connection::Connection;

const POINTS_PER_ATTRACTION: i64 = 3;
const MAX_ATTRACTION: i64 = 15;
const PENALTY_PER_CONCERN: i64 = 2;

pub fn expectation_bonus(expectations: &str) -> u32 {
    match expectations.trim() {
        "真剣な交際" | "serious" => 10,
        "楽しい関係" | "casual" => 5,
        _ => 0,
    }
}

/// Attraction plus expectation bonus minus concerns; the combined value is
/// floored at zero before it joins the other sub-scores.
pub fn emotional_score(connection: &Connection) -> u32 {
    let attraction = i64::try_from(connection.attractive_point_count())
        .unwrap_or(i64::MAX)
        .saturating_mul(POINTS_PER_ATTRACTION)
        .min(MAX_ATTRACTION);
    let bonus = connection
        .user_feelings
        .expectations
        .as_deref()
        .map_or(0, expectation_bonus);
    let penalty = i64::try_from(connection.concern_count())
        .unwrap_or(i64::MAX)
        .saturating_mul(PENALTY_PER_CONCERN);

    let raw = attraction + i64::from(bonus) - penalty;
    u32::try_from(raw.max(0)).unwrap_or(0)
}
