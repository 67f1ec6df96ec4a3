use crate::types::connection::Connection;

const POINTS_PER_HOBBY: u32 = 2;
const MAX_COMPATIBILITY: u32 = 10;

pub fn compatibility_score(connection: &Connection) -> u32 {
    let hobbies = u32::try_from(connection.hobby_count()).unwrap_or(u32::MAX);
    hobbies.saturating_mul(POINTS_PER_HOBBY).min(MAX_COMPATIBILITY)
}
