use crate::types::connection::CommunicationInfo;

pub fn frequency_points(frequency: &str) -> u32 {
    match frequency.trim() {
        "毎日" | "daily" => 15,
        "2-3日に1回" | "every-few-days" => 10,
        "週1回" | "weekly" => 5,
        _ => 0,
    }
}

pub fn response_time_points(response_time: &str) -> u32 {
    match response_time.trim() {
        "即レス" | "immediate" => 10,
        "数時間以内" | "within-hours" => 8,
        "1日以内" | "within-day" => 5,
        "数日以内" | "within-days" => 2,
        _ => 0,
    }
}

pub fn communication_score(communication: &CommunicationInfo) -> u32 {
    let frequency = communication
        .frequency
        .as_deref()
        .map_or(0, frequency_points);
    let response = communication
        .response_time
        .as_deref()
        .map_or(0, response_time_points);
    frequency + response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(frequency: Option<&str>, response_time: Option<&str>) -> CommunicationInfo {
        CommunicationInfo {
            frequency: frequency.map(str::to_string),
            response_time: response_time.map(str::to_string),
            ..CommunicationInfo::default()
        }
    }

    #[test]
    fn best_case_reaches_twenty_five() {
        assert_eq!(communication_score(&info(Some("毎日"), Some("即レス"))), 25);
    }

    #[test]
    fn absent_and_unknown_labels_contribute_nothing() {
        assert_eq!(communication_score(&info(None, None)), 0);
        assert_eq!(communication_score(&info(Some("月1回"), Some("既読無視"))), 0);
        assert_eq!(communication_score(&info(Some("週1回"), None)), 5);
        assert_eq!(communication_score(&info(None, Some("数日以内"))), 2);
    }
}
