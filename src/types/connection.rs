use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship progress stage, stored under the app's Japanese labels.
///
/// Deserialization goes through [`Stage::from_label`], so snapshots may use
/// either the label or its English alias in any ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stage {
    Stalled,
    Matched,
    Messaging,
    ContactExchanged,
    DatePlanning,
    FirstDate,
    Dating,
    Exclusive,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::Stalled,
        Stage::Matched,
        Stage::Messaging,
        Stage::ContactExchanged,
        Stage::DatePlanning,
        Stage::FirstDate,
        Stage::Dating,
        Stage::Exclusive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Stalled => "停滞中",
            Stage::Matched => "マッチング直後",
            Stage::Messaging => "メッセージ中",
            Stage::ContactExchanged => "LINE交換済み",
            Stage::DatePlanning => "デート調整中",
            Stage::FirstDate => "デート1回目",
            Stage::Dating => "デート2回目以降",
            Stage::Exclusive => "交際中",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            Stage::Stalled => "stalled",
            Stage::Matched => "matched",
            Stage::Messaging => "messaging",
            Stage::ContactExchanged => "contact-exchanged",
            Stage::DatePlanning => "date-planning",
            Stage::FirstDate => "first-date",
            Stage::Dating => "dating",
            Stage::Exclusive => "exclusive",
        }
    }

    /// Accepts either the stored label or its English alias.
    pub fn from_label(label: &str) -> Option<Stage> {
        let label = label.trim();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.label() == label || stage.alias().eq_ignore_ascii_case(label))
    }
}

impl TryFrom<String> for Stage {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Stage::from_label(&label).ok_or_else(|| format!("unknown stage: {label}"))
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.label().to_string()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFeelings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expectations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concerns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attractive_points: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub user_id: String,
    pub nickname: String,
    pub platform: String,
    pub current_stage: Stage,
    #[serde(default)]
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub communication: CommunicationInfo,
    #[serde(default)]
    pub user_feelings: UserFeelings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Connection {
    pub fn hobby_count(&self) -> usize {
        self.basic_info.hobbies.as_ref().map_or(0, Vec::len)
    }

    pub fn attractive_point_count(&self) -> usize {
        self.user_feelings
            .attractive_points
            .as_ref()
            .map_or(0, Vec::len)
    }

    pub fn concern_count(&self) -> usize {
        self.user_feelings.concerns.as_ref().map_or(0, Vec::len)
    }
}

/// Raw, untrusted form data for a connection before it is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_parses_labels_and_aliases() {
        assert_eq!(Stage::from_label("交際中"), Some(Stage::Exclusive));
        assert_eq!(Stage::from_label("Matched"), Some(Stage::Matched));
        assert_eq!(Stage::from_label("engaged"), None);
    }

    #[test]
    fn connection_deserializes_camel_case_nested_fields() {
        let connection: Connection = serde_json::from_str(
            r#"{
  "id": "c1",
  "user_id": "u1",
  "nickname": "Aki",
  "platform": "Pairs",
  "current_stage": "デート1回目",
  "communication": { "frequency": "毎日", "responseTime": "即レス" },
  "user_feelings": { "attractivePoints": ["kind"], "concerns": [] },
  "created_at": "2026-01-01T00:00:00Z",
  "updated_at": "2026-01-02T00:00:00Z"
}"#,
        )
        .expect("connection should parse");

        assert_eq!(connection.current_stage, Stage::FirstDate);
        assert_eq!(connection.communication.response_time.as_deref(), Some("即レス"));
        assert_eq!(connection.attractive_point_count(), 1);
        assert_eq!(connection.hobby_count(), 0);
    }

    #[test]
    fn connection_rejects_unknown_stage() {
        let parsed = serde_json::from_str::<Connection>(
            r#"{"id":"c1","user_id":"u1","nickname":"A","platform":"P",
"current_stage":"engaged","created_at":"2026-01-01T00:00:00Z",
"updated_at":"2026-01-01T00:00:00Z"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn connection_accepts_alias_in_any_case() {
        for label in ["Exclusive", "exclusive", " EXCLUSIVE ", "交際中"] {
            let body = format!(
                r#"{{"id":"c1","user_id":"u1","nickname":"A","platform":"P",
"current_stage":"{label}","created_at":"2026-01-01T00:00:00Z",
"updated_at":"2026-01-01T00:00:00Z"}}"#
            );
            let connection: Connection =
                serde_json::from_str(&body).expect("connection should parse");
            assert_eq!(connection.current_stage, Stage::Exclusive);
        }
    }

    #[test]
    fn stage_serializes_as_label() {
        let json = serde_json::to_string(&Stage::ContactExchanged).expect("stage should serialize");
        assert_eq!(json, r#""LINE交換済み""#);
        let err = serde_json::from_str::<Stage>(r#""engaged""#).expect_err("stage should fail");
        assert!(err.to_string().contains("unknown stage: engaged"));
    }
}
