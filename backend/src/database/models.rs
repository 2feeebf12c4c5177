//! Rust structs that represent stored document shapes.
//!
//! These models define how records are laid out in the document store. Field
//! names are camelCase to match documents written by earlier versions of the
//! service.

use serde::{Deserialize, Serialize};

/// One attendance entry. Created once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub name: String,
    pub uid: String,
    pub timestamp: String,
    /// Added to the form after the first revisions; empty on older records.
    #[serde(default)]
    pub course_id: String,
    /// Role the record was submitted under; empty on older records.
    #[serde(default)]
    pub role: String,
    /// Verified user the record is attributed to; absent for anonymous writes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_server_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    pub professor_id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Team {
    Tabs,
    Spaces,
}

impl Team {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "TABS" => Some(Team::Tabs),
            "SPACES" => Some(Team::Spaces),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::Tabs => "TABS",
            Team::Spaces => "SPACES",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub team: Team,
    pub time_cast: String,
}

/// A model together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stored<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn anonymous_record_omits_auth_server_id() {
        let record = AttendanceRecord {
            name: "Grace".into(),
            uid: "g1".into(),
            timestamp: "2024-03-01T09:00:00.000Z".into(),
            course_id: "cs101".into(),
            role: "Student".into(),
            auth_server_id: None,
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "Grace",
                "uid": "g1",
                "timestamp": "2024-03-01T09:00:00.000Z",
                "courseId": "cs101",
                "role": "Student"
            })
        );
    }

    #[test]
    fn legacy_record_without_role_decodes() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "name": "Alan",
            "uid": "a1",
            "timestamp": "2023-09-01T09:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(record.role, "");
        assert_eq!(record.course_id, "");
        assert_eq!(record.auth_server_id, None);
    }

    #[test]
    fn team_names_are_exact() {
        assert_eq!(Team::parse("TABS"), Some(Team::Tabs));
        assert_eq!(Team::parse("SPACES"), Some(Team::Spaces));
        assert_eq!(Team::parse("tabs"), None);
        assert_eq!(serde_json::to_value(Team::Spaces).unwrap(), json!("SPACES"));
    }

    #[test]
    fn stored_flattens_the_record() {
        let stored = Stored {
            id: "v1".to_string(),
            record: Vote {
                team: Team::Tabs,
                time_cast: "2024-03-01T09:00:00.000Z".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&stored).unwrap(),
            json!({ "id": "v1", "team": "TABS", "time_cast": "2024-03-01T09:00:00.000Z" })
        );
    }
}
