use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::api_error::ApiError;

/// Status vocabulary shared by chargebacks and delinquencies.
pub const CDMS_STATUS_OPTIONS: &[&str] = &[
    "Open",
    "Hold Pending External Action",
    "Hold Pending Internal Action",
    "In Research",
    "Passed to PFS",
    "Completed by PFS",
    "PFS Return to GSA",
    "New",
];

/// One entry of a record's status history, in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub status_history_id: i64,
    pub status: String,
    pub status_date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_first_name: Option<String>,
    #[serde(default)]
    pub user_last_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

impl StatusHistoryEntry {
    /// `First Last (email)`, omitting whatever the server left out.
    pub fn user_display(&self) -> String {
        let name = [&self.user_first_name, &self.user_last_name]
            .iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        match (name.is_empty(), self.user_email.as_deref()) {
            (false, Some(email)) if !email.is_empty() => format!("{} ({})", name, email),
            (false, _) => name,
            (true, Some(email)) if !email.is_empty() => email.to_string(),
            _ => "Unknown user".to_string(),
        }
    }
}

/// Decodes a history response. The server answers `null` for a record
/// without any status changes; that is an empty history.
pub fn history_from_body(body: Value) -> Result<Vec<StatusHistoryEntry>, ApiError> {
    serde_json::from_value::<Option<Vec<StatusHistoryEntry>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_entries_with_missing_user() {
        let entries: Vec<StatusHistoryEntry> = serde_json::from_value(json!([
            {
                "status_history_id": 2,
                "status": "In Research",
                "status_date": "2024-03-05T14:07:09Z",
                "notes": "called vendor",
                "user_id": 9,
                "user_first_name": "Ada",
                "user_last_name": "Lovelace",
                "user_email": "ada@example.gov"
            },
            {
                "status_history_id": 1,
                "status": "Open",
                "status_date": "2024-03-01T08:00:00Z"
            }
        ]))
        .unwrap();

        assert_eq!(entries[0].user_display(), "Ada Lovelace (ada@example.gov)");
        assert_eq!(entries[1].user_display(), "Unknown user");
        assert_eq!(entries[1].notes, None);
    }

    #[test]
    fn null_or_empty_body_is_empty_history() {
        assert_eq!(history_from_body(Value::Null).unwrap(), Vec::new());
        assert_eq!(history_from_body(json!([])).unwrap(), Vec::new());
    }

    #[test]
    fn history_keeps_server_order() {
        let entries = history_from_body(json!([
            {"status_history_id": 7, "status": "Passed to PFS", "status_date": "2024-04-02T10:00:00Z"},
            {"status_history_id": 3, "status": "Open", "status_date": "2024-03-01T08:00:00Z"}
        ]))
        .unwrap();
        let ids: Vec<i64> = entries.iter().map(|e| e.status_history_id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn non_list_body_is_malformed() {
        assert!(matches!(
            history_from_body(json!({"message": "boom"})),
            Err(ApiError::Malformed(_))
        ));
    }
}
