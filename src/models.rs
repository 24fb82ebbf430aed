//! Backend data model
//!
//! Wire types for the bot control API: the snapshots the dashboard renders
//! and the request/response bodies of the action endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Login state of a bot account as reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[strum(to_string = "logged_in")]
    LoggedIn,
    #[strum(to_string = "pending")]
    Pending,
    #[strum(to_string = "error")]
    Error,
    /// Any status string this client does not know. Rendered like `Error`.
    #[default]
    #[serde(other)]
    #[strum(to_string = "unknown")]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    /// The backend stores "no proxy" as an empty string.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub proxy: Option<String>,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default)]
    pub session_saved: bool,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|proxy| !proxy.trim().is_empty()))
}

/// A target URL. Accepts both a bare JSON string and `{"url": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UrlEntryRepr")]
pub struct UrlEntry {
    pub url: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UrlEntryRepr {
    Bare(String),
    Object { url: String },
}

impl From<UrlEntryRepr> for UrlEntry {
    fn from(repr: UrlEntryRepr) -> Self {
        match repr {
            UrlEntryRepr::Bare(url) | UrlEntryRepr::Object { url } => UrlEntry { url },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub is_running: bool,
    pub accounts_count: u64,
    pub logged_in_accounts: u64,
    pub urls_count: u64,
    pub likes_sent: u64,
}

/// Body returned by every mutation endpoint.
///
/// Failure bodies usually only carry `error` (with a 4xx/5xx status), so a
/// missing `success` flag counts as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success { message: String },
    Failure { error: String },
}

impl ActionResponse {
    #[cfg(test)]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    #[cfg(test)]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    pub fn outcome(self) -> ActionOutcome {
        if self.success {
            ActionOutcome::Success {
                message: self.message.unwrap_or_default(),
            }
        } else {
            let error = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "Request failed".to_string());
            ActionOutcome::Failure { error }
        }
    }
}

// Request bodies

#[derive(Debug, Serialize)]
pub(crate) struct NewAccountBody<'a> {
    pub email: &'a str,
    pub proxy: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AccountKeyBody<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddUrlsBody<'a> {
    pub urls: &'a [String],
}

#[derive(Debug, Serialize)]
pub(crate) struct UrlKeyBody<'a> {
    pub url: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_blank_proxy_is_absent() {
        let account: Account = serde_json::from_value(json!({
            "email": "a@example.com",
            "proxy": "  ",
            "status": "pending",
            "session_saved": false
        }))
        .unwrap();
        assert_eq!(account.proxy, None);
        assert_eq!(account.status, AccountStatus::Pending);
    }

    #[test]
    fn account_keeps_proxy_and_defaults_missing_fields() {
        let account: Account = serde_json::from_value(json!({
            "email": "b@example.com",
            "proxy": "http://10.0.0.1:8080",
            "status": "logged_in"
        }))
        .unwrap();
        assert_eq!(account.proxy.as_deref(), Some("http://10.0.0.1:8080"));
        assert_eq!(account.status, AccountStatus::LoggedIn);
        assert!(!account.session_saved);
    }

    #[test]
    fn unknown_account_status_is_tolerated() {
        let account: Account =
            serde_json::from_value(json!({"email": "c@example.com", "status": "banned"})).unwrap();
        assert_eq!(account.status, AccountStatus::Unknown);
    }

    #[test]
    fn url_entries_accept_strings_and_objects() {
        let urls: Vec<UrlEntry> = serde_json::from_value(json!([
            "https://www.depop.com/products/one",
            {"url": "https://www.depop.com/products/two"}
        ]))
        .unwrap();
        assert_eq!(urls[0].url, "https://www.depop.com/products/one");
        assert_eq!(urls[1].url, "https://www.depop.com/products/two");
    }

    #[test]
    fn error_only_body_is_a_failure() {
        let response: ActionResponse =
            serde_json::from_value(json!({"error": "Account x already exists"})).unwrap();
        assert_eq!(
            response.outcome(),
            ActionOutcome::Failure {
                error: "Account x already exists".to_string()
            }
        );
    }

    #[test]
    fn success_body_carries_message() {
        let response: ActionResponse =
            serde_json::from_value(json!({"success": true, "message": "Bot started"})).unwrap();
        assert_eq!(
            response.outcome(),
            ActionOutcome::Success {
                message: "Bot started".to_string()
            }
        );
    }

    #[test]
    fn failure_without_error_text_has_fallback() {
        let response: ActionResponse = serde_json::from_value(json!({"success": false})).unwrap();
        assert_eq!(
            response.outcome(),
            ActionOutcome::Failure {
                error: "Request failed".to_string()
            }
        );
    }
}
