//! Error taxonomy for calls against the CDMS REST API.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call.
///
/// None of these are fatal: call sites log them and fall back to an empty
/// list or a notification, leaving the view usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected, CORS, offline).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a 4xx/5xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The body could not be read as the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build an HTTP error from the status and raw response body.
    ///
    /// The API answers errors with `{ "message": ... }`; anything else falls
    /// back to a generic status message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_server_message_when_present() {
        let err = ApiError::from_status(400, r#"{"message":"Invalid ID format"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "Invalid ID format".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid ID format");
    }

    #[test]
    fn falls_back_to_status_text() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "HTTP error! status: 502");

        let err = ApiError::from_status(500, r#"{"message":"  "}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn not_found_is_detected() {
        assert!(ApiError::from_status(404, "").is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }
}
