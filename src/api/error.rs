//! Failures talking to the remote source and their user-facing wording.

use thiserror::Error;

/// Errors that can occur during remote calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client initialisation failed: {0}")]
    Client(#[source] reqwest::Error),

    /// Failed to reach the remote source
    #[error("Connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Remote source answered with a non-2xx status
    #[error("Remote error: {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The call needs a session token and the store has none.
    #[error("Not signed in")]
    NotSignedIn,
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: Some(message.into()),
        }
    }

    /// True when the remote source rejected the credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Normalised message stored in a slice's `error` field.
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(_) | Self::Connection(_) => {
                "Network error, check your connection".to_string()
            }
            Self::Timeout { duration } => format!("Request timed out after {}s", duration),
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status { status, .. } => match *status {
                401 => "Invalid credentials or expired session".to_string(),
                403 => "You don't have access to this resource".to_string(),
                404 => "Not found".to_string(),
                500..=599 => format!("Server error ({})", status),
                other => format!("Request failed ({})", other),
            },
            Self::Decode(_) => "Unexpected response from server".to_string(),
            Self::NotSignedIn => "You need to sign in first".to_string(),
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Accepts `{"message": "..."}`, `{"error": "..."}` and
/// `{"error": {"message": "..."}}`.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let field = value.get("message").or_else(|| value.get("error"))?;
    let message = match field {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Object(map) => map.get("message")?.as_str()?.to_string(),
        _ => return None,
    };
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_string())
}
