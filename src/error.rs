//! Error types for the Jamendo client.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, JamendoError>;

/// Everything that can go wrong while talking to Jamendo.
///
/// The two families that matter to callers are network failures, which the
/// client may retry, and API failures, which carry the code and message the
/// API reported in its response headers.
#[derive(Error, Debug)]
pub enum JamendoError {
    /// Transport failure: connection refused, timeout, TLS, body read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with `status: failed` in its response headers.
    #[error("Jamendo API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Non-success HTTP status without a Jamendo envelope to explain it.
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("You must provide a client_id setting")]
    MissingClientId,

    #[error("A client_secret is required for OAuth token exchange")]
    MissingClientSecret,

    #[error("An access token is required for this request")]
    MissingAccessToken,

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JamendoError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True for failures below the API: the request never got a usable answer.
    pub fn is_network(&self) -> bool {
        matches!(self, JamendoError::Network(_))
    }

    /// True when the API itself rejected the request.
    pub fn is_api(&self) -> bool {
        matches!(self, JamendoError::Api { .. } | JamendoError::Http { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_families() {
        let api = JamendoError::Api {
            code: 5,
            message: "Invalid client_id".to_string(),
        };
        assert!(api.is_api());
        assert!(!api.is_network());
        assert_eq!(
            api.to_string(),
            "Jamendo API error (code 5): Invalid client_id"
        );

        let http = JamendoError::Http {
            status: 500,
            body: "oops".to_string(),
        };
        assert!(http.is_api());

        assert!(!JamendoError::MissingClientId.is_api());
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = JamendoError::invalid_parameter("datebetween", "start after end");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `datebetween`: start after end"
        );
    }
}
