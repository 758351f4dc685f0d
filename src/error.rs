//! Error types for the Ponto API client.

use serde_json::Value;
use thiserror::Error;

use crate::models::Environment;

/// A specialized `Result` type for Ponto operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Ponto API operations.
///
/// Errors fall into four groups: input validation and mode misuse (raised
/// before any network call), authentication failures (the token exchange),
/// and transport failures (network errors or non-2xx responses).
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was obtained
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Optional error code from the API
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// The OAuth2 client-credentials token exchange failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid input provided to a function; no request was sent
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Operation invoked in the wrong environment; no request was sent
    #[error("operation `{operation}` is only available in {required} mode")]
    Mode {
        /// The operation that was attempted
        operation: String,
        /// The environment the operation requires
        required: Environment,
    },

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if this error was raised before any network call
    /// (validation or mode misuse).
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Mode { .. })
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, wrong mode, 4xx response).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Validation(_) | Error::Mode { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response body.
    ///
    /// Ponto reports failures JSON:API style: `{"errors": [{"code", "detail"}]}`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let first_error = body.get("errors").and_then(|e| e.get(0));

        let code = first_error
            .and_then(|e| e.get("code"))
            .and_then(|c| c.as_str())
            .map(String::from);

        let message = first_error
            .and_then(|e| e.get("detail"))
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            code,
            message,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors() {
        assert!(Error::Validation("bad".into()).is_usage_error());
        assert!(Error::Mode {
            operation: "accounts.list".into(),
            required: Environment::Production,
        }
        .is_usage_error());
        assert!(!Error::Authentication("failed".into()).is_usage_error());
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::Validation("bad".into()).is_client_error());
        assert!(Error::Authentication("failed".into()).is_auth_error());

        let server = Error::Api {
            status: 503,
            code: None,
            message: "down".into(),
            body: Value::Null,
        };
        assert!(server.is_server_error());
        assert!(!server.is_client_error());
    }

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({
            "errors": [{
                "code": "resourceNotFound",
                "detail": "The requested resource was not found."
            }]
        });

        let err = Error::from_api_response(404, body);
        match err {
            Error::Api {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, Some("resourceNotFound".to_string()));
                assert_eq!(message, "The requested resource was not found.");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_mode_error_display() {
        let err = Error::Mode {
            operation: "synchronizations.create".into(),
            required: Environment::Production,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("synchronizations.create"));
        assert!(rendered.contains("production"));
    }
}
