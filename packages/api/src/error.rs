//! Error types for talking to the users API.

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::ErrorBody;

/// Why a registration request did not create an account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// 409: the email already belongs to an account.
    #[error("email address already in use")]
    Conflict,
    /// Any other non-success status. `message` is the server's `error` field.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// No response was obtained (DNS, refused connection, timeout, offline).
    #[error("network error: {0}")]
    Network(String),
}

impl RegisterError {
    /// Map a non-success response onto the error taxonomy.
    ///
    /// The detail text comes from `{"error": "..."}` when the body has that shape,
    /// otherwise from the raw body, otherwise from the status reason phrase.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::CONFLICT {
            return Self::Conflict;
        }

        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        Self::Server {
            status: status.as_u16(),
            message,
        }
    }
}

/// Invalid API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_ignores_body() {
        let err = RegisterError::from_response(StatusCode::CONFLICT, r#"{"error":"dup"}"#);
        assert_eq!(err, RegisterError::Conflict);
    }

    #[test]
    fn test_server_error_uses_error_field() {
        let err = RegisterError::from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":"db down"}"#,
        );
        assert_eq!(
            err,
            RegisterError::Server {
                status: 500,
                message: "db down".to_string()
            }
        );
        assert!(err.to_string().contains("db down"));
    }

    #[test]
    fn test_server_error_falls_back_to_raw_body() {
        let err = RegisterError::from_response(StatusCode::BAD_GATEWAY, "upstream timed out\n");
        assert_eq!(
            err,
            RegisterError::Server {
                status: 502,
                message: "upstream timed out".to_string()
            }
        );
    }

    #[test]
    fn test_server_error_empty_body_uses_reason() {
        let err = RegisterError::from_response(StatusCode::BAD_REQUEST, "");
        assert_eq!(
            err,
            RegisterError::Server {
                status: 400,
                message: "Bad Request".to_string()
            }
        );
    }
}
