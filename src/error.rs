//! Error types for the One API client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope returned by the API, e.g. `{"success":false,"message":"Unauthorized."}`.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
#[serde(default)]
pub struct ApiError {
    #[serde(alias = "Success")]
    pub success: bool,

    #[serde(alias = "Message")]
    pub message: String,
}

/// Errors that can occur during client operations.
///
/// Every variant except [`Error::Config`] carries the endpoint path that
/// produced it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport Error {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API Error {endpoint}: {source}")]
    Api {
        endpoint: String,
        status: StatusCode,
        #[source]
        source: ApiError,
    },

    #[error("Deserialization Error {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// A lookup by id decoded zero documents.
    #[error("Not Found {endpoint}")]
    NotFound { endpoint: String },

    /// A quote lookup decoded zero documents.
    #[error("No Quotes Available {endpoint}")]
    NoQuotes { endpoint: String },

    #[error("Invalid URL {endpoint}: {source}")]
    InvalidUrl {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl Error {
    /// Short name of the failure category.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Transport { .. } => "Transport Error",
            Error::Api { .. } => "API Error",
            Error::Deserialization { .. } => "Deserialization Error",
            Error::NotFound { .. } => "Not Found",
            Error::NoQuotes { .. } => "No Quotes Available",
            Error::InvalidUrl { .. } => "Invalid URL",
            Error::Config(_) => "Configuration Error",
        }
    }

    /// The endpoint path that produced this error.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Error::Transport { endpoint, .. }
            | Error::Api { endpoint, .. }
            | Error::Deserialization { endpoint, .. }
            | Error::NotFound { endpoint }
            | Error::NoQuotes { endpoint }
            | Error::InvalidUrl { endpoint, .. } => Some(endpoint),
            Error::Config(_) => None,
        }
    }

    /// The decoded API error envelope, if the server returned one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { source, .. } => Some(source),
            _ => None,
        }
    }

    /// True for legitimate zero-match outcomes rather than failures.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::NoQuotes { .. })
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(message: &str) -> Error {
        Error::Api {
            endpoint: "/movie".to_string(),
            status: StatusCode::UNAUTHORIZED,
            source: ApiError {
                success: false,
                message: message.to_string(),
            },
        }
    }

    #[test]
    fn test_api_error_display() {
        let err = api("Unauthorized.");
        assert_eq!(err.to_string(), "API Error /movie: Unauthorized.");
        assert_eq!(err.kind(), "API Error");
        assert_eq!(err.endpoint(), Some("/movie"));
        assert_eq!(err.api_error().map(|e| e.message.as_str()), Some("Unauthorized."));
    }

    #[test]
    fn test_api_error_source_chain() {
        use std::error::Error as _;

        let err = api("boom");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("boom"));
    }

    #[test]
    fn test_empty_result_variants() {
        let not_found = Error::NotFound {
            endpoint: "/book/x".to_string(),
        };
        let no_quotes = Error::NoQuotes {
            endpoint: "/movie/x/quote".to_string(),
        };
        assert!(not_found.is_empty_result());
        assert!(no_quotes.is_empty_result());
        assert!(!api("boom").is_empty_result());
        assert_eq!(no_quotes.to_string(), "No Quotes Available /movie/x/quote");
        assert!(no_quotes.api_error().is_none());
    }

    #[test]
    fn test_config_error_has_no_endpoint() {
        let err = Error::Config("base_url cannot be empty".to_string());
        assert_eq!(err.endpoint(), None);
        assert_eq!(err.kind(), "Configuration Error");
    }

    #[test]
    fn test_api_error_decodes_with_defaults() {
        let err: ApiError = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert!(!err.success);
        assert_eq!(err.message, "boom");

        let err: ApiError = serde_json::from_str(r#"{"Success":true,"Message":"x"}"#).unwrap();
        assert!(err.success);
        assert_eq!(err.message, "x");

        let err: ApiError = serde_json::from_str(r#"{"docs":[]}"#).unwrap();
        assert_eq!(err, ApiError::default());
    }
}
