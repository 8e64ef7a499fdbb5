//! Error types for REST API operations
//!
//! A call either returns its typed payload or one of these errors. Server
//! rejections and network failures share the [`RestError::Api`] channel so
//! callers only have one failure shape to inspect; a success status with an
//! undecodable body is reported separately as [`RestError::Decode`].

use crate::transport::TransportError;
use coinspaid_auth::AuthError;
use coinspaid_types::ErrorMap;
use std::fmt;
use std::time::Duration;

/// Errors reported by the API or by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrors {
    status: Option<u16>,
    errors: ErrorMap,
}

impl ApiErrors {
    /// Errors from a response whose status did not match the endpoint
    pub fn from_response(status: u16, body: &str) -> Self {
        Self {
            status: Some(status),
            errors: ErrorMap::from_body(body),
        }
    }

    /// Errors from a request that never produced a response
    pub fn from_transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            errors: ErrorMap::message(message),
        }
    }

    /// Errors from a transport failure, keeping any status already received
    pub fn from_transport_error(error: &TransportError) -> Self {
        Self {
            status: error.status(),
            errors: ErrorMap::message(error.to_string()),
        }
    }

    /// HTTP status, absent when no response arrived
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Field to message map
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Take the error map
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "status {status}: {}", self.errors),
            None => write!(f, "no response: {}", self.errors),
        }
    }
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Unexpected status or transport failure
    #[error("API error ({0})")]
    Api(ApiErrors),

    /// Expected status but the body did not match the response schema
    #[error("Failed to decode {status} response: {source}")]
    Decode {
        /// HTTP status of the response
        status: u16,
        /// Raw response body
        body: String,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Deadline expired before the response arrived
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Credentials or payload could not be prepared
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RestError {
    /// True for server rejections and transport failures
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// True if the call's deadline expired
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// True if a success response did not match its schema
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// API error details, if this is an API error
    pub fn api_errors(&self) -> Option<&ApiErrors> {
        match self {
            Self::Api(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ApiErrors> for RestError {
    fn from(errors: ApiErrors) -> Self {
        Self::Api(errors)
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_from_response() {
        let errors = ApiErrors::from_response(422, r#"{"errors":{"currency":["invalid"]}}"#);
        assert_eq!(errors.status(), Some(422));
        assert_eq!(errors.get("currency"), Some("invalid"));
        assert_eq!(errors.to_string(), "status 422: currency: invalid");
    }

    #[test]
    fn test_api_errors_from_transport() {
        let errors = ApiErrors::from_transport("connection refused");
        assert_eq!(errors.status(), None);
        assert_eq!(errors.get("message"), Some("connection refused"));
        assert!(!errors.errors().is_empty());
    }

    #[test]
    fn test_api_errors_keep_status_of_unreadable_body() {
        let errors = ApiErrors::from_transport_error(&TransportError::Body {
            status: 502,
            message: "connection reset".into(),
        });
        assert_eq!(errors.status(), Some(502));
        assert!(errors.get("message").unwrap().contains("connection reset"));

        let errors =
            ApiErrors::from_transport_error(&TransportError::RequestFailed("dns".into()));
        assert_eq!(errors.status(), None);
    }

    #[test]
    fn test_error_classification() {
        let api = RestError::from(ApiErrors::from_transport("dns failure"));
        assert!(api.is_api());
        assert!(api.api_errors().is_some());
        assert!(!api.is_timeout());

        let timeout = RestError::Timeout(Duration::from_secs(5));
        assert!(timeout.is_timeout());
        assert!(timeout.api_errors().is_none());
    }

    #[test]
    fn test_auth_error_is_transparent() {
        let err = RestError::from(AuthError::EnvVarNotSet("COINSPAID_SECRET_KEY".into()));
        assert!(err.to_string().contains("COINSPAID_SECRET_KEY"));
    }
}
