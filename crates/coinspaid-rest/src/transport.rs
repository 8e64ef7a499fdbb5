//! HTTP transport abstraction
//!
//! This module provides a trait-based abstraction over HTTP calls, enabling
//! unit testing of the request pipeline without real network calls.
//!
//! A transport only moves bytes: it knows nothing about JSON or signing and
//! returns the raw body for every status code.
//!
//! # Example
//!
//! ```no_run
//! use coinspaid_rest::transport::{HttpTransport, Transport, TransportError};
//!
//! async fn example() -> Result<(), TransportError> {
//!     let transport = HttpTransport::new(None)?;
//!     let response = transport.get("https://app.coinspaid.com/api/v2/ping").await?;
//!     println!("{} {}", response.status, response.body);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default user agent for outgoing requests
pub const DEFAULT_USER_AGENT: &str = concat!("coinspaid-rest/", env!("CARGO_PKG_VERSION"));

/// Transport layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// HTTP client could not be built
    #[error("client setup failed: {0}")]
    Setup(String),

    /// Request could not be sent (DNS, connect, TLS, timeout)
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Status arrived but the body could not be read
    #[error("failed to read {status} response body: {message}")]
    Body {
        /// HTTP status already received
        status: u16,
        /// Read error
        message: String,
    },
}

impl TransportError {
    /// HTTP status, if one was received before the failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Body { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Raw HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Create a new response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for HTTP transport abstraction
///
/// Implementations must be safe to call from many tasks at once.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a GET request
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// Send a POST request with a JSON body and extra headers
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &[(&'static str, String)],
    ) -> Result<HttpResponse, TransportError>;
}

/// Real HTTP transport using reqwest
///
/// The underlying `reqwest::Client` pools connections internally and is
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(user_agent: Option<&str>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body {
                status,
                message: e.to_string(),
            })?;
        debug!(status, len = body.len(), "Received response");
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        Self::read(response).await
    }

    #[instrument(skip(self, body, headers), fields(len = body.len()))]
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &[(&'static str, String)],
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);

        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        Self::read(response).await
    }
}

/// HTTP method seen by [`MockTransport`]
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
}

/// Request captured by [`MockTransport`]
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: Method,
    /// Full URL
    pub url: String,
    /// Extra headers passed by the caller
    pub headers: Vec<(String, String)>,
    /// Body (POST only)
    pub body: Option<String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordedRequest {
    /// Look up a captured header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Mock transport for testing
///
/// Returns scripted responses in order and records every request.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<HttpResponse, TransportError>>>,
    requests: parking_lot::Mutex<Vec<RecordedRequest>>,
    delay: Option<std::time::Duration>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response, to exercise deadlines
    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Add a response to be returned by the next call
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Simulate a transport failure on the next call
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    async fn respond(&self, request: RecordedRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(TransportError::RequestFailed(
                "no scripted response".to_string(),
            ))
        })
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.respond(RecordedRequest {
            method: Method::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        })
        .await
    }

    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &[(&'static str, String)],
    ) -> Result<HttpResponse, TransportError> {
        self.respond(RecordedRequest {
            method: Method::Post,
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: Some(body),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_returns_scripted_responses() {
        let transport = MockTransport::new();
        transport.push_response(200, "pong");
        transport.push_response(201, r#"{"data":{}}"#);

        let first = transport.get("https://mock.test/ping").await.unwrap();
        assert_eq!(first, HttpResponse::new(200, "pong"));

        let second = transport
            .post(
                "https://mock.test/addresses/take",
                "[]".to_string(),
                &[("X-Processing-Key", "PUBLIC".to_string())],
            )
            .await
            .unwrap();
        assert_eq!(second.status, 201);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[1].body.as_deref(), Some("[]"));
        assert_eq!(requests[1].header("x-processing-key"), Some("PUBLIC"));
    }

    #[tokio::test]
    async fn test_mock_transport_failure() {
        let transport = MockTransport::new();
        transport.push_error(TransportError::RequestFailed("connection refused".into()));

        let result = transport.get("https://mock.test/ping").await;
        assert!(matches!(result, Err(TransportError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn test_mock_transport_exhausted() {
        let transport = MockTransport::new();
        assert!(transport.get("https://mock.test/ping").await.is_err());
    }

    #[test]
    fn test_transport_error_status() {
        let body = TransportError::Body {
            status: 201,
            message: "connection reset".into(),
        };
        assert_eq!(body.status(), Some(201));
        assert!(body.to_string().contains("201"));
        assert_eq!(TransportError::RequestFailed("dns".into()).status(), None);
    }

    #[test]
    fn test_http_transport_builds() {
        assert!(HttpTransport::new(Some("test-agent")).is_ok());
    }

    #[test]
    fn test_default_user_agent() {
        assert!(DEFAULT_USER_AGENT.starts_with("coinspaid-rest/"));
    }
}
