//! Signed request execution
//!
//! Every private call goes through [`Executor::execute`]:
//!
//! 1. Render the parameters as the canonical payload (`[]` when empty)
//! 2. Sign it with HMAC-SHA512 and attach the key and signature headers
//! 3. POST the same payload as the body
//! 4. Decode the body as the success type if the status matches the
//!    endpoint, or as an error map otherwise

use crate::error::{ApiErrors, RestError, RestResult};
use crate::transport::{HttpResponse, Transport, TransportError};
use coinspaid_auth::{Credentials, RequestSigner};
use coinspaid_types::{DataEnvelope, Endpoint, Request};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Signs, sends and decodes requests against one base URL
///
/// Cheap to clone; clones share the transport. Each call builds its own
/// payload and signature, so concurrent calls never share mutable state.
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
}

impl Executor {
    /// Create an executor
    ///
    /// `timeout` is the default deadline for every call; `None` waits
    /// indefinitely.
    pub fn new(
        transport: Arc<dyn Transport>,
        credentials: Credentials,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            credentials,
            base_url,
            timeout,
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public key used to identify requests
    pub fn public_key(&self) -> &str {
        self.credentials.public_key()
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path)
    }

    /// Deadline applied to calls that do not pass their own
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Copy of this executor with a different default deadline
    ///
    /// Shares the transport, so it is cheap to build for a single call.
    pub fn with_timeout(&self, timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            ..self.clone()
        }
    }

    /// Run a transport call under `limit`
    async fn with_deadline<F>(
        limit: Option<Duration>,
        call: F,
    ) -> RestResult<Result<HttpResponse, TransportError>>
    where
        F: Future<Output = Result<HttpResponse, TransportError>>,
    {
        match limit {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| RestError::Timeout(limit)),
            None => Ok(call.await),
        }
    }

    /// Sign and POST a request, decoding the `data` payload on success
    ///
    /// Uses the executor's deadline. Dropping the returned future cancels
    /// the call.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> RestResult<T> {
        self.execute_with_timeout(request, self.timeout).await
    }

    /// Like [`execute`](Self::execute), bounded by `timeout` instead of the
    /// executor's deadline
    ///
    /// `None` waits indefinitely. Expiry is [`RestError::Timeout`].
    #[instrument(skip(self, request), fields(path = request.endpoint.path))]
    pub async fn execute_with_timeout<T: DeserializeOwned>(
        &self,
        request: Request,
        timeout: Option<Duration>,
    ) -> RestResult<T> {
        let signer = RequestSigner::new(&self.credentials);
        let payload = signer.sign(&request.params)?;
        let headers = signer.auth_headers(&payload);
        let url = self.url(&request.endpoint);

        debug!(params = request.params.len(), "Sending signed request");

        let outcome =
            Self::with_deadline(timeout, self.transport.post(&url, payload.body, &headers))
                .await?;

        interpret(&request.endpoint, outcome)
    }

    /// GET `/ping`; true if the service answered 200
    #[instrument(skip(self))]
    pub async fn ping(&self) -> bool {
        let endpoint = Endpoint::PING;
        match Self::with_deadline(self.timeout, self.transport.get(&self.url(&endpoint))).await {
            Ok(Ok(response)) => {
                debug!(status = response.status, "Ping answered");
                endpoint.is_expected(response.status)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Ping failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ping timed out");
                false
            }
        }
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Turn a transport outcome into the endpoint's payload or an error
///
/// Transport failures go down the same path as an unexpected status, with
/// the error text as the message and any status already received.
pub(crate) fn interpret<T: DeserializeOwned>(
    endpoint: &Endpoint,
    outcome: Result<HttpResponse, TransportError>,
) -> RestResult<T> {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            warn!(path = endpoint.path, error = %e, "Transport failure");
            return Err(ApiErrors::from_transport_error(&e).into());
        }
    };

    if !endpoint.is_expected(response.status) {
        warn!(
            path = endpoint.path,
            status = response.status,
            expected = endpoint.expected_status,
            "Unexpected status"
        );
        return Err(ApiErrors::from_response(response.status, &response.body).into());
    }

    match serde_json::from_str::<DataEnvelope<T>>(&response.body) {
        Ok(envelope) => Ok(envelope.into_data()),
        Err(source) => Err(RestError::Decode {
            status: response.status,
            body: response.body,
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Method, MockTransport};
    use coinspaid_auth::{KEY_HEADER, SIGNATURE_HEADER};
    use coinspaid_types::{Account, Params};

    const BASE: &str = "https://mock.test/api/v2";

    fn executor(transport: Arc<MockTransport>) -> Executor {
        let creds = Credentials::new("PUBLIC", "SECRET").unwrap();
        Executor::new(transport, creds, BASE, None)
    }

    #[test]
    fn test_interpret_success() {
        let outcome = Ok(HttpResponse::new(
            200,
            r#"{"data":[{"currency":"BTC","type":"crypto","balance":"0.5"}]}"#,
        ));
        let accounts: Vec<Account> = interpret(&Endpoint::ACCOUNTS_LIST, outcome).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].currency, "BTC");
    }

    #[test]
    fn test_interpret_status_mismatch_with_field_errors() {
        let outcome = Ok(HttpResponse::new(
            422,
            r#"{"errors":{"currency":["invalid"]}}"#,
        ));
        let err = interpret::<Vec<Account>>(&Endpoint::ACCOUNTS_LIST, outcome).unwrap_err();
        let api = err.api_errors().unwrap();
        assert_eq!(api.status(), Some(422));
        assert!(api.errors().contains("currency"));
    }

    #[test]
    fn test_interpret_status_mismatch_with_html() {
        let outcome = Ok(HttpResponse::new(502, "<html>502</html>"));
        let err = interpret::<Vec<Account>>(&Endpoint::ACCOUNTS_LIST, outcome).unwrap_err();
        let api = err.api_errors().unwrap();
        assert_eq!(api.errors().len(), 1);
        assert_eq!(api.get("message"), Some("<html>502</html>"));
    }

    #[test]
    fn test_interpret_success_status_is_endpoint_specific() {
        // 200 is not success for a creation endpoint
        let outcome = Ok(HttpResponse::new(200, r#"{"data":{}}"#));
        let err = interpret::<serde_json::Value>(&Endpoint::ADDRESSES_TAKE, outcome).unwrap_err();
        assert!(err.is_api());
    }

    #[test]
    fn test_interpret_decode_failure_is_distinct() {
        let outcome = Ok(HttpResponse::new(200, r#"{"data":{"unexpected":true}}"#));
        let err = interpret::<Vec<Account>>(&Endpoint::ACCOUNTS_LIST, outcome).unwrap_err();
        assert!(err.is_decode());
        assert!(!err.is_api());
        if let RestError::Decode { status, body, .. } = err {
            assert_eq!(status, 200);
            assert!(body.contains("unexpected"));
        }
    }

    #[test]
    fn test_interpret_transport_failure() {
        let outcome = Err(TransportError::RequestFailed("connection refused".into()));
        let err = interpret::<Vec<Account>>(&Endpoint::ACCOUNTS_LIST, outcome).unwrap_err();
        let api = err.api_errors().unwrap();
        assert_eq!(api.status(), None);
        assert!(api.get("message").unwrap().contains("connection refused"));
    }

    #[test]
    fn test_interpret_unreadable_body_keeps_status() {
        let outcome = Err(TransportError::Body {
            status: 201,
            message: "connection reset".into(),
        });
        let err = interpret::<serde_json::Value>(&Endpoint::ADDRESSES_TAKE, outcome).unwrap_err();
        let api = err.api_errors().unwrap();
        assert_eq!(api.status(), Some(201));
        assert!(api.get("message").unwrap().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_execute_signs_sent_body() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(200, r#"{"data":[]}"#);
        let exec = executor(transport.clone());

        let params = Params::new().with("currency_from", "BTC");
        let _: Vec<serde_json::Value> = exec
            .execute(Request::with_params(Endpoint::CURRENCIES_PAIRS, params))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let sent = &requests[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "https://mock.test/api/v2/currencies/pairs");

        let body = sent.body.as_deref().unwrap();
        assert_eq!(body, r#"{"currency_from":"BTC"}"#);
        assert_eq!(sent.header(KEY_HEADER), Some("PUBLIC"));

        let creds = Credentials::new("PUBLIC", "SECRET").unwrap();
        assert_eq!(sent.header(SIGNATURE_HEADER), Some(creds.sign(body).as_str()));
    }

    #[tokio::test]
    async fn test_execute_empty_params_send_array() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(200, r#"{"data":[]}"#);
        let exec = executor(transport.clone());

        let _: Vec<Account> = exec.execute(Request::new(Endpoint::ACCOUNTS_LIST)).await.unwrap();

        let sent = &transport.requests()[0];
        assert_eq!(sent.body.as_deref(), Some("[]"));
        assert_eq!(
            sent.header(SIGNATURE_HEADER),
            Some("7f42565f12f12f2515c815295b6d91cdf514f7a6fb87cf2357f18556cf068fc247b765072ddcbef9a17cbcadf74046d381e213e8febf0bc74848ecf7b957090c")
        );
    }

    #[tokio::test]
    async fn test_execute_timeout_is_distinct() {
        let transport = Arc::new(MockTransport::new().with_delay(Duration::from_millis(500)));
        transport.push_response(200, r#"{"data":[]}"#);
        let creds = Credentials::new("PUBLIC", "SECRET").unwrap();
        let exec = Executor::new(transport, creds, BASE, Some(Duration::from_millis(20)));

        let err = exec
            .execute::<Vec<Account>>(Request::new(Endpoint::ACCOUNTS_LIST))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
        assert!(!err.is_api());
    }

    #[tokio::test]
    async fn test_single_call_deadline_without_executor_deadline() {
        let transport = Arc::new(MockTransport::new().with_delay(Duration::from_millis(300)));
        transport.push_response(200, r#"{"data":[]}"#);
        let exec = executor(transport);
        assert!(exec.timeout().is_none());

        let err = exec
            .execute_with_timeout::<Vec<Account>>(
                Request::new(Endpoint::ACCOUNTS_LIST),
                Some(Duration::from_millis(20)),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RestError::Timeout(limit) if limit == Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn test_single_call_can_lift_executor_deadline() {
        let transport = Arc::new(MockTransport::new().with_delay(Duration::from_millis(50)));
        transport.push_response(200, r#"{"data":[]}"#);
        let creds = Credentials::new("PUBLIC", "SECRET").unwrap();
        let exec = Executor::new(transport, creds, BASE, Some(Duration::from_millis(10)));

        let accounts: Vec<Account> = exec
            .execute_with_timeout(Request::new(Endpoint::ACCOUNTS_LIST), None)
            .await
            .unwrap();
        assert!(accounts.is_empty());
    }

    #[test]
    fn test_with_timeout_overrides_deadline_only() {
        let exec = executor(Arc::new(MockTransport::new()));
        let bounded = exec.with_timeout(Some(Duration::from_secs(1)));
        assert_eq!(bounded.timeout(), Some(Duration::from_secs(1)));
        assert_eq!(bounded.base_url(), exec.base_url());
        assert!(exec.timeout().is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(200, "");
        transport.push_response(503, "down");
        transport.push_error(TransportError::RequestFailed("dns".into()));
        let exec = executor(transport.clone());

        assert!(exec.ping().await);
        assert!(!exec.ping().await);
        assert!(!exec.ping().await);

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, "https://mock.test/api/v2/ping");
        assert!(requests[0].headers.is_empty());
        assert!(requests[0].body.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let exec = executor(Arc::new(MockTransport::new()));
        let trimmed = Executor::new(
            Arc::new(MockTransport::new()),
            Credentials::new("PUBLIC", "SECRET").unwrap(),
            "https://mock.test/api/v2/",
            None,
        );
        assert_eq!(exec.base_url(), trimmed.base_url());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let exec = executor(Arc::new(MockTransport::new()));
        let debug = format!("{:?}", exec);
        assert!(!debug.contains("SECRET"));
        assert!(debug.contains("[REDACTED]"));
    }
}
