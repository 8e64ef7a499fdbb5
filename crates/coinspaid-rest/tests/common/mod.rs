//! Common test utilities and fixtures for integration tests
//!
//! Contains sample response bodies in the shape returned by the API v2

use async_trait::async_trait;
use coinspaid_rest::{HttpResponse, Transport, TransportError};
use parking_lot::Mutex;
use std::collections::HashMap;

pub const BASE_URL: &str = "https://sandbox.test/api/v2";
pub const PUBLIC_KEY: &str = "PUBLIC";
pub const SECRET_KEY: &str = "SECRET";

pub const CURRENCIES_LIST: &str = r#"{"data":[
    {"id":1,"type":"crypto","currency":"BTC","minimum_amount":"0.0002",
     "deposit_fee_percent":"0","withdrawal_fee_percent":"0.5","precision":8},
    {"id":12,"type":"fiat","currency":"EUR","minimum_amount":"1",
     "deposit_fee_percent":"0","withdrawal_fee_percent":"1","precision":2}
]}"#;

pub const ACCOUNTS_LIST: &str = r#"{"data":[
    {"currency":"BTC","type":"crypto","balance":"0.05"},
    {"currency":"USD","type":"fiat","balance":"150.00"}
]}"#;

pub const ADDRESS_TAKEN: &str = r#"{"data":{"id":101,"currency":"BTC","convert_to":null,
    "address":"bc1qsandboxaddress","tag":null,"foreign_id":"user-1"}}"#;

pub const WITHDRAWAL_CREATED: &str = r#"{"data":{"id":555,"foreign_id":"w-1",
    "type":"withdrawal_exchange","status":"processing","amount":"15",
    "sender_amount":"15","sender_currency":"USD","receiver_amount":"0.00035",
    "receiver_currency":"BTC"}}"#;

pub const EXCHANGE_QUOTE: &str = r#"{"data":{"sender_amount":"0.01","sender_currency":"BTC",
    "receiver_amount":"428.50","receiver_currency":"USD","fee_amount":"1.50",
    "fee_currency":"USD","price":"43000","ts_fixed":1700000000,
    "ts_release":1700000030,"fix_period":30}}"#;

pub const EXCHANGE_CREATED: &str = r#"{"data":{"id":77,"foreign_id":"x-1","type":"exchange",
    "sender_amount":"100","sender_currency":"USD","receiver_amount":"0.0023",
    "receiver_currency":"BTC","fee_amount":"0.5","fee_currency":"USD",
    "price":"43000","status":"confirmed"}}"#;

pub const VALIDATION_ERROR: &str = r#"{"errors":{"currency":["invalid"]}}"#;

/// Request captured by [`RoutedTransport`]
#[derive(Debug, Clone)]
pub struct Captured {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

/// Transport answering by path, recording every request
#[derive(Default)]
pub struct RoutedTransport {
    routes: Mutex<HashMap<String, HttpResponse>>,
    failure: Mutex<Option<TransportError>>,
    captured: Mutex<Vec<Captured>>,
}

impl RoutedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests to `path` with `status` and `body`
    pub fn route(self, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .lock()
            .insert(format!("{BASE_URL}{path}"), HttpResponse::new(status, body));
        self
    }

    /// Fail every request at the transport level
    pub fn failing(self, error: TransportError) -> Self {
        *self.failure.lock() = Some(error);
        self
    }

    pub fn captured(&self) -> Vec<Captured> {
        self.captured.lock().clone()
    }

    fn answer(&self, url: &str) -> Result<HttpResponse, TransportError> {
        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }
        Ok(self
            .routes
            .lock()
            .get(url)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, "<html>Not Found</html>")))
    }
}

#[async_trait]
impl Transport for RoutedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.captured.lock().push(Captured {
            url: url.to_string(),
            headers: HashMap::new(),
            body: None,
        });
        tokio::task::yield_now().await;
        self.answer(url)
    }

    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &[(&'static str, String)],
    ) -> Result<HttpResponse, TransportError> {
        self.captured.lock().push(Captured {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: Some(body),
        });
        tokio::task::yield_now().await;
        self.answer(url)
    }
}
