//! Main REST client implementation

use crate::endpoints::{
    AccountEndpoints, AddressEndpoints, CryptoWithdrawal, CurrencyEndpoints, ExchangeEndpoints,
    WithdrawalEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::executor::Executor;
use crate::transport::{HttpTransport, Transport};
use coinspaid_auth::Credentials;
use coinspaid_types::{
    Account, Currency, CurrencyPair, DepositAddress, ExchangeOperation, ExchangeQuote, Withdrawal,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Production API base URL
pub const PRODUCTION_URL: &str = "https://app.coinspaid.com/api/v2";

/// Sandbox API base URL
pub const SANDBOX_URL: &str = "https://sandbox.coinspaid.com/api/v2";

/// Environment variable overriding the base URL
const ENDPOINT_VAR: &str = "COINSPAID_ENDPOINT";

/// CoinsPaid REST API client
///
/// All operations except [`ping`](Self::ping) are signed with the configured
/// credentials. The client is cheap to clone and safe to share between tasks.
///
/// # Example
///
/// ```no_run
/// use coinspaid_rest::{ClientConfig, CoinsPaidClient, Credentials, SANDBOX_URL};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = CoinsPaidClient::new(ClientConfig::new(SANDBOX_URL, creds))?;
///
///     let balances = client.list_balances().await?;
///     for account in balances {
///         println!("{}: {}", account.currency, account.balance);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinsPaidClient {
    executor: Executor,
}

impl CoinsPaidClient {
    /// Create a new client using the HTTP transport
    pub fn new(config: ClientConfig) -> RestResult<Self> {
        let transport = HttpTransport::new(config.user_agent.as_deref())
            .map_err(|e| RestError::Config(e.to_string()))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client from environment variables
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> RestResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a new client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let executor = Executor::new(
            transport,
            config.credentials,
            config.endpoint,
            config.timeout,
        );

        info!(endpoint = executor.base_url(), "Created CoinsPaid REST client");

        Self { executor }
    }

    /// Base URL requests are sent to
    pub fn endpoint(&self) -> &str {
        self.executor.base_url()
    }

    /// Underlying executor, for calling endpoints directly
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Client bound by a different deadline
    ///
    /// Shares the transport and credentials, so it can be built for a single
    /// call: `client.with_timeout(Some(limit)).list_balances().await`.
    /// `None` lifts the configured deadline. Expiry is [`RestError::Timeout`].
    pub fn with_timeout(&self, timeout: Option<Duration>) -> Self {
        Self {
            executor: self.executor.with_timeout(timeout),
        }
    }

    /// Check whether the API is reachable
    pub async fn ping(&self) -> bool {
        self.executor.ping().await
    }

    // ========================================================================
    // Currencies
    // ========================================================================

    /// Get currency endpoints
    pub fn currencies(&self) -> CurrencyEndpoints<'_> {
        CurrencyEndpoints::new(&self.executor)
    }

    /// List all supported currencies
    pub async fn list_currencies(&self) -> RestResult<Vec<Currency>> {
        self.currencies().list().await
    }

    /// List currency pairs, optionally filtered by either side
    pub async fn list_currency_pairs(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> RestResult<Vec<CurrencyPair>> {
        self.currencies().pairs(from, to).await
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Get account endpoints
    pub fn accounts(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.executor)
    }

    /// List all balances, including zero balances
    pub async fn list_balances(&self) -> RestResult<Vec<Account>> {
        self.accounts().list().await
    }

    // ========================================================================
    // Addresses & Withdrawals
    // ========================================================================

    /// Get deposit address endpoints
    pub fn addresses(&self) -> AddressEndpoints<'_> {
        AddressEndpoints::new(&self.executor)
    }

    /// Take an address for depositing crypto
    pub async fn take_address(
        &self,
        foreign_id: &str,
        currency: &str,
        convert_to: Option<&str>,
    ) -> RestResult<DepositAddress> {
        self.addresses().take(foreign_id, currency, convert_to).await
    }

    /// Get withdrawal endpoints
    pub fn withdrawals(&self) -> WithdrawalEndpoints<'_> {
        WithdrawalEndpoints::new(&self.executor)
    }

    /// Withdraw crypto to an external address
    pub async fn withdraw_crypto(&self, request: &CryptoWithdrawal) -> RestResult<Withdrawal> {
        self.withdrawals().crypto(request).await
    }

    // ========================================================================
    // Exchange
    // ========================================================================

    /// Get exchange endpoints
    pub fn exchange(&self) -> ExchangeEndpoints<'_> {
        ExchangeEndpoints::new(&self.executor)
    }

    /// Quote an exchange by the amount to receive
    pub async fn calculate_exchange_by_received(
        &self,
        sender_currency: &str,
        receiver_currency: &str,
        receiver_amount: Decimal,
    ) -> RestResult<ExchangeQuote> {
        self.exchange()
            .calculate_by_received(sender_currency, receiver_currency, receiver_amount)
            .await
    }

    /// Quote an exchange by the amount to send
    pub async fn calculate_exchange_by_sent(
        &self,
        sender_currency: &str,
        receiver_currency: &str,
        sender_amount: Decimal,
    ) -> RestResult<ExchangeQuote> {
        self.exchange()
            .calculate_by_sent(sender_currency, receiver_currency, sender_amount)
            .await
    }

    /// Exchange at a previously quoted price
    pub async fn exchange_fixed(
        &self,
        foreign_id: &str,
        sender_currency: &str,
        receiver_currency: &str,
        sender_amount: Decimal,
        price: Decimal,
    ) -> RestResult<ExchangeOperation> {
        self.exchange()
            .fixed(foreign_id, sender_currency, receiver_currency, sender_amount, price)
            .await
    }

    /// Exchange at the current market price
    pub async fn exchange_now(
        &self,
        foreign_id: &str,
        sender_currency: &str,
        receiver_currency: &str,
        sender_amount: Decimal,
    ) -> RestResult<ExchangeOperation> {
        self.exchange()
            .now(foreign_id, sender_currency, receiver_currency, sender_amount)
            .await
    }
}

impl std::fmt::Debug for CoinsPaidClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinsPaidClient")
            .field("endpoint", &self.endpoint())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL
    pub endpoint: String,
    /// API credentials
    pub credentials: Credentials,
    /// Default deadline for each request; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration for the given base URL
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            timeout: None,
            user_agent: None,
        }
    }

    /// Create a configuration for the production API
    pub fn production(credentials: Credentials) -> Self {
        Self::new(PRODUCTION_URL, credentials)
    }

    /// Create a configuration for the sandbox API
    pub fn sandbox(credentials: Credentials) -> Self {
        Self::new(SANDBOX_URL, credentials)
    }

    /// Create a configuration from environment variables
    ///
    /// Reads `COINSPAID_PUBLIC_KEY` and `COINSPAID_SECRET_KEY`, and
    /// `COINSPAID_ENDPOINT` if set (production otherwise).
    pub fn from_env() -> RestResult<Self> {
        let credentials = Credentials::from_env()?;
        let endpoint = std::env::var(ENDPOINT_VAR).unwrap_or_else(|_| PRODUCTION_URL.to_string());
        Ok(Self::new(endpoint, credentials))
    }

    /// Set the base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a per-request deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
