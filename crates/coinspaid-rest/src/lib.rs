//! REST API client for the CoinsPaid crypto payment processing API v2
//!
//! This crate provides a client for currency listings, balances, deposit
//! addresses, crypto withdrawals and exchanges.
//!
//! # Features
//!
//! - **Currencies**: Supported currencies, currency pairs and rates
//! - **Accounts**: Balances, including zero balances
//! - **Addresses**: Deposit addresses with optional on-the-fly conversion
//! - **Withdrawals**: Crypto withdrawals with optional conversion
//! - **Exchange**: Quotes, fixed-rate and market exchanges
//!
//! # Authentication
//!
//! Every call except `ping` is signed: the JSON body is signed with
//! HMAC-SHA512 using the secret key, and the hex digest is sent in the
//! `X-Processing-Signature` header next to the public key in
//! `X-Processing-Key`.
//!
//! # Errors
//!
//! A call returns its typed payload or a [`RestError`]. Server rejections and
//! network failures both arrive as [`RestError::Api`] with a field to message
//! map; a success status with an unexpected body is [`RestError::Decode`].
//!
//! # Example
//!
//! ```no_run
//! use coinspaid_rest::{ClientConfig, CoinsPaidClient, Credentials};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = CoinsPaidClient::new(ClientConfig::sandbox(creds))?;
//!
//!     let quote = client.calculate_exchange_by_sent("BTC", "USD", dec!(0.01)).await?;
//!     let exchange = client
//!         .exchange_fixed("order-42", "BTC", "USD", dec!(0.01), quote.price)
//!         .await?;
//!     println!("Exchange {} is {}", exchange.id, exchange.status);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod executor;
pub mod transport;

// Re-export main types
pub use client::{ClientConfig, CoinsPaidClient, PRODUCTION_URL, SANDBOX_URL};
pub use coinspaid_auth::Credentials;
pub use endpoints::CryptoWithdrawal;
pub use error::{ApiErrors, RestError, RestResult};
pub use executor::Executor;
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};

// Re-export shared types
pub use coinspaid_types::{
    Account, Currency, CurrencyPair, CurrencyType, DepositAddress, Endpoint, ErrorMap,
    ExchangeOperation, ExchangeQuote, OperationStatus, Params, Request, Withdrawal,
};
