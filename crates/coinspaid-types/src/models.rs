//! Response payloads for the CoinsPaid API v2
//!
//! Every successful response wraps its payload in `{"data": ...}`. Amounts,
//! fees and prices arrive as decimal strings.

use crate::enums::{CurrencyType, OperationStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

// ============================================================================
// Response Wrapper
// ============================================================================

/// Standard `{"data": ...}` wrapper around every success payload
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    /// Endpoint-specific payload
    pub data: T,
}

impl<T> DataEnvelope<T> {
    /// Unwrap the payload
    pub fn into_data(self) -> T {
        self.data
    }
}

// ============================================================================
// Currencies
// ============================================================================

/// Supported currency (`/currencies/list`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Currency {
    /// Internal currency ID
    pub id: u64,
    /// Crypto or fiat
    #[serde(rename = "type")]
    pub kind: CurrencyType,
    /// Currency ISO code (e.g. "BTC")
    pub currency: String,
    /// Minimum amount for operations
    pub minimum_amount: Decimal,
    /// Deposit fee, percent
    pub deposit_fee_percent: Decimal,
    /// Withdrawal fee, percent
    pub withdrawal_fee_percent: Decimal,
    /// Number of decimal places
    pub precision: u32,
}

/// Source side of a currency pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PairCurrencyFrom {
    /// Currency ISO code
    pub currency: String,
    /// Crypto or fiat
    #[serde(rename = "type")]
    pub kind: CurrencyType,
    /// Minimum exchange amount
    pub min_amount: Decimal,
    /// Minimum deposit amount when converting on deposit
    pub min_amount_deposit_with_exchange: Decimal,
}

/// Target side of a currency pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PairCurrencyTo {
    /// Currency ISO code
    pub currency: String,
    /// Crypto or fiat
    #[serde(rename = "type")]
    pub kind: CurrencyType,
}

/// Currency pair with its rates (`/currencies/pairs`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrencyPair {
    /// Currency exchanged from
    pub currency_from: PairCurrencyFrom,
    /// Currency exchanged to
    pub currency_to: PairCurrencyTo,
    /// Rate on the `from` side
    pub rate_from: Decimal,
    /// Rate on the `to` side
    pub rate_to: Decimal,
}

impl CurrencyPair {
    /// Pair name in `FROM/TO` form
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.currency_from.currency, self.currency_to.currency)
    }
}

// ============================================================================
// Accounts
// ============================================================================

/// Account balance (`/accounts/list`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    /// Currency ISO code
    pub currency: String,
    /// Crypto or fiat
    #[serde(rename = "type")]
    pub kind: CurrencyType,
    /// Current balance
    pub balance: Decimal,
}

// ============================================================================
// Addresses & Withdrawals
// ============================================================================

/// Deposit address (`/addresses/take`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DepositAddress {
    /// Address ID
    pub id: u64,
    /// Currency received on this address
    pub currency: String,
    /// Currency deposits are converted to, if any
    pub convert_to: Option<String>,
    /// Blockchain address
    pub address: String,
    /// Destination tag or memo, if the chain uses one
    pub tag: Option<String>,
    /// Caller reference echoed back
    pub foreign_id: String,
}

/// Withdrawal operation (`/withdrawal/crypto`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Withdrawal {
    /// Operation ID
    pub id: u64,
    /// Caller reference echoed back
    pub foreign_id: String,
    /// Operation type (e.g. "withdrawal", "withdrawal_exchange")
    #[serde(rename = "type")]
    pub kind: String,
    /// Processing status
    pub status: OperationStatus,
    /// Requested amount
    pub amount: Decimal,
    /// Amount debited, when converting
    pub sender_amount: Option<Decimal>,
    /// Currency debited, when converting
    pub sender_currency: Option<String>,
    /// Amount sent out, when converting
    pub receiver_amount: Option<Decimal>,
    /// Currency sent out, when converting
    pub receiver_currency: Option<String>,
}

// ============================================================================
// Exchange
// ============================================================================

/// Exchange calculation (`/exchange/calculate`)
///
/// The quoted `price` can be passed to a fixed-rate exchange until
/// `ts_release`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExchangeQuote {
    /// Amount to send
    pub sender_amount: Decimal,
    /// Currency to send
    pub sender_currency: String,
    /// Amount to receive
    pub receiver_amount: Decimal,
    /// Currency to receive
    pub receiver_currency: String,
    /// Fee charged
    pub fee_amount: Decimal,
    /// Fee currency
    pub fee_currency: String,
    /// Quoted price
    pub price: Decimal,
    /// Time the price was fixed
    #[serde(with = "chrono::serde::ts_seconds")]
    pub ts_fixed: DateTime<Utc>,
    /// Time the price stops being honored
    #[serde(with = "chrono::serde::ts_seconds")]
    pub ts_release: DateTime<Utc>,
    /// Validity window in seconds
    pub fix_period: u64,
}

impl ExchangeQuote {
    /// Check whether the quote is still honored at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.ts_release
    }
}

/// Exchange operation (`/exchange/fixed`, `/exchange/now`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExchangeOperation {
    /// Operation ID
    pub id: u64,
    /// Caller reference echoed back
    pub foreign_id: String,
    /// Operation type
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount sent
    pub sender_amount: Decimal,
    /// Currency sent
    pub sender_currency: String,
    /// Amount received
    pub receiver_amount: Decimal,
    /// Currency received
    pub receiver_currency: String,
    /// Fee charged
    pub fee_amount: Decimal,
    /// Fee currency
    pub fee_currency: String,
    /// Execution price
    pub price: Decimal,
    /// Processing status
    pub status: OperationStatus,
}
