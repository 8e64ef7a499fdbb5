//! Currency kinds and operation statuses

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of currency
///
/// Unknown values are kept verbatim so new server values do not break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrencyType {
    /// Cryptocurrency
    Crypto,
    /// Fiat currency
    Fiat,
    /// Any other value reported by the service
    Other(String),
}

impl CurrencyType {
    /// Returns the type name as used in API messages
    pub fn as_str(&self) -> &str {
        match self {
            Self::Crypto => "crypto",
            Self::Fiat => "fiat",
            Self::Other(s) => s,
        }
    }

    /// Returns true for cryptocurrencies
    pub fn is_crypto(&self) -> bool {
        matches!(self, Self::Crypto)
    }
}

impl From<String> for CurrencyType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "crypto" => Self::Crypto,
            "fiat" => Self::Fiat,
            _ => Self::Other(s),
        }
    }
}

impl From<CurrencyType> for String {
    fn from(t: CurrencyType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a withdrawal or exchange
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperationStatus {
    /// Accepted and being processed
    Processing,
    /// Completed
    Confirmed,
    /// Rejected or failed
    NotConfirmed,
    /// Cancelled
    Cancelled,
    /// Any other value reported by the service
    Other(String),
}

impl OperationStatus {
    /// Returns the status name as used in API messages
    pub fn as_str(&self) -> &str {
        match self {
            Self::Processing => "processing",
            Self::Confirmed => "confirmed",
            Self::NotConfirmed => "not_confirmed",
            Self::Cancelled => "cancelled",
            Self::Other(s) => s,
        }
    }

    /// Returns true once the operation can no longer change
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Confirmed | Self::NotConfirmed | Self::Cancelled)
    }
}

impl From<String> for OperationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "processing" => Self::Processing,
            "confirmed" => Self::Confirmed,
            "not_confirmed" => Self::NotConfirmed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(s),
        }
    }
}

impl From<OperationStatus> for String {
    fn from(s: OperationStatus) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
