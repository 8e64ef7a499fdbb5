//! Endpoint descriptors
//!
//! Every operation of the API is a fixed path plus the HTTP status the
//! service answers with on success. Anything else is treated as an error.

use std::fmt;

/// An API operation: relative path and expected success status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Path relative to the configured base URL (e.g. `/currencies/list`)
    pub path: &'static str,
    /// HTTP status code that signals success
    pub expected_status: u16,
}

impl Endpoint {
    /// Liveness probe (GET, unsigned)
    pub const PING: Self = Self::new("/ping", 200);
    /// All supported currencies
    pub const CURRENCIES_LIST: Self = Self::new("/currencies/list", 200);
    /// Currency pairs and their rates
    pub const CURRENCIES_PAIRS: Self = Self::new("/currencies/pairs", 200);
    /// Account balances, including zero balances
    pub const ACCOUNTS_LIST: Self = Self::new("/accounts/list", 200);
    /// Take a deposit address
    pub const ADDRESSES_TAKE: Self = Self::new("/addresses/take", 201);
    /// Withdraw crypto to an external address
    pub const WITHDRAWAL_CRYPTO: Self = Self::new("/withdrawal/crypto", 201);
    /// Calculate an exchange by sent or received amount
    pub const EXCHANGE_CALCULATE: Self = Self::new("/exchange/calculate", 200);
    /// Exchange at a previously quoted price
    pub const EXCHANGE_FIXED: Self = Self::new("/exchange/fixed", 201);
    /// Exchange at the current market price
    pub const EXCHANGE_NOW: Self = Self::new("/exchange/now", 201);

    /// Create a new endpoint descriptor
    pub const fn new(path: &'static str, expected_status: u16) -> Self {
        Self {
            path,
            expected_status,
        }
    }

    /// Check whether a response status means success for this endpoint
    pub fn is_expected(&self, status: u16) -> bool {
        self.expected_status == status
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (expects {})", self.path, self.expected_status)
    }
}
