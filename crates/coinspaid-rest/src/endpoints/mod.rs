//! API endpoint implementations

pub mod account;
pub mod address;
pub mod currency;
pub mod exchange;
pub mod withdrawal;

pub use account::AccountEndpoints;
pub use address::AddressEndpoints;
pub use currency::CurrencyEndpoints;
pub use exchange::ExchangeEndpoints;
pub use withdrawal::{CryptoWithdrawal, WithdrawalEndpoints};
