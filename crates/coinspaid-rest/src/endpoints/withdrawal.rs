//! Withdrawal endpoints

use crate::error::RestResult;
use crate::executor::Executor;
use coinspaid_types::{Endpoint, Params, Request, Withdrawal};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Crypto withdrawal request
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoWithdrawal {
    /// Unique operation reference in your system
    pub foreign_id: String,
    /// Currency debited from the balance
    pub currency: String,
    /// Amount to withdraw, in `currency`
    pub amount: Decimal,
    /// Destination address
    pub address: String,
    /// Currency sent to the address when it differs from `currency`
    pub convert_to: Option<String>,
    /// Destination tag or memo, for chains that use one
    pub tag: Option<String>,
}

impl CryptoWithdrawal {
    /// Create a withdrawal paid out in the debited currency
    pub fn new(
        foreign_id: impl Into<String>,
        currency: impl Into<String>,
        amount: Decimal,
        address: impl Into<String>,
    ) -> Self {
        Self {
            foreign_id: foreign_id.into(),
            currency: currency.into(),
            amount,
            address: address.into(),
            convert_to: None,
            tag: None,
        }
    }

    /// Convert to another currency before sending
    pub fn convert_to(mut self, currency: impl Into<String>) -> Self {
        self.convert_to = Some(currency.into());
        self
    }

    /// Attach a destination tag or memo
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Request parameters in the order the API expects
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("foreign_id", self.foreign_id.as_str())
            .with("currency", self.currency.as_str())
            .with("amount", self.amount.to_string())
            .with("address", self.address.as_str())
            .with_opt("convert_to", self.convert_to.as_deref())
            .with_opt("tag", self.tag.as_deref())
    }
}

/// Withdrawal endpoints
pub struct WithdrawalEndpoints<'a> {
    executor: &'a Executor,
}

impl<'a> WithdrawalEndpoints<'a> {
    pub fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Withdraw crypto to an external address
    #[instrument(skip(self), fields(foreign_id = %request.foreign_id))]
    pub async fn crypto(&self, request: &CryptoWithdrawal) -> RestResult<Withdrawal> {
        debug!(
            "Withdrawing {} {} to {}",
            request.amount, request.currency, request.address
        );
        self.executor
            .execute(Request::with_params(
                Endpoint::WITHDRAWAL_CRYPTO,
                request.to_params(),
            ))
            .await
    }
}
