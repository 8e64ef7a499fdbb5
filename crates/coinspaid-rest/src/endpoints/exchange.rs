//! Exchange endpoints
//!
//! A fixed-rate exchange needs a price obtained from one of the calculate
//! calls, used before the quote's `ts_release`.

use crate::error::RestResult;
use crate::executor::Executor;
use coinspaid_types::{Endpoint, ExchangeOperation, ExchangeQuote, Params, Request};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Exchange calculation and execution endpoints
pub struct ExchangeEndpoints<'a> {
    executor: &'a Executor,
}

impl<'a> ExchangeEndpoints<'a> {
    pub fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Calculate an exchange by the amount to receive
    ///
    /// # Arguments
    /// * `sender_currency` - Currency to send
    /// * `receiver_currency` - Currency to receive
    /// * `receiver_amount` - Amount to receive
    #[instrument(skip(self))]
    pub async fn calculate_by_received(
        &self,
        sender_currency: &str,
        receiver_currency: &str,
        receiver_amount: Decimal,
    ) -> RestResult<ExchangeQuote> {
        let params = Params::new()
            .with("sender_currency", sender_currency)
            .with("receiver_currency", receiver_currency)
            .with("receiver_amount", receiver_amount.to_string());

        debug!(
            "Quoting {} {} from {}",
            receiver_amount, receiver_currency, sender_currency
        );
        self.executor
            .execute(Request::with_params(Endpoint::EXCHANGE_CALCULATE, params))
            .await
    }

    /// Calculate an exchange by the amount to send
    ///
    /// # Arguments
    /// * `sender_currency` - Currency to send
    /// * `receiver_currency` - Currency to receive
    /// * `sender_amount` - Amount to send
    #[instrument(skip(self))]
    pub async fn calculate_by_sent(
        &self,
        sender_currency: &str,
        receiver_currency: &str,
        sender_amount: Decimal,
    ) -> RestResult<ExchangeQuote> {
        let params = Params::new()
            .with("sender_currency", sender_currency)
            .with("receiver_currency", receiver_currency)
            .with("sender_amount", sender_amount.to_string());

        debug!(
            "Quoting {} {} to {}",
            sender_amount, sender_currency, receiver_currency
        );
        self.executor
            .execute(Request::with_params(Endpoint::EXCHANGE_CALCULATE, params))
            .await
    }

    /// Exchange at a previously quoted price
    ///
    /// # Arguments
    /// * `foreign_id` - Unique operation reference in your system
    /// * `sender_currency` - Currency to send
    /// * `receiver_currency` - Currency to receive
    /// * `sender_amount` - Amount to send
    /// * `price` - Price from [`ExchangeQuote::price`]
    #[instrument(skip(self))]
    pub async fn fixed(
        &self,
        foreign_id: &str,
        sender_currency: &str,
        receiver_currency: &str,
        sender_amount: Decimal,
        price: Decimal,
    ) -> RestResult<ExchangeOperation> {
        let params = Params::new()
            .with("sender_currency", sender_currency)
            .with("receiver_currency", receiver_currency)
            .with("sender_amount", sender_amount.to_string())
            .with("foreign_id", foreign_id)
            .with("price", price.to_string());

        debug!(
            "Exchanging {} {} to {} at {}",
            sender_amount, sender_currency, receiver_currency, price
        );
        self.executor
            .execute(Request::with_params(Endpoint::EXCHANGE_FIXED, params))
            .await
    }

    /// Exchange at the current market price
    ///
    /// # Arguments
    /// * `foreign_id` - Unique operation reference in your system
    /// * `sender_currency` - Currency to send
    /// * `receiver_currency` - Currency to receive
    /// * `sender_amount` - Amount to send
    #[instrument(skip(self))]
    pub async fn now(
        &self,
        foreign_id: &str,
        sender_currency: &str,
        receiver_currency: &str,
        sender_amount: Decimal,
    ) -> RestResult<ExchangeOperation> {
        let params = Params::new()
            .with("sender_currency", sender_currency)
            .with("receiver_currency", receiver_currency)
            .with("sender_amount", sender_amount.to_string())
            .with("foreign_id", foreign_id);

        debug!(
            "Exchanging {} {} to {} at market",
            sender_amount, sender_currency, receiver_currency
        );
        self.executor
            .execute(Request::with_params(Endpoint::EXCHANGE_NOW, params))
            .await
    }
}
