//! Currency endpoints

use crate::error::RestResult;
use crate::executor::Executor;
use coinspaid_types::{Currency, CurrencyPair, Endpoint, Params, Request};
use tracing::{debug, instrument};

/// Currency and currency pair endpoints
pub struct CurrencyEndpoints<'a> {
    executor: &'a Executor,
}

impl<'a> CurrencyEndpoints<'a> {
    pub fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// List all supported currencies
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<Vec<Currency>> {
        debug!("Listing currencies");
        self.executor
            .execute(Request::new(Endpoint::CURRENCIES_LIST))
            .await
    }

    /// List currency pairs with their rates
    ///
    /// # Arguments
    /// * `from` - Only pairs exchanging from this currency (optional)
    /// * `to` - Only pairs exchanging to this currency (optional)
    #[instrument(skip(self))]
    pub async fn pairs(&self, from: Option<&str>, to: Option<&str>) -> RestResult<Vec<CurrencyPair>> {
        let params = Params::new()
            .with_opt("currency_from", from)
            .with_opt("currency_to", to);

        debug!("Listing currency pairs");
        self.executor
            .execute(Request::with_params(Endpoint::CURRENCIES_PAIRS, params))
            .await
    }
}
