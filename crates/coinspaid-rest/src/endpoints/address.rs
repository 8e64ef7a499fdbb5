//! Deposit address endpoints

use crate::error::RestResult;
use crate::executor::Executor;
use coinspaid_types::{DepositAddress, Endpoint, Params, Request};
use tracing::{debug, instrument};

/// Deposit address endpoints
pub struct AddressEndpoints<'a> {
    executor: &'a Executor,
}

impl<'a> AddressEndpoints<'a> {
    pub fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Take an address for depositing crypto
    ///
    /// # Arguments
    /// * `foreign_id` - Your reference for this address, echoed back in callbacks
    /// * `currency` - Currency to receive funds in (e.g. "BTC")
    /// * `convert_to` - Currency to convert deposits to on the fly (optional)
    #[instrument(skip(self))]
    pub async fn take(
        &self,
        foreign_id: &str,
        currency: &str,
        convert_to: Option<&str>,
    ) -> RestResult<DepositAddress> {
        let params = Params::new()
            .with("foreign_id", foreign_id)
            .with("currency", currency)
            .with_opt("convert_to", convert_to);

        debug!("Taking {} deposit address", currency);
        self.executor
            .execute(Request::with_params(Endpoint::ADDRESSES_TAKE, params))
            .await
    }
}
