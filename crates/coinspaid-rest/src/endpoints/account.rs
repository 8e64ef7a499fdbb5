//! Account endpoints

use crate::error::RestResult;
use crate::executor::Executor;
use coinspaid_types::{Account, Endpoint, Request};
use tracing::{debug, instrument};

/// Account balance endpoints
pub struct AccountEndpoints<'a> {
    executor: &'a Executor,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// List all balances, including zero balances
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<Vec<Account>> {
        debug!("Listing account balances");
        self.executor
            .execute(Request::new(Endpoint::ACCOUNTS_LIST))
            .await
    }
}
