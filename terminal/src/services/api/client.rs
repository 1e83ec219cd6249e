//! # API Client
//!
//! HTTP client for the account service.

use async_trait::async_trait;
use reqwest::Client;
use shared::{Account, FormNumber};

use crate::core::config::ClientConfig;
use crate::core::error::ApiError;
use crate::core::service::AccountService;

/// HTTP client for communicating with the account service.
///
/// One `reqwest::Client` (and its connection pool) per process. No timeout is
/// configured and nothing is retried: a request either resolves or the
/// transport's own defaults end it.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured base URL.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    /// Absolute URL for an API path such as `/accounts/42`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AccountService for ApiClient {
    async fn create_account(
        &self,
        account_number: FormNumber,
        customer_name: &str,
        balance: FormNumber,
    ) -> Result<Account, ApiError> {
        super::accounts::create_account(self, account_number, customer_name, balance).await
    }

    async fn deposit(&self, account_number: FormNumber, amount: FormNumber) -> Result<Account, ApiError> {
        super::accounts::deposit(self, account_number, amount).await
    }

    async fn withdraw(&self, account_number: FormNumber, amount: FormNumber) -> Result<Account, ApiError> {
        super::accounts::withdraw(self, account_number, amount).await
    }

    async fn get_balance(&self, account_number: FormNumber) -> Result<Account, ApiError> {
        super::accounts::get_balance(self, account_number).await
    }

    async fn update_balance(&self, account_number: FormNumber, amount: FormNumber) -> Result<Account, ApiError> {
        super::accounts::update_balance(self, account_number, amount).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let config = ClientConfig::with_base_url("http://bank.test/api/").unwrap();
        let client = ApiClient::new(&config);

        assert_eq!(client.url("/accounts/42"), "http://bank.test/api/accounts/42");
    }
}
