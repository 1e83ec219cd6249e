//! # Service Traits
//!
//! The seam between the view controller and the account service, so tests can
//! swap the HTTP client for a scripted double.

use async_trait::async_trait;
use shared::{Account, FormNumber};

use crate::core::error::ApiError;

/// Operations offered by the remote account service.
///
/// Every call issues exactly one request and resolves to the account record
/// the server returned. Implementations never retry and never compute a
/// balance themselves.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Open a new account
    async fn create_account(
        &self,
        account_number: FormNumber,
        customer_name: &str,
        balance: FormNumber,
    ) -> Result<Account, ApiError>;

    /// Add funds
    async fn deposit(&self, account_number: FormNumber, amount: FormNumber) -> Result<Account, ApiError>;

    /// Remove funds
    async fn withdraw(&self, account_number: FormNumber, amount: FormNumber) -> Result<Account, ApiError>;

    /// Fetch the current account record
    async fn get_balance(&self, account_number: FormNumber) -> Result<Account, ApiError>;

    /// Overwrite the balance (administrative; not reachable from the dashboard)
    async fn update_balance(&self, account_number: FormNumber, amount: FormNumber) -> Result<Account, ApiError>;
}
