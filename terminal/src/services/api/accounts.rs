//! # Account Endpoints
//!
//! One function per account service operation. Each issues exactly one request.
//!
//! Error messages are deliberately asymmetric:
//!
//! | Operation        | Message on non-success status                      |
//! |------------------|----------------------------------------------------|
//! | `create_account` | `Failed to create account: {status} {body}`        |
//! | `deposit`        | `Deposit failed`                                   |
//! | `withdraw`       | `Withdrawal failed`                                |
//! | `get_balance`    | extracted from body, see [`super::errors`]        |
//! | `update_balance` | extracted from body, see [`super::errors`]        |

use std::time::Instant;

use reqwest::Response;
use shared::{Account, AmountRequest, CreateAccountRequest, FormNumber};
use uuid::Uuid;

use super::client::ApiClient;
use super::errors::read_error;
use crate::core::error::ApiError;

pub const DEPOSIT_FAILED: &str = "Deposit failed";
pub const WITHDRAWAL_FAILED: &str = "Withdrawal failed";
pub const ACCOUNT_NOT_FOUND: &str = "Account not found";
pub const BALANCE_UPDATE_FAILED: &str = "Balance update failed";

/// Open a new account.
#[tracing::instrument(skip(client), fields(request_id = %Uuid::new_v4()))]
pub async fn create_account(
    client: &ApiClient,
    account_number: FormNumber,
    customer_name: &str,
    balance: FormNumber,
) -> Result<Account, ApiError> {
    tracing::info!("Creating account");
    let start = Instant::now();

    let request = CreateAccountRequest {
        account_number,
        customer_name,
        balance,
    };

    let response = client
        .client
        .post(client.url("/accounts"))
        .json(&request)
        .send()
        .await
        .map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
        let text = failure_body(response).await?;
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Create account rejected"
        );
        return Err(ApiError::Http {
            status: status.as_u16(),
            message: format!("Failed to create account: {} {}", status.as_u16(), text),
        });
    }

    decode_account(response, start).await
}

/// Add `amount` to the account's balance.
#[tracing::instrument(skip(client), fields(request_id = %Uuid::new_v4()))]
pub async fn deposit(
    client: &ApiClient,
    account_number: FormNumber,
    amount: FormNumber,
) -> Result<Account, ApiError> {
    move_funds(client, account_number, amount, "deposit", DEPOSIT_FAILED).await
}

/// Remove `amount` from the account's balance.
///
/// An insufficient-funds rejection is reported the same as any other failure.
#[tracing::instrument(skip(client), fields(request_id = %Uuid::new_v4()))]
pub async fn withdraw(
    client: &ApiClient,
    account_number: FormNumber,
    amount: FormNumber,
) -> Result<Account, ApiError> {
    move_funds(client, account_number, amount, "withdraw", WITHDRAWAL_FAILED).await
}

/// Look up an account by number.
#[tracing::instrument(skip(client), fields(request_id = %Uuid::new_v4()))]
pub async fn get_balance(client: &ApiClient, account_number: FormNumber) -> Result<Account, ApiError> {
    tracing::info!("Fetching account");
    let start = Instant::now();

    let response = client
        .client
        .get(client.url(&format!("/accounts/{}", account_number)))
        .send()
        .await
        .map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(extracted_error(response, start, ACCOUNT_NOT_FOUND).await);
    }

    decode_account(response, start).await
}

/// Overwrite the account's balance with `amount`.
#[tracing::instrument(skip(client), fields(request_id = %Uuid::new_v4()))]
pub async fn update_balance(
    client: &ApiClient,
    account_number: FormNumber,
    amount: FormNumber,
) -> Result<Account, ApiError> {
    tracing::info!("Updating balance");
    let start = Instant::now();

    let response = client
        .client
        .put(client.url(&format!("/accounts/{}/balance", account_number)))
        .json(&AmountRequest { amount })
        .send()
        .await
        .map_err(network_error)?;

    if !response.status().is_success() {
        return Err(extracted_error(response, start, BALANCE_UPDATE_FAILED).await);
    }

    decode_account(response, start).await
}

/// Shared body of deposit and withdraw: POST `{amount}` to
/// `/accounts/{n}/{action}`, with a fixed message on any failure status.
async fn move_funds(
    client: &ApiClient,
    account_number: FormNumber,
    amount: FormNumber,
    action: &str,
    failure: &str,
) -> Result<Account, ApiError> {
    tracing::info!(action, "Submitting funds movement");
    let start = Instant::now();

    let response = client
        .client
        .post(client.url(&format!("/accounts/{}/{}", account_number, action)))
        .json(&AmountRequest { amount })
        .send()
        .await
        .map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            action,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Funds movement rejected"
        );
        return Err(ApiError::Http {
            status: status.as_u16(),
            message: failure.to_string(),
        });
    }

    decode_account(response, start).await
}

async fn extracted_error(response: Response, start: Instant, fallback: &str) -> ApiError {
    let status = response.status().as_u16();
    let body = match failure_body(response).await {
        Ok(body) => body,
        Err(err) => return err,
    };
    let message = read_error(status, &body, fallback);

    tracing::warn!(
        status,
        error = %message,
        duration_ms = start.elapsed().as_millis(),
        "Request rejected"
    );

    ApiError::Http { status, message }
}

/// Read the body of a rejected request. If the body itself cannot be read the
/// transport error is reported instead of the rejection.
async fn failure_body(response: Response) -> Result<String, ApiError> {
    let status = response.status().as_u16();
    response.text().await.map_err(|e| {
        tracing::warn!(status, error = %e, "Failed to read error response body");
        ApiError::from(e)
    })
}

async fn decode_account(response: Response, start: Instant) -> Result<Account, ApiError> {
    let account = response.json::<Account>().await.map_err(|e| {
        tracing::error!(error = %e, "Account response parse error");
        ApiError::Decode(e.to_string())
    })?;

    tracing::info!(
        account_number = account.account_number,
        duration_ms = start.elapsed().as_millis(),
        "Request succeeded"
    );
    Ok(account)
}

fn network_error(err: reqwest::Error) -> ApiError {
    tracing::error!(error = %err, "Network error");
    ApiError::from(err)
}
