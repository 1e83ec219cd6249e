//! # Stub Account Service
//!
//! In-process axum server mimicking the account service's REST API, bound to
//! an ephemeral port on 127.0.0.1.
//!
//! Behaviour mirrors the real service:
//! - unknown accounts → 404 `{"error": "account not found"}`
//! - non-positive amounts → 400 `{"error": "Amount must be positive"}`
//! - overdrafts → 400 `{"error": "Insufficient funds for withdrawal"}`
//! - negative opening balance → 400 `{"error": "Initial balance cannot be negative"}`
//! - a path account number that is not an integer → 400 with an empty body
//!
//! Two magic account numbers exercise odd responses:
//! - `500` → 500 `{"message": "Internal error"}`
//! - `999` → 200 with a body that is not JSON

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::Value;
use shared::{Account, ErrorResponse};

use banking_terminal::core::ClientConfig;
use banking_terminal::services::api::ApiClient;

pub const SERVER_ERROR_ACCOUNT: i64 = 500;
pub const GARBAGE_BODY_ACCOUNT: i64 = 999;

#[derive(Default)]
pub struct Ledger {
    pub accounts: HashMap<i64, Account>,
    /// Every JSON body received, in order
    pub bodies: Vec<Value>,
    /// Every request path received, in order
    pub paths: Vec<String>,
}

pub type SharedLedger = Arc<Mutex<Ledger>>;

pub struct StubServer {
    pub base_url: String,
    pub ledger: SharedLedger,
}

impl StubServer {
    /// Start a stub server with the given accounts already open.
    pub async fn start(accounts: Vec<Account>) -> Self {
        let ledger: SharedLedger = Arc::new(Mutex::new(Ledger {
            accounts: accounts.into_iter().map(|a| (a.account_number, a)).collect(),
            ..Default::default()
        }));

        let router = Router::new()
            .route("/api/accounts", post(create_account))
            .route("/api/accounts/{number}", get(get_account))
            .route("/api/accounts/{number}/deposit", post(deposit))
            .route("/api/accounts/{number}/withdraw", post(withdraw))
            .route("/api/accounts/{number}/balance", put(update_balance))
            .with_state(ledger.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub server");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            ledger,
        }
    }

    pub fn client(&self) -> ApiClient {
        let config = ClientConfig::with_base_url(&self.base_url).expect("valid base url");
        ApiClient::new(&config)
    }

    pub fn account(&self, number: i64) -> Option<Account> {
        self.ledger.lock().accounts.get(&number).cloned()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.ledger.lock().bodies.clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.ledger.lock().paths.clone()
    }
}

pub fn account(number: i64, name: &str, balance: f64) -> Account {
    Account {
        account_number: number,
        customer_name: name.to_string(),
        balance,
    }
}

fn error_body(text: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: Some(text.to_string()),
        message: None,
    })
}

fn message_body(text: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: None,
        message: Some(text.to_string()),
    })
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, error_body(message)).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, error_body("account not found")).into_response()
}

/// Resolve the path segment, answering the special account numbers directly.
fn resolve(ledger: &SharedLedger, raw: &str, path: String) -> Result<i64, Response> {
    ledger.lock().paths.push(path);

    let number: i64 = raw.parse().map_err(|_| StatusCode::BAD_REQUEST.into_response())?;
    match number {
        SERVER_ERROR_ACCOUNT => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            message_body("Internal error"),
        )
            .into_response()),
        GARBAGE_BODY_ACCOUNT => Err((StatusCode::OK, "definitely not json").into_response()),
        _ => Ok(number),
    }
}

fn amount_of(body: &Value) -> Option<f64> {
    body.get("amount").and_then(Value::as_f64)
}

async fn create_account(State(ledger): State<SharedLedger>, Json(body): Json<Value>) -> Response {
    let mut ledger = ledger.lock();
    ledger.bodies.push(body.clone());

    let parsed: Result<Account, _> = serde_json::from_value(body);
    let Ok(new_account) = parsed else {
        return bad_request("Malformed account");
    };
    if new_account.balance < 0.0 {
        return bad_request("Initial balance cannot be negative");
    }
    if ledger.accounts.contains_key(&new_account.account_number) {
        return bad_request("Account already exists");
    }

    ledger.accounts.insert(new_account.account_number, new_account.clone());
    Json(new_account).into_response()
}

async fn get_account(State(ledger): State<SharedLedger>, Path(raw): Path<String>) -> Response {
    let number = match resolve(&ledger, &raw, format!("/accounts/{}", raw)) {
        Ok(number) => number,
        Err(response) => return response,
    };

    match ledger.lock().accounts.get(&number) {
        Some(found) => Json(found.clone()).into_response(),
        None => not_found(),
    }
}

async fn deposit(
    State(ledger): State<SharedLedger>,
    Path(raw): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    move_funds(ledger, raw, body, "deposit", 1.0)
}

async fn withdraw(
    State(ledger): State<SharedLedger>,
    Path(raw): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    move_funds(ledger, raw, body, "withdraw", -1.0)
}

fn move_funds(ledger: SharedLedger, raw: String, body: Value, action: &str, sign: f64) -> Response {
    let number = match resolve(&ledger, &raw, format!("/accounts/{}/{}", raw, action)) {
        Ok(number) => number,
        Err(response) => return response,
    };

    let mut ledger = ledger.lock();
    ledger.bodies.push(body.clone());

    let Some(amount) = amount_of(&body).filter(|a| *a > 0.0) else {
        return bad_request("Amount must be positive");
    };
    let Some(existing) = ledger.accounts.get_mut(&number) else {
        return not_found();
    };
    if sign < 0.0 && amount > existing.balance {
        return bad_request("Insufficient funds for withdrawal");
    }

    existing.balance += sign * amount;
    Json(existing.clone()).into_response()
}

async fn update_balance(
    State(ledger): State<SharedLedger>,
    Path(raw): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let number = match resolve(&ledger, &raw, format!("/accounts/{}/balance", raw)) {
        Ok(number) => number,
        Err(response) => return response,
    };

    let mut ledger = ledger.lock();
    ledger.bodies.push(body.clone());

    let Some(amount) = amount_of(&body) else {
        return bad_request("Amount is required");
    };
    let Some(existing) = ledger.accounts.get_mut(&number) else {
        return not_found();
    };

    existing.balance = amount;
    Json(existing.clone()).into_response()
}
