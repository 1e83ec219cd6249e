//! View controller driven end to end over HTTP against the stub service.

mod common;

use std::sync::Arc;
use std::time::Duration;

use banking_terminal::app::{App, Status, View};
use banking_terminal::core::AccountService;
use common::{account, StubServer};
use shared::FormNumber;

/// Drain request results until the controller is idle again.
async fn settle(app: &mut App) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        app.on_tick();
        if !app.state.read().loading {
            return;
        }
        assert!(tokio::time::Instant::now() < deadline, "request did not complete");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

fn app_for(stub: &StubServer) -> App {
    App::new(Arc::new(stub.client()))
}

#[tokio::test]
async fn test_login_deposit_withdraw_logout() {
    let stub = StubServer::start(vec![account(42, "Ada", 100.0)]).await;
    let mut app = app_for(&stub);

    app.state.write().login_account_number = "42".to_string();
    app.submit_login();
    settle(&mut app).await;

    let state = app.snapshot();
    assert_eq!(state.view, View::Dashboard);
    assert_eq!(state.balance_display().as_deref(), Some("$100.00"));
    assert_eq!(state.status, Some(Status::success("Logged in.")));

    app.state.write().deposit_amount = "50".to_string();
    app.submit_deposit();
    settle(&mut app).await;

    let state = app.snapshot();
    assert_eq!(state.balance_display().as_deref(), Some("$150.00"));
    assert_eq!(state.status, Some(Status::success("Deposit successful.")));
    assert!(state.deposit_amount.is_empty());

    app.state.write().withdraw_amount = "500".to_string();
    app.submit_withdraw();
    settle(&mut app).await;

    let state = app.snapshot();
    assert_eq!(state.balance_display().as_deref(), Some("$150.00"));
    assert_eq!(state.status, Some(Status::error("Withdrawal failed")));
    assert_eq!(state.withdraw_amount, "500");

    app.logout();
    let state = app.snapshot();
    assert_eq!(state.view, View::Login);
    assert!(state.active_account.is_none());
    assert!(state.status.is_none());
}

#[tokio::test]
async fn test_create_account_lands_on_dashboard() {
    let stub = StubServer::start(vec![]).await;
    let mut app = app_for(&stub);

    app.show_create();
    {
        let mut state = app.state.write();
        state.create_form.account_number = "7".to_string();
        state.create_form.customer_name = "  Grace ".to_string();
        state.create_form.balance = "25.5".to_string();
    }
    app.submit_create();
    settle(&mut app).await;

    let state = app.snapshot();
    assert_eq!(state.view, View::Dashboard);
    assert_eq!(state.active_account, Some(account(7, "Grace", 25.5)));
    assert_eq!(state.status, Some(Status::success("Account created.")));
    assert_eq!(stub.account(7), Some(account(7, "Grace", 25.5)));
}

#[tokio::test]
async fn test_create_rejected_stays_on_form() {
    let stub = StubServer::start(vec![]).await;
    let mut app = app_for(&stub);

    app.show_create();
    {
        let mut state = app.state.write();
        state.create_form.account_number = "7".to_string();
        state.create_form.customer_name = "Grace".to_string();
        state.create_form.balance = "-1".to_string();
    }
    app.submit_create();
    settle(&mut app).await;

    let state = app.snapshot();
    assert_eq!(state.view, View::Create);
    assert_eq!(
        state.status,
        Some(Status::error(
            r#"Failed to create account: 400 {"error":"Initial balance cannot be negative"}"#
        ))
    );
    assert_eq!(state.create_form.balance, "-1");
}

#[tokio::test]
async fn test_login_with_text_reports_http_fallback() {
    let stub = StubServer::start(vec![]).await;
    let mut app = app_for(&stub);

    app.state.write().login_account_number = "abc".to_string();
    app.submit_login();
    settle(&mut app).await;

    let state = app.snapshot();
    assert_eq!(state.view, View::Login);
    assert_eq!(state.status, Some(Status::error("Account not found (HTTP 400)")));
    assert_eq!(stub.paths(), vec!["/accounts/NaN".to_string()]);
}

#[tokio::test]
async fn test_refresh_picks_up_external_change() {
    let stub = StubServer::start(vec![account(42, "Ada", 100.0)]).await;
    let mut app = app_for(&stub);

    app.state.write().login_account_number = "42".to_string();
    app.submit_login();
    settle(&mut app).await;

    stub.client()
        .update_balance(FormNumber::from(42), FormNumber::from(80))
        .await
        .unwrap();

    app.refresh();
    settle(&mut app).await;

    let state = app.snapshot();
    assert_eq!(state.balance_display().as_deref(), Some("$80.00"));
    assert_eq!(state.status, Some(Status::success("Balance refreshed.")));
}
