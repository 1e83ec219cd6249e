//! # Request Tasks
//!
//! Every user action that talks to the account service runs as one tokio task.
//! The task reports back exactly once: [`AppEvent::RequestCompleted`] with the
//! result, or [`AppEvent::RequestAborted`] if the task panicked or was
//! cancelled. Either event clears the in-flight flag, so `loading` cannot get
//! stuck.

use std::future::Future;

use async_channel::Sender;
use shared::Account;
use tokio::spawn;

use crate::app::events::{AppEvent, Operation};
use crate::core::error::ApiError;

/// Run `request` in the background and send its outcome tagged with `session`.
pub(crate) fn spawn_request<F>(
    event_tx: Sender<AppEvent>,
    session: u64,
    operation: Operation,
    request: F,
) where
    F: Future<Output = Result<Account, ApiError>> + Send + 'static,
{
    tracing::debug!(operation = operation.name(), session, "Dispatching request");

    let worker = spawn(request);

    spawn(async move {
        let event = match worker.await {
            Ok(result) => AppEvent::RequestCompleted {
                session,
                operation,
                result,
            },
            Err(join_error) => {
                tracing::error!(
                    operation = operation.name(),
                    error = %join_error,
                    "Request task aborted"
                );
                AppEvent::RequestAborted {
                    session,
                    operation,
                    reason: join_error.to_string(),
                }
            }
        };

        if event_tx.send(event).await.is_err() {
            tracing::warn!(operation = operation.name(), "Event channel closed, dropping result");
        }
    });
}
