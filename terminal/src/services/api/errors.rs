//! # Error Body Extraction
//!
//! Turns a failed response into the message shown to the user.

use shared::ErrorResponse;

/// Pick the most useful message out of an error response body.
///
/// In order of preference:
/// 1. a string `error` field of a JSON object body
/// 2. a string `message` field of a JSON object body
/// 3. the raw body text, if not empty
/// 4. `"{fallback} (HTTP {status})"`
pub fn read_error(status: u16, body: &str, fallback: &str) -> String {
    if body.trim_start().starts_with('{') {
        if let Some(message) = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(ErrorResponse::into_message)
        {
            return message;
        }
    }

    if !body.is_empty() {
        return body.to_string();
    }

    format!("{} (HTTP {})", fallback, status)
}
