use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::number::FormNumber;

/// Account record as returned by the account service.
///
/// The balance is always the server's value; clients replace their copy with
/// each response instead of adjusting it locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_name: String,
    pub balance: f64,
}

/// Create account request
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest<'a> {
    pub account_number: FormNumber,
    pub customer_name: &'a str,
    pub balance: FormNumber,
}

/// Deposit, withdraw and balance update request
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct AmountRequest {
    pub amount: FormNumber,
}

/// Error body returned by the account service on 4xx responses.
///
/// Either field may be present depending on which layer rejected the request.
/// A field that is not a string reads as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// The message to show: `error` if present, else `message`.
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(text) => Some(text),
        Field::Other(_) => None,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_uses_camel_case() {
        let account: Account = serde_json::from_str(
            r#"{"accountNumber":42,"customerName":"Ada","balance":100}"#,
        )
        .unwrap();

        assert_eq!(account.account_number, 42);
        assert_eq!(account.customer_name, "Ada");
        assert_eq!(account.balance, 100.0);
    }

    #[test]
    fn test_account_null_customer_name() {
        let account: Account = serde_json::from_str(
            r#"{"accountNumber":7,"customerName":null,"balance":0.5}"#,
        )
        .unwrap();
        assert_eq!(account.customer_name, "");
    }

    #[test]
    fn test_create_request_body() {
        let request = CreateAccountRequest {
            account_number: FormNumber::from(42.0),
            customer_name: "Ada",
            balance: FormNumber::from(100.25),
        };

        let json = serde_json::to_value(request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"accountNumber": 42, "customerName": "Ada", "balance": 100.25})
        );
    }

    #[test]
    fn test_amount_request_nan_is_null() {
        let json = serde_json::to_string(&AmountRequest { amount: FormNumber::NAN }).unwrap();
        assert_eq!(json, r#"{"amount":null}"#);
    }

    #[test]
    fn test_error_response_fields_optional() {
        let body: ErrorResponse = serde_json::from_str(r#"{"message":"bad"}"#).unwrap();
        assert_eq!(body.error, None);
        assert_eq!(body.into_message().as_deref(), Some("bad"));
    }

    #[test]
    fn test_error_response_prefers_error_field() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error":"account not found","message":"ignored"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("account not found"));
    }

    #[test]
    fn test_error_response_ignores_non_string_fields() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error":404,"message":null,"status":500}"#).unwrap();
        assert_eq!(body, ErrorResponse::default());
    }

    #[test]
    fn test_error_response_omits_missing_fields() {
        let body = ErrorResponse {
            error: Some("account not found".to_string()),
            message: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"account not found"}"#);
    }
}
