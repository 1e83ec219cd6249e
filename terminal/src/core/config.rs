//! Client configuration from environment variables

use reqwest::Url;

use crate::core::error::AppError;

/// Environment variable holding the account service base URL.
pub const API_BASE_URL_VAR: &str = "BANKING_API_BASE_URL";

/// Base URL used when the variable is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Account service connection settings, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8080/api`
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `BANKING_API_BASE_URL`.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var(API_BASE_URL_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::with_base_url(&value),
            _ => Ok(Self::default()),
        }
    }

    /// Build a configuration for an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed)
            .map_err(|e| AppError::Config(format!("invalid {} {:?}: {}", API_BASE_URL_VAR, trimmed, e)))?;

        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::with_base_url("http://bank.test/api/").unwrap();
        assert_eq!(config.api_base_url, "http://bank.test/api");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = ClientConfig::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ClientConfig::default().api_base_url, DEFAULT_API_BASE_URL);
    }
}
