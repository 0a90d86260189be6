use crate::core::domain::error::ValidationError;
use std::time::{Duration, SystemTime};

/// Where a token came from. Session tokens expire, API tokens do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Returned by `user.login`
    Session,
    /// Pre-issued API token (Zabbix 5.4+)
    ApiToken,
}

/// A Zabbix authentication token.
#[derive(Clone)]
pub struct ZabbixAuthToken {
    value: String,
    kind: TokenKind,
    created_at: SystemTime,
}

impl ZabbixAuthToken {
    /// Creates a new token without validation.
    pub(crate) fn new_unchecked(value: String, kind: TokenKind) -> Self {
        Self {
            value,
            kind,
            created_at: SystemTime::now(),
        }
    }

    /// Returns the token value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the creation time.
    #[must_use]
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Checks if the token is expired based on a given lifetime.
    /// API tokens are managed server-side and never considered expired.
    #[must_use]
    pub fn is_expired(&self, lifetime: Duration) -> bool {
        if self.kind == TokenKind::ApiToken {
            return false;
        }
        self.created_at
            .elapsed()
            .map(|age| age > lifetime)
            .unwrap_or(true)
    }

    /// Formats the token as an `Authorization` header value.
    #[must_use]
    pub fn as_bearer_header(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl std::fmt::Debug for ZabbixAuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZabbixAuthToken")
            .field("kind", &self.kind)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Validates the format of a token string.
pub(crate) fn validate_auth_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::Field {
            field: "token".to_string(),
            message: "Token cannot be empty".to_string(),
        });
    }
    if token.chars().any(char::is_whitespace) {
        return Err(ValidationError::Format(
            "Token cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}
