use crate::core::domain::error::ValidationError;

/// A validated Zabbix username.
#[derive(Debug, Clone)]
pub struct ZabbixUsername(String);

impl ZabbixUsername {
    /// Creates a new username without validation.
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self(username)
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a username.
///
/// Zabbix allows up to 100 characters and almost any printable character
/// (`Admin`, `john.doe@corp`, `svc terraform`), so only emptiness, length and
/// control characters are rejected here.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    if username.chars().count() > 100 {
        return Err(ValidationError::Format(format!(
            "Username cannot exceed 100 characters (got {})",
            username.chars().count()
        )));
    }
    if username.chars().any(char::is_control) {
        return Err(ValidationError::Format(
            "Username contains control characters".to_string(),
        ));
    }
    Ok(())
}
