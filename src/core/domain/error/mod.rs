use thiserror::Error;

/// The main error type for Zabbix operations.
///
/// This enum represents all possible errors that can occur while talking to
/// a Zabbix server or while translating a host description into the remote
/// object model.
#[derive(Error, Debug)]
pub enum ZabbixError {
    /// Represents errors that occur while reaching the server
    ///
    /// # Fields
    /// * `0` - A description of what went wrong (transport, HTTP status, unparsable body)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents authentication failures
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// A JSON-RPC error object returned by the Zabbix server
    ///
    /// # Fields
    /// * `code` - JSON-RPC error code (e.g. `-32602`)
    /// * `message` - Short error message
    /// * `data` - Server supplied details, usually the useful part
    #[error("API error ({code}): {message} {data}")]
    Api {
        code: i64,
        message: String,
        data: String,
    },

    /// The requested remote object does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation {
        #[source]
        source: ValidationError,
    },

    /// Translation or resolution failure of a host description
    #[error(transparent)]
    Host(#[from] HostError),
}

impl ZabbixError {
    /// Returns `true` if the error was produced by the remote API layer
    /// (transport, authentication, server-side rejection, missing object)
    /// rather than by local translation or validation.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ZabbixError::Connection(_)
                | ZabbixError::Authentication(_)
                | ZabbixError::Api { .. }
                | ZabbixError::NotFound(_)
        )
    }
}

impl From<ValidationError> for ZabbixError {
    fn from(error: ValidationError) -> Self {
        ZabbixError::Validation { source: error }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Errors raised while translating a host description to or from the
/// remote object model. Every variant names the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Interface kind outside of `agent`, `snmp`, `ipmi`, `jmx`
    #[error("{0} isn't a valid interface type")]
    InvalidInterfaceType(String),

    /// Neither `dns` nor `ip` is set on an interface
    #[error("interface #{index}: at least one of dns or ip must be set")]
    MissingAddress { index: usize },

    /// A configured host group does not exist on the server
    #[error("host group {0} doesn't exist on the zabbix server")]
    UnknownGroup(String),

    /// A configured template does not exist on the server
    #[error("template {0} doesn't exist on the zabbix server")]
    UnknownTemplate(String),

    /// A remote macro name is not of the form `{$NAME}`
    #[error("invalid macro name \"{0}\"")]
    InvalidMacroName(String),
}

/// Type alias for Results that may fail with a ZabbixError
pub type ZabbixResult<T> = Result<T, ZabbixError>;
