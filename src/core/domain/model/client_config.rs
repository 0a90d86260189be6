//! Client-wide settings.

use std::time::Duration;

/// Token-bucket settings for outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

/// Where the authentication token travels in a JSON-RPC request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStyle {
    /// `"auth"` member of the request body (servers up to 7.0)
    #[default]
    RequestField,
    /// `Authorization: Bearer <token>` header (6.4 and later, required from 7.2)
    BearerHeader,
}

/// How the `main` flag of a configured interface maps to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryInterfaceMode {
    /// `main = true` sends `1`, `main = false` sends `0`.
    #[default]
    Strict,
    /// Every interface is sent as primary, whatever its `main` flag.
    /// Matches records written by older releases of the provider.
    Legacy,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Age after which a session token is renewed before the next call.
    pub session_lifetime: Duration,
    /// Timeout applied to every HTTP request.
    pub request_timeout: Duration,
    pub rate_limit: Option<RateLimitConfig>,
    /// Minimum zxcvbn score demanded from the login password.
    pub password_min_score: Option<zxcvbn::Score>,
    pub auth_style: AuthStyle,
    pub primary_interface: PrimaryInterfaceMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_lifetime: Duration::from_secs(15 * 60),
            request_timeout: Duration::from_secs(30),
            rate_limit: None,
            password_min_score: None,
            auth_style: AuthStyle::default(),
            primary_interface: PrimaryInterfaceMode::default(),
        }
    }
}
