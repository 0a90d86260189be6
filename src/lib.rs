mod auth;
mod core;
pub mod host;

#[cfg(test)]
mod tests;

pub use crate::core::domain::error::{HostError, ValidationError, ZabbixError, ZabbixResult};
pub use crate::core::domain::model::{
    client_config::{AuthStyle, ClientConfig, PrimaryInterfaceMode, RateLimitConfig},
    host_spec::{HostSpec, HostState, InterfaceSpec},
    interface_type::{HOST_INTERFACE_TYPES, InterfaceType},
    remote_host::{
        HostGroup, HostGroupId, HostInterface, HostStatus, RemoteHost, Template, TemplateId,
        UserMacro,
    },
    zabbix_auth::ZabbixAuth,
    zabbix_connection::{Credentials, ZabbixConnection},
};
pub use crate::core::domain::value_object::{
    MacroName, TokenKind, ZabbixAuthToken, ZabbixPassword, ZabbixUrl, ZabbixUsername,
};
pub use crate::core::infrastructure::{api_client::ApiClient, zabbix_api::ZabbixApi};
pub use crate::host::application::service::host_service::HostService;

use crate::core::domain::value_object::{
    validate_auth_token, validate_password, validate_username,
};
use std::env;

/// A client for managing hosts on a Zabbix server
///
/// This client provides:
/// - Session handling (`user.login`) or API token authentication
/// - Host create/read/update/delete through [`HostService`]
///
/// # Examples
///
/// ```no_run
/// use leeca_zabbix::{HostSpec, InterfaceSpec, ZabbixClient, ZabbixResult};
///
/// #[tokio::main]
/// async fn main() -> ZabbixResult<()> {
///     let client = ZabbixClient::builder()
///         .url("https://zabbix.example.com")?
///         .credentials("Admin", "zabbix")?
///         .build()?;
///
///     let spec = HostSpec::new("srv1")
///         .with_interface(InterfaceSpec::ip("10.0.0.1"))
///         .with_group("Linux servers");
///     let state = client.hosts().create(&spec).await?;
///     println!("created host {}", state.host_id);
///     Ok(())
/// }
/// ```
pub struct ZabbixClient {
    pub(crate) api_client: ApiClient,
}

/// Builder for ZabbixClient configuration
#[derive(Debug, Default)]
pub struct ZabbixClientBuilder {
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    api_token: Option<String>,
    accept_invalid_certs: bool,
    config: ClientConfig,
}

impl ZabbixClientBuilder {
    /// Reads settings from the environment:
    /// `ZABBIX_SERVER_URL`, `ZABBIX_USER`, `ZABBIX_PASSWORD`,
    /// `ZABBIX_API_TOKEN` and `ZABBIX_INSECURE` (`true`/`1`).
    ///
    /// Unset variables are left for explicit builder calls to fill in.
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            url: var("ZABBIX_SERVER_URL"),
            username: var("ZABBIX_USER"),
            password: var("ZABBIX_PASSWORD"),
            api_token: var("ZABBIX_API_TOKEN"),
            accept_invalid_certs: var("ZABBIX_INSECURE")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            config: ClientConfig::default(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> ZabbixResult<Self> {
        self.url = Some(url.into());
        Ok(self)
    }

    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> ZabbixResult<Self> {
        self.username = Some(username.into());
        self.password = Some(password.into());
        Ok(self)
    }

    /// Uses a pre-issued API token instead of a login. Takes precedence over
    /// username and password.
    pub fn api_token(mut self, token: impl Into<String>) -> ZabbixResult<Self> {
        self.api_token = Some(token.into());
        Ok(self)
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ZabbixResult<ZabbixClient> {
        let url = self.url.ok_or_else(|| ValidationError::Field {
            field: "url".to_string(),
            message: "Server URL is required".to_string(),
        })?;
        let url = ZabbixUrl::parse(&url)?;

        let credentials = match (self.api_token, self.username, self.password) {
            (Some(token), _, _) => {
                validate_auth_token(&token)?;
                Credentials::ApiToken(ZabbixAuthToken::new_unchecked(token, TokenKind::ApiToken))
            }
            (None, Some(username), Some(password)) => {
                validate_username(&username)?;
                validate_password(&password, self.config.password_min_score)?;
                Credentials::Password {
                    username: ZabbixUsername::new_unchecked(username),
                    password: ZabbixPassword::new_unchecked(password),
                }
            }
            _ => {
                return Err(ValidationError::Field {
                    field: "credentials".to_string(),
                    message: "Either an API token or username and password are required"
                        .to_string(),
                }
                .into());
            }
        };

        let connection = ZabbixConnection::new(url, credentials, self.accept_invalid_certs);
        let api_client = ApiClient::new(connection, self.config)?;

        Ok(ZabbixClient { api_client })
    }
}

impl ZabbixClient {
    /// Creates a new builder for ZabbixClient configuration
    pub fn builder() -> ZabbixClientBuilder {
        ZabbixClientBuilder::default()
    }

    /// Authenticates with the Zabbix server
    ///
    /// Calling this is optional: the first API call logs in on its own.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The credentials are rejected
    /// - The server is unreachable
    /// - The response format is invalid
    pub async fn login(&self) -> ZabbixResult<()> {
        self.api_client.login().await
    }

    /// Returns true if the client holds a non-expired token
    pub async fn is_authenticated(&self) -> bool {
        self.api_client.is_authenticated().await
    }

    /// Returns the current authentication token if authenticated
    pub async fn auth_token(&self) -> Option<ZabbixAuthToken> {
        self.api_client.auth().await.map(|auth| auth.token().clone())
    }

    /// Returns the API version reported by the server (`apiinfo.version`)
    pub async fn api_version(&self) -> ZabbixResult<String> {
        self.api_client
            .call_anonymous("apiinfo.version", &serde_json::json!([]))
            .await
    }

    /// Host operations bound to this client
    pub fn hosts(&self) -> HostService<'_, ApiClient> {
        HostService::new(&self.api_client, self.api_client.config().primary_interface)
    }

    /// Low-level access to the remote operations
    pub fn api(&self) -> &ApiClient {
        &self.api_client
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_builder_with_credentials() {
        let client = ZabbixClient::builder()
            .url("https://zabbix.example.com/zabbix")
            .unwrap()
            .credentials("Admin", "zabbix")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            client.api().connection().zabbix_url().as_str(),
            "https://zabbix.example.com/zabbix/api_jsonrpc.php"
        );
        assert!(matches!(
            client.api().connection().credentials(),
            Credentials::Password { .. }
        ));
    }

    #[test]
    fn test_builder_prefers_api_token() {
        let client = ZabbixClient::builder()
            .url("https://zabbix.example.com")
            .unwrap()
            .credentials("Admin", "zabbix")
            .unwrap()
            .api_token("0424bd59b807674191e7d77572075f33")
            .unwrap()
            .build()
            .unwrap();

        assert!(matches!(
            client.api().connection().credentials(),
            Credentials::ApiToken(_)
        ));
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = ZabbixClient::builder().build();
        assert!(matches!(result, Err(ZabbixError::Validation { .. })));

        let result = ZabbixClient::builder()
            .url("https://zabbix.example.com")
            .unwrap()
            .build();
        assert!(matches!(result, Err(ZabbixError::Validation { .. })));
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = ZabbixClient::builder()
            .url("ftp://zabbix.example.com")
            .unwrap()
            .credentials("Admin", "zabbix")
            .unwrap()
            .build();
        assert!(matches!(result, Err(ZabbixError::Validation { .. })));
    }

    #[test]
    fn test_builder_password_strength_gate() {
        let result = ZabbixClient::builder()
            .url("https://zabbix.example.com")
            .unwrap()
            .credentials("Admin", "zabbix")
            .unwrap()
            .config(ClientConfig {
                password_min_score: Some(zxcvbn::Score::Three),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(ZabbixError::Validation { .. })));
    }
}
