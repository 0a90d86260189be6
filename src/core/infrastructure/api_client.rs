//! Internal JSON-RPC client that handles authentication and session renewal.

use crate::{
    auth::application::service::login_service::LoginService,
    core::{
        domain::{
            error::{ValidationError, ZabbixError, ZabbixResult},
            model::{
                client_config::{AuthStyle, ClientConfig},
                zabbix_auth::ZabbixAuth,
                zabbix_connection::{Credentials, ZabbixConnection},
            },
        },
        infrastructure::json_rpc::{JsonRpcRequest, JsonRpcResponse},
    },
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, header::AUTHORIZATION};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

/// Internal client that manages authentication and calls Zabbix API methods.
///
/// Every authenticated call carries the current token, either in the `auth`
/// member of the request or as a bearer header depending on
/// [`AuthStyle`]. A session older than `session_lifetime` is renewed before
/// the call is sent. Failed calls are returned as is, never replayed.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: Arc<ZabbixConnection>,
    auth: Arc<RwLock<Option<ZabbixAuth>>>,
    config: Arc<ClientConfig>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
    next_id: AtomicU64,
}

impl ApiClient {
    /// Creates a new `ApiClient`. The client starts unauthenticated.
    ///
    /// # Errors
    /// Returns `ZabbixError::Connection` if the HTTP client cannot be built and
    /// `ZabbixError::Validation` for a rate limit with a zero component.
    pub fn new(connection: ZabbixConnection, config: ClientConfig) -> ZabbixResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accept_invalid_certs())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ZabbixError::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = non_zero("requests_per_second", rl.requests_per_second)?;
                let burst = non_zero("burst_size", rl.burst_size)?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            auth: Arc::new(RwLock::new(None)),
            config: Arc::new(config),
            rate_limiter,
            next_id: AtomicU64::new(1),
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &ZabbixConnection {
        &self.connection
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sets the authentication state (used after a successful login).
    pub async fn set_auth(&self, auth: ZabbixAuth) {
        let mut lock = self.auth.write().await;
        *lock = Some(auth);
    }

    /// Returns the current authentication state, if any.
    pub async fn auth(&self) -> Option<ZabbixAuth> {
        self.auth.read().await.clone()
    }

    /// Returns `true` if there is a valid (non‑expired) token.
    pub async fn is_authenticated(&self) -> bool {
        let lock = self.auth.read().await;
        lock.as_ref()
            .map(|a| !a.token().is_expired(self.config.session_lifetime))
            .unwrap_or(false)
    }

    /// Logs in with the stored credentials, replacing any current token.
    /// A `user.login` request counts against the rate limit like any other
    /// call; an API token sends nothing and is not limited.
    pub async fn login(&self) -> ZabbixResult<()> {
        if let (Some(limiter), Credentials::Password { .. }) =
            (&self.rate_limiter, self.connection.credentials())
        {
            limiter.until_ready().await;
        }
        let auth = LoginService::new()
            .execute(&self.http_client, &self.connection)
            .await?;
        self.set_auth(auth).await;
        Ok(())
    }

    /// Calls an API method with authentication.
    ///
    /// # Errors
    /// Returns `ZabbixError` if login fails, the request fails, the server
    /// answers with a JSON-RPC error or the result cannot be parsed.
    pub async fn call<P, T>(&self, method: &str, params: &P) -> ZabbixResult<T>
    where
        P: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        self.ensure_authenticated().await?;
        let auth = self.auth.read().await.clone();
        self.execute_request(method, params, auth.as_ref()).await
    }

    /// Calls an API method that must be sent without authentication
    /// (`apiinfo.version`).
    pub async fn call_anonymous<P, T>(&self, method: &str, params: &P) -> ZabbixResult<T>
    where
        P: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(method, params, None).await
    }

    async fn execute_request<P, T>(
        &self,
        method: &str,
        params: &P,
        auth: Option<&ZabbixAuth>,
    ) -> ZabbixResult<T>
    where
        P: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, "calling zabbix api");

        let token = auth.map(|a| a.token());
        let mut body = JsonRpcRequest::new(method, params, id);
        let mut req_builder = self
            .http_client
            .post(self.connection.zabbix_url().as_str());

        match (self.config.auth_style, token) {
            (AuthStyle::RequestField, Some(token)) => body = body.with_auth(Some(token.as_str())),
            (AuthStyle::BearerHeader, Some(token)) => {
                req_builder = req_builder.header(AUTHORIZATION, token.as_bearer_header())
            }
            (_, None) => {}
        }

        let response = req_builder
            .json(&body)
            .send()
            .await
            .map_err(|e| ZabbixError::Connection(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(ZabbixError::Connection(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        response
            .json::<JsonRpcResponse<T>>()
            .await
            .map_err(|e| ZabbixError::Connection(format!("Failed to parse response: {}", e)))?
            .into_result(method)
    }

    /// Ensures that we have a valid (non‑expired) token. If not, logs in again.
    async fn ensure_authenticated(&self) -> ZabbixResult<()> {
        let need_refresh = {
            let auth_guard = self.auth.read().await;
            match auth_guard.as_ref() {
                Some(auth) => auth.token().is_expired(self.config.session_lifetime),
                None => true,
            }
        };

        if need_refresh {
            self.login().await?;
        }
        Ok(())
    }
}

fn non_zero(field: &str, value: u32) -> ZabbixResult<NonZeroU32> {
    NonZeroU32::new(value).ok_or_else(|| {
        ValidationError::Field {
            field: field.to_string(),
            message: "Rate limit values must be greater than zero".to_string(),
        }
        .into()
    })
}
