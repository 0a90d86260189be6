use crate::{
    auth::application::{
        request::login_request::LoginRequest, response::login_response::LoginResponse,
    },
    core::{
        domain::{
            error::{ZabbixError, ZabbixResult},
            model::{
                zabbix_auth::ZabbixAuth,
                zabbix_connection::{Credentials, ZabbixConnection},
            },
            value_object::{TokenKind, ZabbixAuthToken, validate_auth_token},
        },
        infrastructure::json_rpc::{JsonRpcRequest, JsonRpcResponse},
    },
};

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::debug;

const LOGIN_METHOD: &str = "user.login";

pub struct LoginService {
    default_headers: HeaderMap,
}

impl LoginService {
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json-rpc"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self { default_headers }
    }

    /// Obtains an authentication token for `connection`.
    ///
    /// Password credentials go through `user.login`; an API token is
    /// returned as is without contacting the server.
    pub async fn execute(
        &self,
        http_client: &Client,
        connection: &ZabbixConnection,
    ) -> ZabbixResult<ZabbixAuth> {
        let request = match connection.credentials() {
            Credentials::ApiToken(token) => return Ok(ZabbixAuth::new(token.clone())),
            Credentials::Password { username, password } => LoginRequest {
                username: username.as_str().to_string(),
                password: password.as_str().to_string(),
            },
        };

        debug!(user = %request.username, "logging in");
        let response = self
            .send_request(http_client, connection.zabbix_url().as_str(), &request)
            .await?;

        match response.status() {
            StatusCode::OK => self.handle_login_response(response).await,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ZabbixError::Authentication(
                "Access to the API endpoint was denied".to_string(),
            )),
            StatusCode::NOT_FOUND => Err(ZabbixError::Connection(
                "API endpoint not found".to_string(),
            )),
            StatusCode::SERVICE_UNAVAILABLE => Err(ZabbixError::Connection(
                "Zabbix frontend is currently unavailable".to_string(),
            )),
            status => Err(ZabbixError::Connection(format!(
                "Unexpected response status: {}",
                status
            ))),
        }
    }

    async fn send_request(
        &self,
        client: &Client,
        url: &str,
        request: &LoginRequest,
    ) -> ZabbixResult<reqwest::Response> {
        let body = JsonRpcRequest::new(LOGIN_METHOD, request, 1);
        client
            .post(url)
            .headers(self.default_headers.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| ZabbixError::Connection(e.to_string()))
    }

    async fn handle_login_response(&self, response: reqwest::Response) -> ZabbixResult<ZabbixAuth> {
        let envelope = response
            .json::<JsonRpcResponse<LoginResponse>>()
            .await
            .map_err(|e| {
                ZabbixError::Connection(format!("Failed to parse login response: {}", e))
            })?;

        // The server reports bad credentials as a plain JSON-RPC error.
        let login = envelope
            .into_result(LOGIN_METHOD)
            .map_err(|e| match e {
                ZabbixError::Api { data, message, .. } => {
                    ZabbixError::Authentication(if data.is_empty() { message } else { data })
                }
                other => other,
            })?;

        validate_auth_token(&login.session_id)?;
        Ok(ZabbixAuth::new(ZabbixAuthToken::new_unchecked(
            login.session_id,
            TokenKind::Session,
        )))
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}
