//! JSON-RPC 2.0 envelopes used by the Zabbix API.

use crate::core::domain::error::{ZabbixError, ZabbixResult};
use serde::{Deserialize, Serialize};

pub(crate) const JSON_RPC_VERSION: &str = "2.0";

#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: &'a P,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub fn new(method: &'a str, params: &'a P, id: u64) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION,
            method,
            params,
            id,
            auth: None,
        }
    }

    pub fn with_auth(mut self, auth: Option<&'a str>) -> Self {
        self.auth = auth;
        self
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcResponse<T> {
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: String,
}

impl From<JsonRpcError> for ZabbixError {
    fn from(error: JsonRpcError) -> Self {
        ZabbixError::Api {
            code: error.code,
            message: error.message,
            data: error.data,
        }
    }
}

impl<T> JsonRpcResponse<T> {
    /// Turns the envelope into the call outcome. An error member wins over a
    /// result member.
    pub fn into_result(self, method: &str) -> ZabbixResult<T> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        self.result.ok_or_else(|| {
            ZabbixError::Connection(format!(
                "{} response carries neither result nor error",
                method
            ))
        })
    }
}
