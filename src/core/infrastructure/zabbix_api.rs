//! The remote operations the host adapter relies on.

use crate::core::{
    domain::{
        error::{ZabbixError, ZabbixResult},
        model::remote_host::{HostGroup, RemoteHost, Template},
    },
    infrastructure::api_client::ApiClient,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

#[cfg(test)]
use mockall::automock;

/// Remote API surface consumed by the host adapter.
///
/// Implementations are stateless request/response handles; nothing is cached
/// between calls.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ZabbixApi: Send + Sync {
    /// Host groups whose name is one of `names`.
    async fn host_groups_by_name(&self, names: &[String]) -> ZabbixResult<Vec<HostGroup>>;

    /// Templates whose technical name is one of `names`.
    async fn templates_by_name(&self, names: &[String]) -> ZabbixResult<Vec<Template>>;

    /// Templates linked to the host.
    async fn templates_by_host_id(&self, host_id: &str) -> ZabbixResult<Vec<Template>>;

    /// Host groups the host belongs to.
    async fn host_groups_by_host_id(&self, host_id: &str) -> ZabbixResult<Vec<HostGroup>>;

    /// Creates a host and returns its server-assigned identifier.
    async fn host_create(&self, host: &RemoteHost) -> ZabbixResult<String>;

    /// Updates the host identified by `host.host_id`.
    async fn host_update(&self, host: &RemoteHost) -> ZabbixResult<()>;

    /// Fetches one host with its macros and interfaces.
    ///
    /// # Errors
    /// `ZabbixError::NotFound` when no host has this identifier.
    async fn host_by_id(&self, host_id: &str) -> ZabbixResult<RemoteHost>;

    /// Deletes hosts by identifier.
    async fn hosts_delete(&self, host_ids: &[String]) -> ZabbixResult<()>;
}

#[derive(Debug, Deserialize)]
struct HostIds {
    hostids: Vec<String>,
}

#[async_trait]
impl ZabbixApi for ApiClient {
    async fn host_groups_by_name(&self, names: &[String]) -> ZabbixResult<Vec<HostGroup>> {
        let params = json!({
            "output": "extend",
            "filter": { "name": names },
        });
        self.call("hostgroup.get", &params).await
    }

    async fn templates_by_name(&self, names: &[String]) -> ZabbixResult<Vec<Template>> {
        let params = json!({
            "output": "extend",
            "filter": { "host": names },
        });
        self.call("template.get", &params).await
    }

    async fn templates_by_host_id(&self, host_id: &str) -> ZabbixResult<Vec<Template>> {
        let params = json!({
            "output": "extend",
            "hostids": [host_id],
        });
        self.call("template.get", &params).await
    }

    async fn host_groups_by_host_id(&self, host_id: &str) -> ZabbixResult<Vec<HostGroup>> {
        let params = json!({
            "output": "extend",
            "hostids": [host_id],
        });
        self.call("hostgroup.get", &params).await
    }

    async fn host_create(&self, host: &RemoteHost) -> ZabbixResult<String> {
        let created: HostIds = self.call("host.create", host).await?;
        created.hostids.into_iter().next().ok_or_else(|| {
            ZabbixError::Connection("host.create returned no host id".to_string())
        })
    }

    async fn host_update(&self, host: &RemoteHost) -> ZabbixResult<()> {
        let _: HostIds = self.call("host.update", host).await?;
        Ok(())
    }

    async fn host_by_id(&self, host_id: &str) -> ZabbixResult<RemoteHost> {
        let params = json!({
            "output": "extend",
            "hostids": [host_id],
            "selectMacros": "extend",
            "selectInterfaces": "extend",
        });
        let hosts: Vec<RemoteHost> = self.call("host.get", &params).await?;
        hosts
            .into_iter()
            .next()
            .ok_or_else(|| ZabbixError::NotFound(format!("host with id {}", host_id)))
    }

    async fn hosts_delete(&self, host_ids: &[String]) -> ZabbixResult<()> {
        let _: HostIds = self.call("host.delete", &host_ids).await?;
        Ok(())
    }
}
