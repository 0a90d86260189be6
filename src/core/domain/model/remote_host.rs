//! Remote object model, as exchanged with the `host.*`, `hostgroup.*` and
//! `template.*` API methods.

use crate::core::domain::{
    model::interface_type::InterfaceType,
    value_object::serde_helpers::{deserialize_code, zabbix_flag},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Monitoring status of a host (`0` monitored, `1` unmonitored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostStatus {
    #[default]
    Monitored,
    Unmonitored,
}

impl HostStatus {
    #[must_use]
    pub fn from_monitored(monitored: bool) -> Self {
        if monitored {
            HostStatus::Monitored
        } else {
            HostStatus::Unmonitored
        }
    }

    #[must_use]
    pub fn is_monitored(self) -> bool {
        self == HostStatus::Monitored
    }

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            HostStatus::Monitored => 0,
            HostStatus::Unmonitored => 1,
        }
    }
}

impl Serialize for HostStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for HostStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match deserialize_code(deserializer)? {
            0 => Ok(HostStatus::Monitored),
            1 => Ok(HostStatus::Unmonitored),
            other => Err(serde::de::Error::custom(format!(
                "unknown host status {}",
                other
            ))),
        }
    }
}

/// A host as sent to `host.create`/`host.update` and returned by `host.get`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoteHost {
    /// Assigned by the server; absent on create.
    #[serde(rename = "hostid", default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub status: HostStatus,
    /// Left out of update payloads: interfaces are only written on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<HostInterface>>,
    #[serde(default)]
    pub groups: Vec<HostGroupId>,
    #[serde(default)]
    pub templates: Vec<TemplateId>,
    #[serde(default)]
    pub macros: Vec<UserMacro>,
}

/// A resolved host interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInterface {
    #[serde(rename = "interfaceid", default, skip_serializing_if = "Option::is_none")]
    pub interface_id: Option<String>,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub dns: String,
    #[serde(with = "zabbix_flag")]
    pub main: bool,
    pub port: String,
    #[serde(rename = "type")]
    pub kind: InterfaceType,
    #[serde(rename = "useip", with = "zabbix_flag")]
    pub use_ip: bool,
}

/// Group reference inside a host payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostGroupId {
    #[serde(rename = "groupid")]
    pub group_id: String,
}

/// Template reference inside a host payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateId {
    #[serde(rename = "templateid")]
    pub template_id: String,
}

/// A host-level user macro, name in server form (`{$SITE}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMacro {
    #[serde(rename = "macro")]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// A host group as returned by `hostgroup.get`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostGroup {
    #[serde(rename = "groupid")]
    pub group_id: String,
    pub name: String,
}

/// A template as returned by `template.get`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Template {
    #[serde(rename = "templateid")]
    pub template_id: String,
    /// Technical name, the key templates are configured and filtered by.
    pub host: String,
    /// Visible name.
    #[serde(default)]
    pub name: String,
}
