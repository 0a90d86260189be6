//! Desired state of a host, in the flat shape the orchestrator hands over.

use crate::core::domain::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const DEFAULT_INTERFACE_PORT: &str = "10050";
pub const DEFAULT_INTERFACE_TYPE: &str = "agent";

fn default_monitored() -> bool {
    true
}

fn default_port() -> String {
    DEFAULT_INTERFACE_PORT.to_string()
}

fn default_interface_type() -> String {
    DEFAULT_INTERFACE_TYPE.to_string()
}

/// Desired description of a monitored host.
///
/// `groups` and `templates` are ordered sets, so resolution walks them (and
/// reports the first missing name) in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSpec {
    /// Technical name of the host.
    pub host: String,
    /// Visible name; computed by the server from `host` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_monitored")]
    pub monitored: bool,
    /// Any change here forces a replacement of the host upstream.
    pub interfaces: Vec<InterfaceSpec>,
    pub groups: BTreeSet<String>,
    #[serde(default)]
    pub templates: BTreeSet<String>,
    /// User macros, keyed by their plain name (`SITE`, not `{$SITE}`).
    #[serde(default, rename = "macro")]
    pub macros: BTreeMap<String, String>,
}

impl HostSpec {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            name: None,
            monitored: true,
            interfaces: Vec::new(),
            groups: BTreeSet::new(),
            templates: BTreeSet::new(),
            macros: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_monitored(mut self, monitored: bool) -> Self {
        self.monitored = monitored;
        self
    }

    pub fn with_interface(mut self, interface: InterfaceSpec) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.templates.insert(template.into());
        self
    }

    pub fn with_macro(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.macros.insert(name.into(), value.into());
        self
    }

    /// Checks what can be checked without the server.
    ///
    /// An empty group set is rejected here: `hostgroup.get` with an empty
    /// name filter matches every group on the server.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.host.trim().is_empty() {
            return Err(ValidationError::Field {
                field: "host".to_string(),
                message: "Host name cannot be empty".to_string(),
            });
        }
        if self.groups.is_empty() {
            return Err(ValidationError::Field {
                field: "groups".to_string(),
                message: "At least one host group is required".to_string(),
            });
        }
        Ok(())
    }
}

/// One configured network interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceSpec {
    #[serde(default)]
    pub dns: String,
    #[serde(default)]
    pub ip: String,
    pub main: bool,
    #[serde(default = "default_port")]
    pub port: String,
    /// One of `agent`, `snmp`, `ipmi`, `jmx`; checked at translation time.
    #[serde(default = "default_interface_type", rename = "type")]
    pub kind: String,
    /// Assigned by the server, filled on read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_id: Option<String>,
}

impl InterfaceSpec {
    /// A primary agent interface reached by IP address.
    pub fn ip(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Self::blank()
        }
    }

    /// A primary agent interface reached by DNS name.
    pub fn dns(dns: impl Into<String>) -> Self {
        Self {
            dns: dns.into(),
            ..Self::blank()
        }
    }

    fn blank() -> Self {
        Self {
            dns: String::new(),
            ip: String::new(),
            main: true,
            port: default_port(),
            kind: default_interface_type(),
            interface_id: None,
        }
    }

    pub fn with_main(mut self, main: bool) -> Self {
        self.main = main;
        self
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

/// A host as tracked by the orchestrator once it exists remotely.
///
/// `id` is the entity key and `host_id` the exposed attribute; both hold the
/// identifier assigned by the server on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostState {
    pub id: String,
    pub host_id: String,
    pub spec: HostSpec,
}

impl HostState {
    pub fn new(host_id: impl Into<String>, spec: HostSpec) -> Self {
        let host_id = host_id.into();
        Self {
            id: host_id.clone(),
            host_id,
            spec,
        }
    }
}
