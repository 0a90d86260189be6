use crate::core::domain::value_object::{
    ZabbixAuthToken, ZabbixPassword, ZabbixUrl, ZabbixUsername,
};

/// How the client proves its identity to the server.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Username and password, exchanged for a session via `user.login`
    Password {
        username: ZabbixUsername,
        password: ZabbixPassword,
    },
    /// Pre-issued API token, used as is
    ApiToken(ZabbixAuthToken),
}

/// Everything needed to reach and authenticate against one Zabbix server.
#[derive(Debug, Clone)]
pub struct ZabbixConnection {
    zabbix_url: ZabbixUrl,
    credentials: Credentials,
    accept_invalid_certs: bool,
}

impl ZabbixConnection {
    pub fn new(zabbix_url: ZabbixUrl, credentials: Credentials, accept_invalid_certs: bool) -> Self {
        Self {
            zabbix_url,
            credentials,
            accept_invalid_certs,
        }
    }

    pub fn zabbix_url(&self) -> &ZabbixUrl {
        &self.zabbix_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}
