use crate::core::domain::value_object::ZabbixAuthToken;

/// Authentication state of a client.
#[derive(Debug, Clone)]
pub struct ZabbixAuth {
    token: ZabbixAuthToken,
}

impl ZabbixAuth {
    pub fn new(token: ZabbixAuthToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &ZabbixAuthToken {
        &self.token
    }
}
