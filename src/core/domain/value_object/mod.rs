mod macro_name;
pub(crate) mod serde_helpers;
mod zabbix_auth_token;
mod zabbix_password;
mod zabbix_url;
mod zabbix_username;

pub use macro_name::MacroName;
pub use zabbix_auth_token::{TokenKind, ZabbixAuthToken};
pub use zabbix_password::ZabbixPassword;
pub use zabbix_url::ZabbixUrl;
pub use zabbix_username::ZabbixUsername;

// Re-export validation functions for internal use
pub(crate) use zabbix_auth_token::validate_auth_token;
pub(crate) use zabbix_password::validate_password;
pub(crate) use zabbix_username::validate_username;
