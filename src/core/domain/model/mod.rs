pub mod client_config;
pub mod host_spec;
pub mod interface_type;
pub mod remote_host;
pub mod zabbix_auth;
pub mod zabbix_connection;
