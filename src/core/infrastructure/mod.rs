pub mod api_client;
pub(crate) mod json_rpc;
pub mod zabbix_api;
