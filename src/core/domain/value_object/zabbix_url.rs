use crate::core::domain::error::ValidationError;
use url::Url;

const API_ENDPOINT: &str = "api_jsonrpc.php";
const MAX_URL_LENGTH: usize = 2083;

/// A validated Zabbix JSON-RPC endpoint URL.
///
/// Accepts either the frontend base (`https://zabbix.example.com/zabbix`) or
/// the full endpoint (`https://zabbix.example.com/zabbix/api_jsonrpc.php`);
/// the stored value always points at `api_jsonrpc.php`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZabbixUrl(String);

impl ZabbixUrl {
    /// Validates and normalises a server URL.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_url(raw)?;
        let mut url = Url::parse(raw)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        if !url.path().ends_with(API_ENDPOINT) {
            let path = format!("{}/{}", url.path().trim_end_matches('/'), API_ENDPOINT);
            url.set_path(&path);
        }
        Ok(Self(url.to_string()))
    }

    /// Returns the endpoint URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a server URL: http(s) scheme, a host, bounded length.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }
    let parsed =
        Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be one of: http, https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(ValidationError::Format("URL must contain a host".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_appends_endpoint() {
        let url = ZabbixUrl::parse("https://zabbix.example.com/zabbix/").unwrap();
        assert_eq!(url.as_str(), "https://zabbix.example.com/zabbix/api_jsonrpc.php");

        let url = ZabbixUrl::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api_jsonrpc.php");
    }

    #[test]
    fn test_parse_keeps_full_endpoint() {
        let url = ZabbixUrl::parse("https://zabbix.example.com/api_jsonrpc.php").unwrap();
        assert_eq!(url.as_str(), "https://zabbix.example.com/api_jsonrpc.php");
    }

    #[test]
    fn test_validate_url_invalid() {
        assert!(validate_url("").is_err());
        assert!(validate_url("zabbix.example.com").is_err()); // no scheme
        assert!(validate_url("ftp://zabbix.example.com").is_err());
        assert!(validate_url(&format!("https://{}.com", "a".repeat(2100))).is_err());
    }
}
