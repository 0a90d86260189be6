use crate::core::domain::error::HostError;

const PREFIX: &str = "{$";
const SUFFIX: &str = "}";

/// A user macro name in its plain form (`SITE`), as exposed in host
/// descriptions. The server stores it wrapped as `{$SITE}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MacroName(String);

impl MacroName {
    /// Wraps a plain name. No validation: the server rejects malformed names.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Parses a server-side name (`{$SITE}`) into its plain form.
    ///
    /// The prefix must open the name, the suffix must close it, and the
    /// interior must be a single non-empty segment without further
    /// delimiters.
    pub fn decode(raw: &str) -> Result<Self, HostError> {
        let invalid = || HostError::InvalidMacroName(raw.to_string());
        let inner = raw
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .ok_or_else(invalid)?;
        if inner.is_empty() || inner.contains(PREFIX) || inner.contains(SUFFIX) {
            return Err(invalid());
        }
        Ok(Self(inner.to_string()))
    }

    /// Returns the server-side form, `{$NAME}`.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}{}{}", PREFIX, self.0, SUFFIX)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(MacroName::new("SITE").encode(), "{$SITE}");
    }

    #[test]
    fn test_decode_valid() {
        assert_eq!(MacroName::decode("{$SITE}").unwrap().as_str(), "SITE");
        assert_eq!(
            MacroName::decode("{$SNMP_COMMUNITY:\"ctx\"}").unwrap().as_str(),
            "SNMP_COMMUNITY:\"ctx\""
        );
    }

    #[test]
    fn test_decode_invalid() {
        let cases = ["FOO", "{$FOO", "$FOO}", "{$}", "x{$FOO}", "{$FOO}x", "{${$FOO}}"];
        for raw in cases {
            assert_eq!(
                MacroName::decode(raw),
                Err(HostError::InvalidMacroName(raw.to_string())),
                "{} should be rejected",
                raw
            );
        }
    }
}
