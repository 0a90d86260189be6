use crate::core::domain::{error::HostError, value_object::serde_helpers::deserialize_code};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Host interface kind, sent to the server as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterfaceType {
    #[default]
    Agent,
    Snmp,
    Ipmi,
    Jmx,
}

/// Configuration name to interface kind.
pub const HOST_INTERFACE_TYPES: [(&str, InterfaceType); 4] = [
    ("agent", InterfaceType::Agent),
    ("snmp", InterfaceType::Snmp),
    ("ipmi", InterfaceType::Ipmi),
    ("jmx", InterfaceType::Jmx),
];

impl InterfaceType {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            InterfaceType::Agent => 1,
            InterfaceType::Snmp => 2,
            InterfaceType::Ipmi => 3,
            InterfaceType::Jmx => 4,
        }
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        HOST_INTERFACE_TYPES
            .iter()
            .map(|(_, kind)| *kind)
            .find(|kind| kind.code() == code)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        HOST_INTERFACE_TYPES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("agent")
    }
}

impl FromStr for InterfaceType {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HOST_INTERFACE_TYPES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| HostError::InvalidInterfaceType(s.to_string()))
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for InterfaceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for InterfaceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = deserialize_code(deserializer)?;
        InterfaceType::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown interface type {}", code)))
    }
}
