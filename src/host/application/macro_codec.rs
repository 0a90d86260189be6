//! Flat macro map to and from the server's `{$NAME}` records.

use crate::core::domain::{
    error::HostError, model::remote_host::UserMacro, value_object::MacroName,
};
use std::collections::BTreeMap;

/// One record per entry. An empty map yields an empty list, never a null:
/// `host.update` treats a missing `macros` member as "leave as is".
pub fn encode_macros(macros: &BTreeMap<String, String>) -> Vec<UserMacro> {
    macros
        .iter()
        .map(|(name, value)| UserMacro {
            name: MacroName::new(name.as_str()).encode(),
            value: value.clone(),
        })
        .collect()
}

/// Strips the delimiters from every remote macro name.
pub fn decode_macros(macros: &[UserMacro]) -> Result<BTreeMap<String, String>, HostError> {
    macros
        .iter()
        .map(|m| -> Result<(String, String), HostError> {
            Ok((MacroName::decode(&m.name)?.into_inner(), m.value.clone()))
        })
        .collect()
}
