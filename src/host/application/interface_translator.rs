//! Configured interfaces to wire interface records.

use crate::core::domain::{
    error::HostError,
    model::{
        client_config::PrimaryInterfaceMode, host_spec::InterfaceSpec,
        interface_type::InterfaceType, remote_host::HostInterface,
    },
};

/// Translates configured interfaces, keeping their order.
///
/// Pure: no remote calls. Fails on the first interface with an unknown kind
/// or without any address.
pub fn translate_interfaces(
    specs: &[InterfaceSpec],
    mode: PrimaryInterfaceMode,
) -> Result<Vec<HostInterface>, HostError> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| translate_interface(index, spec, mode))
        .collect()
}

fn translate_interface(
    index: usize,
    spec: &InterfaceSpec,
    mode: PrimaryInterfaceMode,
) -> Result<HostInterface, HostError> {
    let kind: InterfaceType = spec.kind.parse()?;

    if spec.ip.is_empty() && spec.dns.is_empty() {
        return Err(HostError::MissingAddress { index });
    }

    let main = match mode {
        PrimaryInterfaceMode::Strict => spec.main,
        PrimaryInterfaceMode::Legacy => true,
    };

    Ok(HostInterface {
        interface_id: None,
        ip: spec.ip.clone(),
        dns: spec.dns.clone(),
        main,
        port: spec.port.clone(),
        kind,
        use_ip: !spec.ip.is_empty(),
    })
}

/// Fills `interface_id` of each configured interface from the server's list.
///
/// Interfaces are matched on kind, ip, dns and port; each remote interface
/// is used at most once. An interface without a match ends up with no id.
/// Configured interfaces are never added or removed.
pub fn assign_interface_ids(specs: &mut [InterfaceSpec], remote: &[HostInterface]) {
    let mut taken = vec![false; remote.len()];
    for spec in specs.iter_mut() {
        spec.interface_id = None;
        let Ok(kind) = spec.kind.parse::<InterfaceType>() else {
            continue;
        };
        let found = remote.iter().enumerate().position(|(i, r)| {
            !taken[i] && r.kind == kind && r.ip == spec.ip && r.dns == spec.dns && r.port == spec.port
        });
        if let Some(i) = found {
            taken[i] = true;
            spec.interface_id = remote[i].interface_id.clone();
        }
    }
}
