use crate::{
    core::{
        domain::{
            error::{ValidationError, ZabbixResult},
            model::{
                client_config::PrimaryInterfaceMode,
                host_spec::{HostSpec, HostState},
                remote_host::{HostStatus, RemoteHost},
            },
        },
        infrastructure::zabbix_api::ZabbixApi,
    },
    host::application::{
        entity_resolver::{resolve_groups, resolve_templates},
        interface_translator::{assign_interface_ids, translate_interfaces},
        macro_codec::{decode_macros, encode_macros},
    },
};
use tracing::{debug, info};

/// Create/read/update/delete of one host against a Zabbix server.
///
/// Every operation awaits its remote calls one after the other and aborts on
/// the first failure. Local validation and interface translation run before
/// any remote call; group and template resolution are the only reads issued
/// before a create or update.
pub struct HostService<'a, A: ZabbixApi + ?Sized> {
    api: &'a A,
    primary_interface: PrimaryInterfaceMode,
}

impl<'a, A: ZabbixApi + ?Sized> HostService<'a, A> {
    pub fn new(api: &'a A, primary_interface: PrimaryInterfaceMode) -> Self {
        Self {
            api,
            primary_interface,
        }
    }

    /// Creates the host and returns its state keyed by the new identifier.
    ///
    /// # Errors
    /// Validation, translation and resolution errors before anything is
    /// written; the remote error if `host.create` fails.
    pub async fn create(&self, spec: &HostSpec) -> ZabbixResult<HostState> {
        if spec.interfaces.is_empty() {
            return Err(ValidationError::Field {
                field: "interfaces".to_string(),
                message: "At least one interface is required".to_string(),
            }
            .into());
        }

        let host = self.build_remote_host(spec).await?;
        let host_id = self.api.host_create(&host).await?;
        info!(%host_id, host = %spec.host, "created host");

        Ok(HostState::new(host_id, spec.clone()))
    }

    /// Refreshes the state from the server.
    ///
    /// Interfaces are kept as configured; only their computed
    /// `interface_id` is filled in.
    ///
    /// # Errors
    /// `ZabbixError::NotFound` if the host is gone, `HostError::InvalidMacroName`
    /// for a macro the adapter cannot represent, or any remote error.
    pub async fn read(&self, state: &HostState) -> ZabbixResult<HostState> {
        debug!(host_id = %state.host_id, "reading host");
        let remote = self.api.host_by_id(&state.host_id).await?;
        debug!(name = ?remote.name, "host name");

        let mut spec = state.spec.clone();
        spec.host = remote.host;
        if remote.name.is_some() {
            spec.name = remote.name;
        }
        spec.monitored = remote.status.is_monitored();

        let templates = self.api.templates_by_host_id(&state.id).await?;
        spec.templates = templates.into_iter().map(|t| t.host).collect();

        let groups = self.api.host_groups_by_host_id(&state.id).await?;
        spec.groups = groups.into_iter().map(|g| g.name).collect();

        spec.macros = decode_macros(&remote.macros)?;

        assign_interface_ids(
            &mut spec.interfaces,
            remote.interfaces.as_deref().unwrap_or_default(),
        );

        Ok(HostState {
            id: state.id.clone(),
            host_id: state.host_id.clone(),
            spec,
        })
    }

    /// Pushes the desired name, status, groups, templates and macros.
    ///
    /// Interfaces are never part of the payload: the server cannot reliably
    /// change them in place, so interface changes replace the host upstream.
    pub async fn update(&self, state: &HostState) -> ZabbixResult<()> {
        let mut host = self.build_remote_host(&state.spec).await?;
        host.host_id = Some(state.id.clone());
        host.interfaces = None;

        self.api.host_update(&host).await?;
        info!(host_id = %state.id, "updated host");
        Ok(())
    }

    /// Deletes the host. Groups and templates are shared and left alone.
    pub async fn delete(&self, state: &HostState) -> ZabbixResult<()> {
        self.api.hosts_delete(std::slice::from_ref(&state.id)).await?;
        info!(host_id = %state.id, "deleted host");
        Ok(())
    }

    async fn build_remote_host(&self, spec: &HostSpec) -> ZabbixResult<RemoteHost> {
        spec.validate()?;
        let interfaces = translate_interfaces(&spec.interfaces, self.primary_interface)?;
        let groups = resolve_groups(self.api, &spec.groups).await?;
        let templates = resolve_templates(self.api, &spec.templates).await?;

        Ok(RemoteHost {
            host_id: None,
            host: spec.host.clone(),
            name: spec.name.clone(),
            status: HostStatus::from_monitored(spec.monitored),
            interfaces: Some(interfaces),
            groups,
            templates,
            macros: encode_macros(&spec.macros),
        })
    }
}
