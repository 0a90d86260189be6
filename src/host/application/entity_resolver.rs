//! Configured group and template names to remote identifiers.

use crate::core::{
    domain::{
        error::{HostError, ZabbixResult},
        model::remote_host::{HostGroup, HostGroupId, Template, TemplateId},
    },
    infrastructure::zabbix_api::ZabbixApi,
};
use std::collections::BTreeSet;
use tracing::debug;

/// A remote object looked up by name.
trait NamedEntity {
    fn lookup_name(&self) -> &str;
}

impl NamedEntity for HostGroup {
    fn lookup_name(&self) -> &str {
        &self.name
    }
}

impl NamedEntity for Template {
    fn lookup_name(&self) -> &str {
        &self.host
    }
}

/// Reports the first requested name (in set order) absent from `found`.
///
/// Only scans when the server returned fewer objects than were asked for.
fn ensure_all_found<E: NamedEntity>(
    requested: &BTreeSet<String>,
    found: &[E],
    missing: fn(String) -> HostError,
) -> Result<(), HostError> {
    if found.len() >= requested.len() {
        return Ok(());
    }
    debug!(
        requested = requested.len(),
        found = found.len(),
        "not all of the requested objects exist on the server"
    );
    for name in requested {
        if !found.iter().any(|e| e.lookup_name() == name.as_str()) {
            return Err(missing(name.clone()));
        }
        debug!(%name, "exists on the server");
    }
    Ok(())
}

/// Resolves host group names with a single `hostgroup.get`.
///
/// # Errors
/// `HostError::UnknownGroup` naming the first missing group, or the remote
/// error of the lookup.
pub async fn resolve_groups<A>(api: &A, names: &BTreeSet<String>) -> ZabbixResult<Vec<HostGroupId>>
where
    A: ZabbixApi + ?Sized,
{
    let requested: Vec<String> = names.iter().cloned().collect();
    debug!(groups = ?requested, "resolving host groups");

    let groups = api.host_groups_by_name(&requested).await?;
    ensure_all_found(names, &groups, HostError::UnknownGroup)?;

    Ok(groups
        .into_iter()
        .map(|g| HostGroupId {
            group_id: g.group_id,
        })
        .collect())
}

/// Resolves template names with a single `template.get`; an empty set
/// resolves to nothing without calling the server.
///
/// # Errors
/// `HostError::UnknownTemplate` naming the first missing template, or the
/// remote error of the lookup.
pub async fn resolve_templates<A>(api: &A, names: &BTreeSet<String>) -> ZabbixResult<Vec<TemplateId>>
where
    A: ZabbixApi + ?Sized,
{
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let requested: Vec<String> = names.iter().cloned().collect();
    debug!(templates = ?requested, "resolving templates");

    let templates = api.templates_by_name(&requested).await?;
    ensure_all_found(names, &templates, HostError::UnknownTemplate)?;

    Ok(templates
        .into_iter()
        .map(|t| TemplateId {
            template_id: t.template_id,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{domain::error::ZabbixError, infrastructure::zabbix_api::MockZabbixApi};

    fn group(id: &str, name: &str) -> HostGroup {
        HostGroup {
            group_id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn template(id: &str, host: &str) -> Template {
        Template {
            template_id: id.to_string(),
            host: host.to_string(),
            name: format!("{} (visible)", host),
        }
    }

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_groups_resolved() {
        let mut api = MockZabbixApi::new();
        api.expect_host_groups_by_name()
            .withf(|requested| requested.len() == 1 && requested[0] == "Linux servers")
            .times(1)
            .returning(|_| Ok(vec![group("7", "Linux servers")]));

        let ids = resolve_groups(&api, &names(&["Linux servers"])).await.unwrap();
        assert_eq!(
            ids,
            vec![HostGroupId {
                group_id: "7".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_missing_group_reported() {
        let mut api = MockZabbixApi::new();
        api.expect_host_groups_by_name()
            .times(1)
            .returning(|_| Ok(vec![group("1", "g1")]));

        let result = resolve_groups(&api, &names(&["g2", "g1"])).await;
        assert!(matches!(
            result,
            Err(ZabbixError::Host(HostError::UnknownGroup(name))) if name == "g2"
        ));
    }

    #[tokio::test]
    async fn test_first_missing_in_lexicographic_order() {
        let mut api = MockZabbixApi::new();
        api.expect_host_groups_by_name()
            .returning(|_| Ok(vec![group("2", "b")]));

        let result = resolve_groups(&api, &names(&["c", "b", "a"])).await;
        assert!(matches!(
            result,
            Err(ZabbixError::Host(HostError::UnknownGroup(name))) if name == "a"
        ));
    }

    #[tokio::test]
    async fn test_group_lookup_error_propagates() {
        let mut api = MockZabbixApi::new();
        api.expect_host_groups_by_name()
            .returning(|_| Err(ZabbixError::Connection("refused".to_string())));

        let result = resolve_groups(&api, &names(&["g1"])).await;
        assert!(matches!(result, Err(ZabbixError::Connection(_))));
    }

    #[tokio::test]
    async fn test_empty_templates_skip_remote_call() {
        let mut api = MockZabbixApi::new();
        api.expect_templates_by_name().times(0);

        let ids = resolve_templates(&api, &BTreeSet::new()).await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_templates_matched_on_technical_name() {
        let mut api = MockZabbixApi::new();
        api.expect_templates_by_name()
            .times(1)
            .returning(|_| Ok(vec![template("10001", "Template OS Linux")]));

        let ids = resolve_templates(&api, &names(&["Template OS Linux", "Template App SSH"]))
            .await;
        assert!(matches!(
            ids,
            Err(ZabbixError::Host(HostError::UnknownTemplate(name))) if name == "Template App SSH"
        ));
    }

    #[tokio::test]
    async fn test_templates_resolved() {
        let mut api = MockZabbixApi::new();
        api.expect_templates_by_name()
            .withf(|requested| requested.len() == 2)
            .returning(|_| Ok(vec![template("10001", "t1"), template("10002", "t2")]));

        let ids = resolve_templates(&api, &names(&["t1", "t2"])).await.unwrap();
        let ids: Vec<&str> = ids.iter().map(|t| t.template_id.as_str()).collect();
        assert_eq!(ids, vec!["10001", "10002"]);
    }
}
