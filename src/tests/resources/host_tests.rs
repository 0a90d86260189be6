use crate::{HostError, HostSpec, HostState, InterfaceSpec, ZabbixClient, ZabbixError};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

fn create_test_client(mock_server: &MockServer) -> ZabbixClient {
    ZabbixClient::builder()
        .url(mock_server.uri())
        .unwrap()
        .api_token("testtoken")
        .unwrap()
        .build()
        .unwrap()
}

fn rpc_result(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": 1
    }))
}

fn rpc_method(name: &str) -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(body_partial_json(json!({"method": name, "auth": "testtoken"})))
}

fn srv1_spec() -> HostSpec {
    HostSpec::new("srv1")
        .with_interface(InterfaceSpec::ip("10.0.0.1"))
        .with_group("Linux servers")
        .with_macro("SITE", "eu")
}

async fn request_params(mock_server: &MockServer, method_name: &str) -> Vec<Value> {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| serde_json::from_slice::<Value>(&r.body).unwrap())
        .filter(|body| body["method"] == method_name)
        .map(|body| body["params"].clone())
        .collect()
}

#[tokio::test]
async fn test_host_create() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    rpc_method("hostgroup.get")
        .and(body_partial_json(json!({
            "params": {"output": "extend", "filter": {"name": ["Linux servers"]}}
        })))
        .respond_with(rpc_result(json!([
            {"groupid": "7", "name": "Linux servers", "internal": "0", "flags": "0"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    rpc_method("template.get")
        .respond_with(rpc_result(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    rpc_method("host.create")
        .respond_with(rpc_result(json!({"hostids": ["10055"]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = client.hosts().create(&srv1_spec()).await.unwrap();
    assert_eq!(state.id, "10055");
    assert_eq!(state.host_id, "10055");

    let sent = request_params(&mock_server, "host.create").await;
    assert_eq!(
        sent[0],
        json!({
            "host": "srv1",
            "status": 0,
            "interfaces": [{
                "ip": "10.0.0.1", "dns": "", "main": 1, "port": "10050", "type": 1, "useip": 1
            }],
            "groups": [{"groupid": "7"}],
            "templates": [],
            "macros": [{"macro": "{$SITE}", "value": "eu"}]
        })
    );
}

#[tokio::test]
async fn test_host_create_unknown_group() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    rpc_method("hostgroup.get")
        .respond_with(rpc_result(json!([{"groupid": "1", "name": "g1"}])))
        .mount(&mock_server)
        .await;

    rpc_method("host.create")
        .respond_with(rpc_result(json!({"hostids": ["1"]})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let spec = HostSpec::new("srv1")
        .with_interface(InterfaceSpec::ip("10.0.0.1"))
        .with_group("g1")
        .with_group("g2");
    let result = client.hosts().create(&spec).await;

    assert!(matches!(
        result,
        Err(ZabbixError::Host(HostError::UnknownGroup(name))) if name == "g2"
    ));
}

#[tokio::test]
async fn test_host_read() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    rpc_method("host.get")
        .and(body_partial_json(json!({
            "params": {"hostids": ["10055"], "selectMacros": "extend"}
        })))
        .respond_with(rpc_result(json!([{
            "hostid": "10055",
            "host": "srv1",
            "name": "srv1",
            "status": "0",
            "interfaces": [{
                "interfaceid": "31", "hostid": "10055", "main": "1", "type": "1",
                "useip": "1", "ip": "10.0.0.1", "dns": "", "port": "10050"
            }],
            "macros": [{"hostmacroid": "12", "hostid": "10055", "macro": "{$SITE}", "value": "eu"}]
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    rpc_method("template.get")
        .and(body_partial_json(json!({"params": {"hostids": ["10055"]}})))
        .respond_with(rpc_result(json!([
            {"templateid": "10001", "host": "Template OS Linux", "name": "Template OS Linux"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    rpc_method("hostgroup.get")
        .and(body_partial_json(json!({"params": {"hostids": ["10055"]}})))
        .respond_with(rpc_result(json!([{"groupid": "7", "name": "Linux servers"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = client
        .hosts()
        .read(&HostState::new("10055", srv1_spec()))
        .await
        .unwrap();

    assert_eq!(state.spec.name.as_deref(), Some("srv1"));
    assert!(state.spec.monitored);
    assert!(state.spec.groups.contains("Linux servers"));
    assert!(state.spec.templates.contains("Template OS Linux"));
    assert_eq!(state.spec.macros.get("SITE").map(String::as_str), Some("eu"));
    assert_eq!(state.spec.interfaces[0].interface_id.as_deref(), Some("31"));
}

#[tokio::test]
async fn test_host_read_not_found() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    rpc_method("host.get")
        .respond_with(rpc_result(json!([])))
        .mount(&mock_server)
        .await;

    let result = client
        .hosts()
        .read(&HostState::new("404", srv1_spec()))
        .await;
    assert!(matches!(result, Err(ZabbixError::NotFound(_))));
}

#[tokio::test]
async fn test_host_update_without_interfaces() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    rpc_method("hostgroup.get")
        .respond_with(rpc_result(json!([{"groupid": "7", "name": "Linux servers"}])))
        .mount(&mock_server)
        .await;

    rpc_method("host.update")
        .and(body_partial_json(json!({"params": {"hostid": "10055", "status": 1}})))
        .respond_with(rpc_result(json!({"hostids": ["10055"]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut state = HostState::new("10055", srv1_spec());
    state.spec.monitored = false;
    client.hosts().update(&state).await.unwrap();

    let sent = request_params(&mock_server, "host.update").await;
    assert!(sent[0].get("interfaces").is_none());
    assert_eq!(sent[0]["macros"], json!([{"macro": "{$SITE}", "value": "eu"}]));
}

#[tokio::test]
async fn test_host_update_sends_empty_macro_list() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    rpc_method("hostgroup.get")
        .respond_with(rpc_result(json!([{"groupid": "7", "name": "Linux servers"}])))
        .mount(&mock_server)
        .await;

    rpc_method("host.update")
        .respond_with(rpc_result(json!({"hostids": ["10055"]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut state = HostState::new("10055", srv1_spec());
    state.spec.macros.clear();
    client.hosts().update(&state).await.unwrap();

    let sent = request_params(&mock_server, "host.update").await;
    assert_eq!(sent[0]["macros"], json!([]));
    assert_eq!(sent[0]["templates"], json!([]));
}

#[tokio::test]
async fn test_host_delete() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    rpc_method("host.delete")
        .and(body_partial_json(json!({"params": ["10055"]})))
        .respond_with(rpc_result(json!({"hostids": ["10055"]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .hosts()
        .delete(&HostState::new("10055", srv1_spec()))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remote_rejection_passes_through() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    rpc_method("host.delete")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "error": {
                "code": -32500,
                "message": "Application error.",
                "data": "No permissions to referred object or it does not exist!"
            },
            "id": 1
        })))
        .mount(&mock_server)
        .await;

    let result = client
        .hosts()
        .delete(&HostState::new("10055", srv1_spec()))
        .await;
    match result {
        Err(err @ ZabbixError::Api { code: -32500, .. }) => assert!(err.is_remote()),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_api_version_is_anonymous() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "apiinfo.version"})))
        .respond_with(rpc_result(json!("7.0.3")))
        .mount(&mock_server)
        .await;

    assert_eq!(client.api_version().await.unwrap(), "7.0.3");
    assert!(!client.is_authenticated().await);
}
