//! Unit tests for the declaration data model

use types::Lang;
use wirecode_ir::*;

fn latch() -> ServiceDeclaration {
    ServiceDeclaration::new("CPCountDownLatch", 0x1)
        .with_namespace("Hazelcast.Client.Protocol.Codec")
        .with_since("1.8")
        .with_operation(OperationDeclaration::request("trySetCount", 1))
        .with_operation(OperationDeclaration::request("await", 2))
        .with_operation(OperationDeclaration::request("countDown", 3))
        .with_operation(OperationDeclaration::request("getCount", 4))
        .with_operation(OperationDeclaration::request("getRound", 5))
}

#[test]
fn test_declaration_set_accessors() {
    let set = DeclarationSet::new_with_version(
        "1.8".to_string(),
        vec![latch(), ServiceDeclaration::new("Map", 0x2)],
    );

    assert_eq!(set.version(), "1.8");
    assert_eq!(set.services().len(), 2);
    assert_eq!(set.operation_count(), 5);
    assert_eq!(set.services()[1].name, "Map");
    assert_eq!(set.services()[1].id, 0x2);
}

#[test]
fn test_service_builders() {
    let service = latch().with_override(Lang::Cpp, "hazelcast::client::protocol::codec");

    assert_eq!(service.namespace.as_deref(), Some("Hazelcast.Client.Protocol.Codec"));
    assert_eq!(
        service.namespaces.get(&Lang::Cpp).map(String::as_str),
        Some("hazelcast::client::protocol::codec")
    );
    assert_eq!(service.since.as_deref(), Some("1.8"));
    let names: Vec<&str> = service.operations.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["trySetCount", "await", "countDown", "getCount", "getRound"]);
}

#[test]
fn test_operation_constructors() {
    let request = OperationDeclaration::request("trySetCount", 1);
    assert!(request.is_request());
    assert_eq!(request.id, Some(1));

    let unrouted = OperationDeclaration::request_without_id("lock");
    assert!(unrouted.is_request());
    assert_eq!(unrouted.id, None);

    let event = OperationDeclaration::event("itemAdded", Some(7));
    assert!(!event.is_request());
    assert_eq!(event.kind, OperationKind::Event);
}

#[test]
fn test_operation_kind_defaults_to_request() {
    let op: OperationDeclaration =
        serde_json::from_str(r#"{ "name": "getRound", "id": 5 }"#).expect("valid operation");
    assert_eq!(op.kind, OperationKind::Request);
    assert_eq!(op.id, Some(5));

    let event: OperationDeclaration =
        serde_json::from_str(r#"{ "name": "onChange", "kind": "event" }"#).expect("valid event");
    assert_eq!(event.kind, OperationKind::Event);
    assert_eq!(event.id, None);
}

#[test]
fn test_service_namespace_table_uses_lang_tags() {
    let json = r#"{
        "name": "Queue",
        "id": 3,
        "namespaces": { "cpp": "hazelcast::client", "py": "hazelcast.protocol" }
    }"#;
    let service: ServiceDeclaration = serde_json::from_str(json).expect("valid service");

    assert_eq!(service.namespaces.len(), 2);
    assert_eq!(service.namespaces.get(&Lang::Python).map(String::as_str), Some("hazelcast.protocol"));
    assert!(service.namespace.is_none());
    assert!(service.operations.is_empty());
}

#[test]
fn test_serialization_skips_empty_overrides() {
    let set = DeclarationSet::new_with_version("1.8".to_string(), vec![latch()]);

    let written = serde_json::to_string_pretty(&set).expect("Failed to serialize declarations");
    assert!(written.contains("\"CPCountDownLatch\""));
    assert!(written.contains("\"trySetCount\""));
    // Empty override tables are not serialized
    assert!(!written.contains("namespaces"));
}
