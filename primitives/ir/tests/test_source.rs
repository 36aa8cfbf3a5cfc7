//! Tests for reading declarations through `DeclarationSource`

use std::fs;

use tempfile::NamedTempFile;
use wirecode_ir::*;

const PROTOCOL: &str = r#"{
    "version": "1.8",
    "services": [
        {
            "name": "CPCountDownLatch",
            "id": 1,
            "namespace": "Hazelcast.Client.Protocol.Codec",
            "operations": [
                { "name": "trySetCount", "kind": "request", "id": 1 },
                { "name": "await", "id": 2 }
            ]
        },
        { "name": "Broken", "id": -4 },
        { "id": 9 },
        { "name": "Map", "id": 2 }
    ]
}"#;

#[test]
fn test_parse_isolates_malformed_services() {
    let loaded = parse_declarations(PROTOCOL).expect("document should parse");

    assert_eq!(loaded.version, "1.8");
    assert_eq!(loaded.services.len(), 4);

    let (set, failures) = loaded.into_parts();
    let valid: Vec<&str> = set.services().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(valid, vec!["CPCountDownLatch", "Map"]);

    assert_eq!(failures.len(), 2);
    match &failures[0] {
        DeclarationError::Malformed { index, label, .. } => {
            assert_eq!(*index, 1);
            assert_eq!(label, "Broken");
        }
        other => panic!("Expected Malformed error, got {:?}", other),
    }
    match &failures[1] {
        DeclarationError::Malformed { index, label, .. } => {
            assert_eq!(*index, 2);
            assert_eq!(label, "<unnamed>");
        }
        other => panic!("Expected Malformed error, got {:?}", other),
    }
}

#[test]
fn test_into_parts_keeps_order() {
    let loaded = parse_declarations(PROTOCOL).expect("document should parse");
    let (set, failures) = loaded.into_parts();

    assert_eq!(set.version(), "1.8");
    assert_eq!(set.services().len(), 2);
    assert_eq!(set.services()[0].name, "CPCountDownLatch");
    assert_eq!(set.services()[1].name, "Map");
    assert_eq!(failures.len(), 2);
}

#[test]
fn test_parse_rejects_non_json() {
    let result = parse_declarations("not json at all");
    assert!(matches!(result, Err(DeclarationError::Json(_))));
}

#[test]
fn test_parse_rejects_missing_services() {
    let result = parse_declarations(r#"{ "version": "1.8" }"#);
    assert!(matches!(result, Err(DeclarationError::Json(_))));
}

#[test]
fn test_json_file_source() {
    let file = NamedTempFile::new().expect("Failed to create temporary file");
    fs::write(&file, PROTOCOL).expect("Failed to write declarations");

    let source = JsonFileSource::new(file.path());
    assert_eq!(source.describe(), file.path().display().to_string());

    let (set, failures) = source.load().expect("file should load").into_parts();
    assert_eq!(set.services().len(), 2);
    assert_eq!(failures.len(), 2);
}

#[test]
fn test_json_file_source_missing_file() {
    let source = JsonFileSource::new("does/not/exist.json");
    assert!(matches!(source.load(), Err(DeclarationError::Io(_))));
}

#[test]
fn test_declaration_set_is_a_source() {
    let set = DeclarationSet::new(vec![
        ServiceDeclaration::new("A", 1),
        ServiceDeclaration::new("B", 2),
    ]);

    let (loaded, failures) = set.load().expect("in-memory sources never fail").into_parts();
    assert!(failures.is_empty());
    assert_eq!(loaded.services(), set.services());
    assert!(set.describe().contains("2 services"));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("protocol.json");
    let set = DeclarationSet::new_with_version(
        "2.0".to_string(),
        vec![ServiceDeclaration::new("Queue", 3)
            .with_operation(OperationDeclaration::request("offer", 1))
            .with_operation(OperationDeclaration::event("itemAdded", None))],
    );
    let json = serde_json::to_string_pretty(&set).expect("Failed to serialize declarations");
    fs::write(&path, json).expect("Failed to write declarations");

    let (loaded, failures) =
        JsonFileSource::new(&path).load().expect("written file should load").into_parts();
    assert!(failures.is_empty());
    assert_eq!(loaded.version(), "2.0");
    assert_eq!(loaded.services(), set.services());
}
