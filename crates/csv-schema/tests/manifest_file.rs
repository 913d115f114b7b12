//! Tests for loading manifests from disk

use csv_schema::{resolve_manifest, Manifest, ManifestError, UnsupportedPolicy};
use spanner_types::{TypeKind, TypeLength};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_manifest(suffix: &str, content: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_json_manifest_file() {
    let file = write_manifest(
        ".json",
        r#"[
  {
    "table_name": "events",
    "file_patterns": ["events/*.csv"],
    "columns": [
      {"column_name": "EventId", "type_name": "STRING(36)"},
      {"column_name": "OccurredAt", "type_name": "TIMESTAMP"},
      {"column_name": "Payload", "type_name": "json"},
      {"column_name": "Amount", "type_name": "Numeric"}
    ]
  }
]"#,
    );

    let manifest = Manifest::from_file(file.path()).unwrap();
    let schema = resolve_manifest(&manifest, UnsupportedPolicy::Abort).unwrap();

    let events = schema.get_table("events").unwrap();
    assert_eq!(events.file_patterns, vec!["events/*.csv"]);

    let kinds: Vec<TypeKind> = events.columns.iter().map(|c| c.spanner_type.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TypeKind::String,
            TypeKind::Timestamp,
            TypeKind::Json,
            TypeKind::Numeric
        ]
    );
    assert_eq!(
        events.get_column("EventId").unwrap().spanner_type.length,
        TypeLength::Max
    );
}

#[test]
fn test_load_yaml_manifest_file() {
    for suffix in [".yaml", ".yml", ".YML"] {
        let file = write_manifest(
            suffix,
            r#"
- table_name: users
  columns:
    - column_name: id
      type_name: INT64
    - column_name: avatar
      type_name: BYTES(1048576)
"#,
        );

        let manifest = Manifest::from_file(file.path()).unwrap();
        let schema = resolve_manifest(&manifest, UnsupportedPolicy::Abort).unwrap();
        let users = schema.get_table("users").unwrap();
        assert_eq!(users.get_column("avatar").unwrap().to_string(), "avatar BYTES(MAX)");
    }
}

#[test]
fn test_yaml_content_in_json_file_fails() {
    let file = write_manifest(".json", "- table_name: users\n  columns: []\n");
    assert!(matches!(
        Manifest::from_file(file.path()),
        Err(ManifestError::Json(_))
    ));
}

#[test]
fn test_missing_manifest_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = Manifest::from_file(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_unsupported_column_in_file() {
    let file = write_manifest(
        ".json",
        r#"[{"table_name": "t", "columns": [
              {"column_name": "a", "type_name": "INT64"},
              {"column_name": "b", "type_name": "BOOLEAN"}]}]"#,
    );
    let manifest = Manifest::from_file(file.path()).unwrap();

    let err = resolve_manifest(&manifest, UnsupportedPolicy::Abort).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported type for column 'b' in table 't'"
    );
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(
        source.to_string(),
        "BOOLEAN is not a valid Spanner column type"
    );

    let schema = resolve_manifest(&manifest, UnsupportedPolicy::Skip).unwrap();
    assert_eq!(schema.tables[0].columns.len(), 1);
    assert_eq!(schema.skipped[0].column_name, "b");
}
