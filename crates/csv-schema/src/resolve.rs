//! Spanner column type resolution for whole manifests.

use crate::error::ManifestError;
use crate::manifest::Manifest;
use serde::{Serialize, Serializer};
use spanner_types::{ResolveError, TypeDescriptor};
use std::fmt;
use tracing::{debug, info, warn};

/// What to do with a column whose declared type is not a Spanner type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Fail the whole manifest.
    #[default]
    Abort,
    /// Leave the column out and report it.
    Skip,
}

/// A column with its resolved Spanner type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedColumn {
    pub column_name: String,
    /// The type token as declared in the manifest
    pub type_name: String,
    pub spanner_type: TypeDescriptor,
}

impl fmt::Display for ResolvedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column_name, self.spanner_type)
    }
}

/// A table whose columns all resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTable {
    pub table_name: String,
    pub file_patterns: Vec<String>,
    pub columns: Vec<ResolvedColumn>,
}

impl ResolvedTable {
    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ResolvedColumn> {
        self.columns.iter().find(|c| c.column_name == name)
    }
}

/// A column left out under [`UnsupportedPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedColumn {
    pub table_name: String,
    pub column_name: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: ResolveError,
}

/// Result of resolving a manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedSchema {
    pub tables: Vec<ResolvedTable>,
    pub skipped: Vec<SkippedColumn>,
}

impl ResolvedSchema {
    /// Get a table by name.
    pub fn get_table(&self, name: &str) -> Option<&ResolvedTable> {
        self.tables.iter().find(|t| t.table_name == name)
    }
}

fn serialize_display<T: fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Validate a manifest and resolve the declared type of every column.
///
/// Column order within each table is preserved. Under
/// [`UnsupportedPolicy::Abort`] the first unsupported column fails the call;
/// under [`UnsupportedPolicy::Skip`] it is recorded in
/// [`ResolvedSchema::skipped`] instead, as long as the table keeps at least
/// one column.
pub fn resolve_manifest(
    manifest: &Manifest,
    policy: UnsupportedPolicy,
) -> Result<ResolvedSchema, ManifestError> {
    manifest.validate()?;

    let mut schema = ResolvedSchema::default();
    for table in &manifest.tables {
        let mut columns = Vec::with_capacity(table.columns.len());

        for column in &table.columns {
            match spanner_types::resolve(&column.type_name) {
                Ok(spanner_type) => columns.push(ResolvedColumn {
                    column_name: column.column_name.clone(),
                    type_name: column.type_name.clone(),
                    spanner_type,
                }),
                Err(error) => match policy {
                    UnsupportedPolicy::Abort => {
                        return Err(ManifestError::UnsupportedColumn {
                            table: table.table_name.clone(),
                            column: column.column_name.clone(),
                            source: error,
                        });
                    }
                    UnsupportedPolicy::Skip => {
                        warn!(
                            "Skipping column '{}' of table '{}': {}",
                            column.column_name, table.table_name, error
                        );
                        schema.skipped.push(SkippedColumn {
                            table_name: table.table_name.clone(),
                            column_name: column.column_name.clone(),
                            error,
                        });
                    }
                },
            }
        }

        if columns.is_empty() {
            return Err(ManifestError::NoResolvableColumns(table.table_name.clone()));
        }

        debug!(
            "Resolved {} columns for table '{}'",
            columns.len(),
            table.table_name
        );
        schema.tables.push(ResolvedTable {
            table_name: table.table_name.clone(),
            file_patterns: table.file_patterns.clone(),
            columns,
        });
    }

    info!(
        "Resolved {} tables ({} columns skipped)",
        schema.tables.len(),
        schema.skipped.len()
    );
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ManifestColumn, ManifestTable};
    use spanner_types::{TypeKind, TypeLength};

    fn manifest(columns: &[(&str, &str)]) -> Manifest {
        Manifest::new(vec![ManifestTable {
            table_name: "singers".to_string(),
            file_patterns: vec!["singers.csv".to_string()],
            columns: columns
                .iter()
                .map(|(name, ty)| ManifestColumn::new(*name, *ty))
                .collect(),
        }])
    }

    #[test]
    fn test_resolve_all_columns() {
        let m = manifest(&[
            ("SingerId", "INT64"),
            ("Name", "string(1024)"),
            ("Photo", "BYTES()"),
            ("Active", "BoOl"),
        ]);
        let schema = resolve_manifest(&m, UnsupportedPolicy::Abort).unwrap();

        assert!(schema.skipped.is_empty());
        let singers = schema.get_table("singers").unwrap();
        assert_eq!(singers.file_patterns, vec!["singers.csv"]);

        let names: Vec<&str> = singers
            .columns
            .iter()
            .map(|c| c.column_name.as_str())
            .collect();
        assert_eq!(names, vec!["SingerId", "Name", "Photo", "Active"]);

        let name = singers.get_column("Name").unwrap();
        assert_eq!(name.type_name, "string(1024)");
        assert_eq!(
            name.spanner_type,
            TypeDescriptor::new(TypeKind::String, TypeLength::Max)
        );
        assert_eq!(name.to_string(), "Name STRING(MAX)");
        assert_eq!(singers.get_column("Active").unwrap().to_string(), "Active BOOL");
    }

    #[test]
    fn test_abort_on_unsupported() {
        let m = manifest(&[("SingerId", "INT64"), ("Age", "INTEGER")]);
        match resolve_manifest(&m, UnsupportedPolicy::Abort) {
            Err(ManifestError::UnsupportedColumn {
                table,
                column,
                source,
            }) => {
                assert_eq!(table, "singers");
                assert_eq!(column, "Age");
                assert_eq!(source.token(), "INTEGER");
            }
            other => panic!("expected UnsupportedColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_skip_unsupported() {
        let m = manifest(&[("SingerId", "INT64"), ("Age", "INT32"), ("Score", "FLOAT")]);
        let schema = resolve_manifest(&m, UnsupportedPolicy::Skip).unwrap();

        let singers = schema.get_table("singers").unwrap();
        assert_eq!(singers.columns.len(), 1);
        assert_eq!(schema.skipped.len(), 2);
        assert_eq!(schema.skipped[0].column_name, "Age");
        assert_eq!(schema.skipped[0].error.token(), "INT32");
        assert_eq!(schema.skipped[1].column_name, "Score");
    }

    #[test]
    fn test_skip_leaving_no_columns() {
        let m = manifest(&[("Age", "INT32")]);
        assert!(matches!(
            resolve_manifest(&m, UnsupportedPolicy::Skip),
            Err(ManifestError::NoResolvableColumns(_))
        ));
    }

    #[test]
    fn test_invalid_manifest_is_rejected_before_resolution() {
        let m = manifest(&[("Id", "INT64"), ("id", "INT32")]);
        assert!(matches!(
            resolve_manifest(&m, UnsupportedPolicy::Skip),
            Err(ManifestError::DuplicateColumn { .. })
        ));
    }

    #[test]
    fn test_serialize_schema() {
        let m = manifest(&[("SingerId", "INT64"), ("Age", "INT32")]);
        let schema = resolve_manifest(&m, UnsupportedPolicy::Skip).unwrap();
        let json = serde_json::to_value(&schema).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "tables": [{
                    "table_name": "singers",
                    "file_patterns": ["singers.csv"],
                    "columns": [{
                        "column_name": "SingerId",
                        "type_name": "INT64",
                        "spanner_type": {"kind": "INT64", "length": null}
                    }]
                }],
                "skipped": [{
                    "table_name": "singers",
                    "column_name": "Age",
                    "error": "INT32 is not a valid Spanner column type"
                }]
            })
        );
    }

    #[test]
    fn test_default_policy_is_abort() {
        assert_eq!(UnsupportedPolicy::default(), UnsupportedPolicy::Abort);
    }
}
