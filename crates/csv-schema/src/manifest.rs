//! Manifest definitions.
//!
//! The manifest is a list of tables, each naming the CSV files that hold
//! its rows and the columns with their declared types:
//!
//! ```json
//! [
//!   {
//!     "table_name": "singers",
//!     "file_patterns": ["singers_*.csv"],
//!     "columns": [
//!       {"column_name": "SingerId", "type_name": "INT64"},
//!       {"column_name": "Name", "type_name": "STRING(1024)"}
//!     ]
//!   }
//! ]
//! ```
//!
//! The same structure is accepted as YAML.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A column entry: name plus the raw type token declared for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestColumn {
    pub column_name: String,
    pub type_name: String,
}

impl ManifestColumn {
    pub fn new(column_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A table entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestTable {
    /// Target table name
    pub table_name: String,

    /// CSV files (glob patterns) holding the table's rows
    #[serde(default)]
    pub file_patterns: Vec<String>,

    /// Columns in declaration order
    pub columns: Vec<ManifestColumn>,
}

impl ManifestTable {
    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ManifestColumn> {
        self.columns.iter().find(|c| c.column_name == name)
    }
}

/// A full manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Manifest {
    pub tables: Vec<ManifestTable>,
}

impl Manifest {
    pub fn new(tables: Vec<ManifestTable>) -> Self {
        Self { tables }
    }

    /// Load a manifest file.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a manifest from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Get a table by name.
    pub fn get_table(&self, name: &str) -> Option<&ManifestTable> {
        self.tables.iter().find(|t| t.table_name == name)
    }

    /// Check the manifest's structure.
    ///
    /// Table and column names are compared case-insensitively, as Spanner
    /// identifiers are. Column types are not checked here.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.tables.is_empty() {
            return Err(ManifestError::Empty);
        }

        let mut table_names = HashSet::new();
        for (index, table) in self.tables.iter().enumerate() {
            if table.table_name.is_empty() {
                return Err(ManifestError::EmptyTableName { index });
            }
            if !table_names.insert(table.table_name.to_lowercase()) {
                return Err(ManifestError::DuplicateTable(table.table_name.clone()));
            }
            if table.columns.is_empty() {
                return Err(ManifestError::NoColumns(table.table_name.clone()));
            }

            let mut column_names = HashSet::new();
            for column in &table.columns {
                if column.column_name.is_empty() {
                    return Err(ManifestError::EmptyColumnName {
                        table: table.table_name.clone(),
                    });
                }
                if !column_names.insert(column.column_name.to_lowercase()) {
                    return Err(ManifestError::DuplicateColumn {
                        table: table.table_name.clone(),
                        column: column.column_name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
