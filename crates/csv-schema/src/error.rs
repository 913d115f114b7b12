//! Error types for manifest loading and resolution.

use spanner_types::ResolveError;
use std::path::PathBuf;

/// Error type for manifest operations.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Error reading the manifest file
    #[error("Failed to read manifest file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing JSON
    #[error("Failed to parse JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Manifest lists no tables
    #[error("Manifest contains no tables")]
    Empty,

    /// Table entry with an empty name
    #[error("Table #{index} in manifest has an empty table_name")]
    EmptyTableName { index: usize },

    /// Same table listed twice
    #[error("Table '{0}' is listed more than once")]
    DuplicateTable(String),

    /// Table without columns
    #[error("Table '{0}' has no columns")]
    NoColumns(String),

    /// Column entry with an empty name
    #[error("Table '{table}' has a column with an empty column_name")]
    EmptyColumnName { table: String },

    /// Same column listed twice in one table
    #[error("Column '{column}' is listed more than once in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    /// Column type could not be resolved
    #[error("Unsupported type for column '{column}' in table '{table}'")]
    UnsupportedColumn {
        table: String,
        column: String,
        #[source]
        source: ResolveError,
    },

    /// Every column of a table was skipped
    #[error("Table '{0}' has no columns with a supported type")]
    NoResolvableColumns(String),
}
