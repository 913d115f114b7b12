//! CSV source manifests for Spanner schema migration.
//!
//! A manifest lists the tables to create from CSV files, the file patterns
//! holding each table's rows and the declared type of every column. This
//! crate loads manifests and resolves the declared column types to Spanner
//! column types.
//!
//! # Example
//!
//! ```rust
//! use csv_schema::{resolve_manifest, Manifest, UnsupportedPolicy};
//!
//! let manifest = Manifest::from_json(
//!     r#"[{"table_name": "singers",
//!          "file_patterns": ["singers.csv"],
//!          "columns": [{"column_name": "SingerId", "type_name": "INT64"},
//!                      {"column_name": "Name", "type_name": "STRING(1024)"}]}]"#,
//! )
//! .unwrap();
//!
//! let schema = resolve_manifest(&manifest, UnsupportedPolicy::Abort).unwrap();
//! assert_eq!(schema.tables[0].columns[1].spanner_type.to_string(), "STRING(MAX)");
//! ```

pub mod error;
pub mod manifest;
pub mod resolve;

pub use error::ManifestError;
pub use manifest::{Manifest, ManifestColumn, ManifestTable};
pub use resolve::{
    resolve_manifest, ResolvedColumn, ResolvedSchema, ResolvedTable, SkippedColumn,
    UnsupportedPolicy,
};
