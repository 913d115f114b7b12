//! Cloud Spanner column types for CSV schema migration.
//!
//! This crate maps the column type tokens found in CSV source metadata
//! (e.g. `"STRING(100)"`, `"numeric"`) to Spanner column types.
//!
//! # Structure
//!
//! - `ddl`: The `TypeDescriptor` model and its column-type rendering
//! - `schema`: The canonical type table and token resolution
//! - `error`: Resolution errors
//!
//! # Example
//!
//! ```rust
//! use spanner_types::{resolve, TypeKind, TypeLength};
//!
//! let ty = resolve("STRING(100)").unwrap();
//! assert_eq!(ty.kind, TypeKind::String);
//! assert_eq!(ty.length, TypeLength::Max);
//! assert_eq!(ty.to_string(), "STRING(MAX)");
//!
//! assert!(resolve("INT32").is_err());
//! ```

pub mod ddl;
pub mod error;
pub mod schema;

pub use ddl::{TypeDescriptor, TypeKind, TypeLength};
pub use error::ResolveError;
pub use schema::{resolve, CanonicalTypeTable, LengthPolicy, TableEntry};
