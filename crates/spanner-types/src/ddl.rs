//! Spanner column type model.
//!
//! A `TypeDescriptor` is what the resolver hands to the DDL generator: a
//! closed `TypeKind` plus a `TypeLength`. Its `Display` output is the column
//! type as it appears in a Spanner `CREATE TABLE` statement, e.g.
//! `STRING(MAX)` or `INT64`.

use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical Spanner column type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TypeKind {
    /// Boolean
    Bool,
    /// Variable-length binary data
    Bytes,
    /// Calendar date
    Date,
    /// 64-bit IEEE 754 floating point
    Float64,
    /// 64-bit signed integer
    Int64,
    /// Exact decimal
    Numeric,
    /// Variable-length Unicode character string
    String,
    /// Point in time with nanosecond precision
    Timestamp,
    /// JSON document
    Json,
}

impl TypeKind {
    /// Every kind, in the order Spanner documents them.
    pub const ALL: [TypeKind; 9] = [
        TypeKind::Bool,
        TypeKind::Bytes,
        TypeKind::Date,
        TypeKind::Float64,
        TypeKind::Int64,
        TypeKind::Numeric,
        TypeKind::String,
        TypeKind::Timestamp,
        TypeKind::Json,
    ];

    /// The canonical upper-case type name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Bytes => "BYTES",
            Self::Date => "DATE",
            Self::Float64 => "FLOAT64",
            Self::Int64 => "INT64",
            Self::Numeric => "NUMERIC",
            Self::String => "STRING",
            Self::Timestamp => "TIMESTAMP",
            Self::Json => "JSON",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Length attribute of a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeLength {
    /// The kind has no length concept.
    Unset,
    /// The maximum length the target supports (`MAX`).
    Max,
    /// An explicit positive length.
    Fixed(u64),
}

// Serialized as `null`, `"MAX"` or the length itself.
impl Serialize for TypeLength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::Max => serializer.serialize_str("MAX"),
            Self::Fixed(n) => serializer.serialize_u64(*n),
        }
    }
}

/// A resolved Spanner column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    pub length: TypeLength,
}

impl TypeDescriptor {
    /// Create a new descriptor.
    pub fn new(kind: TypeKind, length: TypeLength) -> Self {
        Self { kind, length }
    }

    /// Whether this descriptor uses the `MAX` length sentinel.
    pub fn is_max_length(&self) -> bool {
        self.length == TypeLength::Max
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.length {
            TypeLength::Unset => write!(f, "{}", self.kind),
            TypeLength::Max => write!(f, "{}(MAX)", self.kind),
            TypeLength::Fixed(n) => write!(f, "{}({n})", self.kind),
        }
    }
}
