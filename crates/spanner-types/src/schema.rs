//! CSV column type token resolution.
//!
//! This module maps the column type tokens declared for CSV sources to
//! Spanner column types. A token is a type name optionally followed by a
//! parenthesized length qualifier (`STRING`, `STRING(100)`, `BYTES()`).
//! Only the exact Spanner type names are accepted; there is no alias
//! inference, so `INTEGER` or `BOOLEAN` are rejected rather than guessed.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::ddl::{TypeDescriptor, TypeKind, TypeLength};
use crate::error::ResolveError;

/// How a kind's length attribute is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPolicy {
    /// The kind has no length.
    NotApplicable,
    /// Always the target's maximum length, whatever the source declared.
    Max,
    /// Always the given length.
    Fixed(u64),
}

impl LengthPolicy {
    /// The length a descriptor built under this policy carries.
    pub fn length(&self) -> TypeLength {
        match self {
            Self::NotApplicable => TypeLength::Unset,
            Self::Max => TypeLength::Max,
            Self::Fixed(n) => TypeLength::Fixed(*n),
        }
    }
}

/// A canonical type table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub kind: TypeKind,
    pub length_policy: LengthPolicy,
}

impl TableEntry {
    fn new(kind: TypeKind, length_policy: LengthPolicy) -> Self {
        Self {
            kind,
            length_policy,
        }
    }

    /// Build the descriptor for this entry.
    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new(self.kind, self.length_policy.length())
    }
}

/// Mapping from normalized (upper-case, qualifier-stripped) type names to
/// table entries.
#[derive(Debug)]
pub struct CanonicalTypeTable {
    entries: HashMap<&'static str, TableEntry>,
}

static CANONICAL_TYPES: LazyLock<CanonicalTypeTable> = LazyLock::new(|| {
    let mut entries = HashMap::new();
    entries.insert(
        "BOOL",
        TableEntry::new(TypeKind::Bool, LengthPolicy::NotApplicable),
    );
    entries.insert("BYTES", TableEntry::new(TypeKind::Bytes, LengthPolicy::Max));
    entries.insert(
        "DATE",
        TableEntry::new(TypeKind::Date, LengthPolicy::NotApplicable),
    );
    entries.insert(
        "FLOAT64",
        TableEntry::new(TypeKind::Float64, LengthPolicy::NotApplicable),
    );
    entries.insert(
        "INT64",
        TableEntry::new(TypeKind::Int64, LengthPolicy::NotApplicable),
    );
    entries.insert(
        "NUMERIC",
        TableEntry::new(TypeKind::Numeric, LengthPolicy::NotApplicable),
    );
    // Declared string/bytes lengths are ignored: both are always MAX.
    entries.insert(
        "STRING",
        TableEntry::new(TypeKind::String, LengthPolicy::Max),
    );
    entries.insert(
        "TIMESTAMP",
        TableEntry::new(TypeKind::Timestamp, LengthPolicy::NotApplicable),
    );
    entries.insert(
        "JSON",
        TableEntry::new(TypeKind::Json, LengthPolicy::NotApplicable),
    );
    CanonicalTypeTable { entries }
});

impl CanonicalTypeTable {
    /// The process-wide table.
    pub fn global() -> &'static CanonicalTypeTable {
        &CANONICAL_TYPES
    }

    /// Look up a normalized type name.
    pub fn get(&self, name: &str) -> Option<&TableEntry> {
        self.entries.get(name)
    }

    /// All supported type names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of supported type names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a CSV column type token to a Spanner column type.
///
/// The name part is matched case-insensitively against the canonical type
/// table. Case folding is ASCII-only, so non-ASCII letters never match.
/// An optional qualifier of ASCII digits in parentheses is stripped and
/// ignored: `BYTES` and `STRING` always resolve to `MAX` length, so
/// `STRING(100)`, `STRING()` and `STRING` are the same type. Tokens are not
/// trimmed.
///
/// # Errors
///
/// Returns [`ResolveError::UnsupportedType`] carrying the original token
/// when the name is not a Spanner type or the qualifier is not
/// `(` digits `)` at the end of the token.
///
/// # Example
///
/// ```
/// use spanner_types::{resolve, TypeDescriptor, TypeKind, TypeLength};
///
/// assert_eq!(
///     resolve("BytES(100)").unwrap(),
///     TypeDescriptor::new(TypeKind::Bytes, TypeLength::Max)
/// );
/// assert_eq!(
///     resolve("numErIC").unwrap(),
///     TypeDescriptor::new(TypeKind::Numeric, TypeLength::Unset)
/// );
/// ```
pub fn resolve(token: &str) -> Result<TypeDescriptor, ResolveError> {
    let unsupported = || ResolveError::UnsupportedType {
        token: token.to_string(),
    };
    let normalized = strip_qualifier(token)
        .ok_or_else(unsupported)?
        .to_ascii_uppercase();

    match CanonicalTypeTable::global().get(&normalized) {
        Some(entry) => {
            let ty = entry.descriptor();
            debug!("Resolved column type '{}' to {}", token, ty);
            Ok(ty)
        }
        None => Err(unsupported()),
    }
}

/// Drop a trailing `(digits)` qualifier, returning the name part.
///
/// E.g. "STRING(100)" -> Some("STRING"), "BYTES()" -> Some("BYTES"),
/// "DATE" -> Some("DATE"), "STRING(abc)" -> None
fn strip_qualifier(token: &str) -> Option<&str> {
    match token.split_once('(') {
        None => Some(token),
        Some((name, rest)) => {
            let digits = rest.strip_suffix(')')?;
            digits.bytes().all(|b| b.is_ascii_digit()).then_some(name)
        }
    }
}
