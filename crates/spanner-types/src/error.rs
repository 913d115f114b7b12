//! Error types for type token resolution.

/// Error returned when a column type token cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The token's type name has no entry in the canonical type table.
    ///
    /// Carries the token exactly as the caller supplied it.
    #[error("{token} is not a valid Spanner column type")]
    UnsupportedType { token: String },
}

impl ResolveError {
    /// The original, unnormalized token that failed to resolve.
    pub fn token(&self) -> &str {
        match self {
            Self::UnsupportedType { token } => token.as_str(),
        }
    }
}
