//! csv2spanner Library
//!
//! Resolves the column types declared for CSV sources to Cloud Spanner
//! column types, as the first step of building a Spanner schema for a CSV
//! migration.
//!
//! # Crates
//!
//! - `spanner_types` - Spanner column type model and single-token resolution
//! - `csv_schema` - CSV manifests and whole-manifest resolution
//!
//! # CLI Usage
//!
//! ```bash
//! # Resolve individual type tokens
//! csv2spanner resolve STRING(100) numErIC BYTES
//!
//! # Resolve every column of a manifest, skipping unsupported types
//! csv2spanner manifest --file manifest.json --skip-unsupported --format json
//! ```

use clap::{Parser, ValueEnum};
use csv_schema::{ResolvedSchema, UnsupportedPolicy};
use serde::Serialize;
use spanner_types::TypeDescriptor;
use std::fmt::Write;

pub use csv_schema;
pub use spanner_types;

/// Output format for resolution reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON document
    Json,
}

#[derive(Parser, Clone, Debug)]
pub struct ResolveOpts {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "CSV2SPANNER_FORMAT"
    )]
    pub format: OutputFormat,

    /// Report and skip unsupported column types instead of failing
    #[arg(long, env = "CSV2SPANNER_SKIP_UNSUPPORTED")]
    pub skip_unsupported: bool,
}

impl ResolveOpts {
    /// The manifest policy these options select.
    pub fn unsupported_policy(&self) -> UnsupportedPolicy {
        if self.skip_unsupported {
            UnsupportedPolicy::Skip
        } else {
            UnsupportedPolicy::Abort
        }
    }
}

/// Resolution outcome for one token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenReport {
    pub token: String,
    #[serde(flatten)]
    pub outcome: TokenOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenOutcome {
    Type(TypeDescriptor),
    Error(String),
}

impl TokenReport {
    pub fn is_supported(&self) -> bool {
        matches!(self.outcome, TokenOutcome::Type(_))
    }
}

/// Resolve each token independently, keeping input order.
pub fn resolve_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<TokenReport> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            let outcome = match spanner_types::resolve(token) {
                Ok(ty) => TokenOutcome::Type(ty),
                Err(e) => TokenOutcome::Error(e.to_string()),
            };
            TokenReport {
                token: token.to_string(),
                outcome,
            }
        })
        .collect()
}

/// Render token reports.
///
/// Text format prints one `TOKEN -> TYPE` line per token.
pub fn render_tokens(reports: &[TokenReport], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for report in reports {
                match &report.outcome {
                    TokenOutcome::Type(ty) => writeln!(out, "{} -> {ty}", report.token)?,
                    TokenOutcome::Error(e) => writeln!(out, "{} -> unsupported: {e}", report.token)?,
                }
            }
            Ok(out)
        }
    }
}

/// Render a resolved manifest.
pub fn render_schema(schema: &ResolvedSchema, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(schema)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for table in &schema.tables {
                if table.file_patterns.is_empty() {
                    writeln!(out, "Table {}", table.table_name)?;
                } else {
                    writeln!(
                        out,
                        "Table {} ({})",
                        table.table_name,
                        table.file_patterns.join(", ")
                    )?;
                }
                for column in &table.columns {
                    writeln!(out, "  {column}")?;
                }
            }
            for skipped in &schema.skipped {
                writeln!(
                    out,
                    "Skipped {}.{}: {}",
                    skipped.table_name, skipped.column_name, skipped.error
                )?;
            }
            Ok(out)
        }
    }
}
