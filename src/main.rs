//! Command-line interface for csv2spanner
//!
//! # Usage Examples
//!
//! ## Resolve type tokens
//! ```bash
//! csv2spanner resolve STRING(100) BytES() numErIC
//! # STRING(100) -> STRING(MAX)
//! # BytES() -> BYTES(MAX)
//! # numErIC -> NUMERIC
//! ```
//!
//! ## Resolve a manifest
//! ```bash
//! csv2spanner manifest --file manifest.json
//!
//! # Keep going past unsupported column types, JSON output
//! CSV2SPANNER_FORMAT=json csv2spanner manifest --file manifest.yaml --skip-unsupported
//! ```
//!
//! Set `RUST_LOG=debug` to log each resolved column on stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use csv2spanner::csv_schema::{resolve_manifest, Manifest};
use csv2spanner::{render_schema, render_tokens, resolve_tokens, ResolveOpts};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv2spanner", version)]
#[command(about = "Resolve CSV column type declarations to Cloud Spanner column types")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve column type tokens such as STRING(100) or numeric
    Resolve {
        /// Column type tokens
        #[arg(required = true, value_name = "TOKEN")]
        tokens: Vec<String>,

        #[command(flatten)]
        opts: ResolveOpts,
    },

    /// Resolve the column types of every table in a CSV manifest
    Manifest {
        /// Manifest file (JSON, or YAML with a .yaml/.yml extension)
        #[arg(long, short = 'f', env = "CSV2SPANNER_MANIFEST")]
        file: PathBuf,

        #[command(flatten)]
        opts: ResolveOpts,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so that reports on stdout stay parseable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { tokens, opts } => {
            let reports = resolve_tokens(&tokens);
            print!("{}", render_tokens(&reports, opts.format)?);

            let unsupported = reports.iter().filter(|r| !r.is_supported()).count();
            if unsupported > 0 {
                if opts.skip_unsupported {
                    tracing::warn!(
                        "Skipped {} unsupported column types out of {}",
                        unsupported,
                        reports.len()
                    );
                } else {
                    anyhow::bail!(
                        "{unsupported} of {} column types are not supported",
                        reports.len()
                    );
                }
            }
        }
        Commands::Manifest { file, opts } => {
            tracing::info!("Resolving column types from manifest {}", file.display());

            let manifest = Manifest::from_file(&file)
                .with_context(|| format!("Failed to load manifest from {file:?}"))?;
            let schema = resolve_manifest(&manifest, opts.unsupported_policy())
                .context("Failed to resolve manifest column types")?;

            print!("{}", render_schema(&schema, opts.format)?);
        }
    }

    Ok(())
}
