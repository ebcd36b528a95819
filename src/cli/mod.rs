//! CLI command definitions and handlers

mod analyze;
mod evidence;
mod init;
mod lookup;

use crate::config::{load_config_file, load_project_config, ProjectConfig};
use crate::reporters::JsonOptions;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Parse and validate a score threshold (0-100)
fn parse_score(s: &str) -> Result<u8, String> {
    let n: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid score", s))?;
    if n > 100 {
        Err("score cannot exceed 100".to_string())
    } else {
        Ok(n)
    }
}

/// SafeShelf - nutritional risk scoring for food products
#[derive(Parser, Debug)]
#[command(name = "safeshelf")]
#[command(
    version,
    about = "Score a food product's nutritional risk: heart, metabolic and ingredient toxicity, with citations",
    after_help = "\
Examples:
  safeshelf analyze product.json                 Text report
  safeshelf analyze product.json --format json   Report payload as JSON
  curl -s $LOOKUP_URL | safeshelf analyze - --format json --embed
  safeshelf lookup en:hydrogenated-palm-oil      Resolve an ingredient tag
  safeshelf evidence                             List the evidence table"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ./safeshelf.toml when present)
    #[arg(long, global = true, env = "SAFESHELF_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one product, or a JSON array of products
    #[command(after_help = "\
Input may be a bare product record, a lookup-service envelope
({\"status\": 1, \"product\": {...}}), or an array of either.

Examples:
  safeshelf analyze product.json --explain-score
  safeshelf analyze products.json --format json -o reports.json
  safeshelf analyze product.json --format json --compact
  safeshelf analyze product.json --fail-under 60")]
    Analyze {
        /// Product JSON file, or - for stdin
        input: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Wrap JSON reports under `health_report` with product metadata
        #[arg(long)]
        embed: bool,

        /// Print JSON on a single line instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Explain the scoring formula with full breakdown
        #[arg(long)]
        explain_score: bool,

        /// Exit with code 1 if any product scores below this
        #[arg(long, value_parser = parse_score)]
        fail_under: Option<u8>,
    },

    /// Resolve ingredient tags against the evidence table
    Lookup {
        /// Raw ingredient tags, e.g. en:refined-palm-oil
        #[arg(required = true)]
        tags: Vec<String>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the evidence table in lookup order
    Evidence {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a safeshelf.toml with default settings
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Resolve configuration: explicit file errors, implicit file falls back
fn resolve_config(explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_project_config(Path::new("."))),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            embed,
            compact,
            explain_score,
            fail_under,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            let format = format
                .or_else(|| config.defaults.format.clone())
                .unwrap_or_else(|| "text".to_string());
            analyze::run(
                &config,
                &input,
                &format,
                output.as_deref(),
                JsonOptions { embed, compact },
                explain_score,
                fail_under,
            )
        }
        Commands::Lookup { tags, json } => lookup::run(&tags, json),
        Commands::Evidence { json } => evidence::run(json),
        Commands::Init { path } => init::run(&path),
    }
}
