//! Command-line parsing for the OCat query tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fetch/parse code, which never sees clap types.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "qocat", version, about = "Query the Chandra Observation Catalog by ObsId")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and print catalog details for one or more observation ids.
    Query(QueryArgs),
    /// List the known OCat column codes and their labels.
    Fields(FieldsArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct QueryArgs {
    /// Observation ids to look up, queried in the order given.
    #[arg(value_name = "OBSID", required = true)]
    pub obsids: Vec<u64>,

    /// Catalog endpoint URL (overrides `QOCAT_ENDPOINT`).
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Show human-readable labels next to column codes (text output only).
    #[arg(long)]
    pub labels: bool,

    /// Also write the results to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Request timeout in seconds (defaults to the HTTP client's own).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Parser, Clone)]
pub struct FieldsArgs {
    /// Only show these codes.
    #[arg(value_name = "CODE")]
    pub codes: Vec<String>,
}
