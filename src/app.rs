//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - resolves configuration
//! - runs the query pipeline
//! - prints results and writes optional exports

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, FieldsArgs, QueryArgs};
use crate::config::OcatConfig;
use crate::data::OcatClient;
use crate::domain::OutputFormat;
use crate::error::Result;

pub mod pipeline;

/// Entry point for the `qocat` binary. Returns the process exit code.
pub fn run() -> Result<u8> {
    // `qocat 315 1838` is shorthand for `qocat query 315 1838`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    init_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Query(args) => handle_query(args),
        Command::Fields(args) => handle_fields(args),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Logs share the terminal with results, so keep them off stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_query(args: QueryArgs) -> Result<u8> {
    let config = OcatConfig::from_env(args.endpoint.as_deref(), args.timeout)?;
    let client = OcatClient::new(&config)?;
    info!(endpoint = %client.endpoint(), obsids = args.obsids.len(), "starting queries");

    let retrieved_at = chrono::Utc::now();
    let results = pipeline::query_obsids(&client, &args.obsids);

    let rendered = match args.output {
        OutputFormat::Text => crate::report::format_text(&results, args.labels),
        OutputFormat::Tsv => crate::report::format_tsv(&results),
        OutputFormat::Json => crate::report::format_json(&results)?,
    };
    print!("{rendered}");
    if args.output == OutputFormat::Json {
        println!();
    }

    if let Some(path) = &args.export {
        crate::io::export::write_export_json(path, client.endpoint().as_str(), retrieved_at, &results)?;
    }

    Ok(pipeline::first_failure_exit_code(&results).unwrap_or(0))
}

fn handle_fields(args: FieldsArgs) -> Result<u8> {
    print!("{}", crate::report::format_fields(&args.codes));
    Ok(0)
}

/// Rewrite argv so a bare list of obsids runs `query`.
///
/// Rules:
/// - `qocat 315 1838`              -> `qocat query 315 1838`
/// - `qocat -v 315`                -> `qocat -v query 315`
/// - `qocat` / other flags / subcommands -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    // Global verbosity flags may come before the subcommand.
    let first = argv
        .iter()
        .skip(1)
        .position(|arg| !is_verbosity_flag(arg))
        .map(|pos| pos + 1);

    if let Some(idx) = first {
        if argv[idx].parse::<u64>().is_ok() {
            argv.insert(idx, "query".to_string());
        }
    }
    argv
}

fn is_verbosity_flag(arg: &str) -> bool {
    arg == "--verbose" || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'))
}
