//! listbridge CLI - Command-line interface for listbridge
//!
//! Provides commands for:
//! - Running a reconciliation between Google Keep and Bring!
//! - Previewing what a run would create
//! - Inspecting the Bring! account's shopping lists
//! - Viewing and validating configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{
    completions::CompletionsCommand, config::ConfigCommand, lists::ListsCommand, sync::SyncCommand,
};
use listbridge_core::config::RunConfig;
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "listbridge",
    version,
    about = "Keeps a Google Keep checklist and a Bring! shopping list in step"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconcile the two lists
    Sync(SyncCommand),
    /// Show the Bring! lists the account can see
    Lists(ListsCommand),
    /// View and validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing. RUST_LOG wins when set; otherwise the flags, then
    // the config file's logging.level. Logs go to stderr so that --json
    // output on stdout stays parseable.
    let filter = if cli.verbose == 1 {
        "debug".to_string()
    } else if cli.verbose >= 2 {
        "trace".to_string()
    } else if cli.quiet {
        "warn".to_string()
    } else {
        configured_level(cli.config.as_deref())
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    match cli.command {
        Commands::Sync(cmd) => cmd.execute(cli.config.as_deref(), format).await,
        Commands::Lists(cmd) => cmd.execute(cli.config.as_deref(), format).await,
        Commands::Config(cmd) => cmd.execute(cli.config.as_deref(), format).await,
        Commands::Completions(cmd) => cmd.execute(format).await,
    }
}

/// Reads the configured log level for the default filter.
///
/// Errors are ignored here on purpose: a broken config file should be
/// reported by the command itself, not while wiring up logging.
fn configured_level(config_override: Option<&str>) -> String {
    let path = match config_override {
        Some(path) => PathBuf::from(path),
        None => RunConfig::default_path(),
    };
    RunConfig::load_or_default(&path).logging.level
}
