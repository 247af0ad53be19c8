//! Release Rollback Helper - CLI
//!
//! Previews the rollback a controller would issue for a Helm release:
//! loads a release manifest, resolves the rollback parameters and prints
//! them without contacting any backend.

#![forbid(unsafe_code)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rrh_common::{OutputFormat, init_logging, load_config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "rrh")]
#[command(
    author,
    version,
    about = "Release Rollback Helper - preview Helm release rollbacks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (default: $XDG_CONFIG_HOME/rrh/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the rollback parameters for a release manifest
    Plan {
        /// HelmRelease manifest (.yaml, .yml, .json or .toml)
        manifest: PathBuf,

        /// Request a dry-run rollback
        #[arg(long)]
        dry_run: bool,

        /// Delete new resources if the rollback fails
        #[arg(long)]
        cleanup_on_fail: bool,

        /// Roll back to this revision instead of the resolved one
        #[arg(long, value_name = "REVISION")]
        to_version: Option<u32>,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Show the effective configuration and where each value comes from
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", commands::helpers::render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let loaded = load_config(cli.config.as_deref())?;

    let mut log_config = loaded.config.log_config();
    if cli.verbose {
        log_config = log_config.with_level("debug");
    }
    init_logging(&log_config)?;

    for err in &loaded.env_errors {
        warn!(code = %err.code().code_string(), "Ignoring environment override: {}", err);
    }
    debug!(config = ?loaded.path, "Configuration loaded");

    match cli.command {
        Commands::Plan {
            manifest,
            dry_run,
            cleanup_on_fail,
            to_version,
            format,
        } => {
            let overrides = commands::plan::PlanOverrides {
                dry_run,
                cleanup_on_fail,
                to_version,
            };
            let format = format.unwrap_or(loaded.config.output_format.value);
            commands::plan::run(&manifest, &overrides, format)
        }
        Commands::Config => commands::config::run(&loaded),
    }
}
