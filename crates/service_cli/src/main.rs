//! Recur CLI - Command Line Operations for Recurrence Rules
//!
//! This is the operational entry point for the recurrence rule engine.
//!
//! # Commands
//!
//! - `recur next --rule <file> --from <date>` - Next occurrence(s) after a date
//! - `recur range --rule <file> --anchor <date> --start <date> --end <date>` - Occurrences in a window
//! - `recur describe --rule <file>` - Human-readable label
//! - `recur check --rule <file>` - Whether the rule has ended
//!
//! # Architecture
//!
//! As part of the service layer, this crate loads rule files and
//! configuration, then delegates every calculation to `recur_models`.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod rule_file;

use commands::range::RangeArgs;
use config::{build_config, CliArgs, CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Recurrence rule engine CLI
#[derive(Parser)]
#[command(name = "recur")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format, default: recur.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the next occurrence after a date
    Next {
        /// Rule file (JSON or TOML)
        #[arg(short, long)]
        rule: PathBuf,

        /// Reference date (YYYY-MM-DD)
        #[arg(short, long)]
        from: String,

        /// Number of successive occurrences to chain
        #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },

    /// List occurrences inside a date window
    Range {
        /// Rule file (JSON or TOML)
        #[arg(short, long)]
        rule: PathBuf,

        /// First occurrence of the rule (YYYY-MM-DD)
        #[arg(short, long)]
        anchor: String,

        /// Window start, inclusive (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Window end, inclusive (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,

        /// Maximum number of dates listed
        #[arg(short, long, value_parser = parse_limit)]
        limit: Option<usize>,

        /// Output format (table, json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Print the rule's label
    Describe {
        /// Rule file (JSON or TOML)
        #[arg(short, long)]
        rule: PathBuf,
    },

    /// Report whether the rule has ended
    Check {
        /// Rule file (JSON or TOML)
        #[arg(short, long)]
        rule: PathBuf,

        /// Evaluation date (YYYY-MM-DD, default: today)
        #[arg(long)]
        as_of: Option<String>,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
        }
    }
}

fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(format!("`{}` is not a positive integer", s)),
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        range_limit = ?config.range_limit,
        output_format = %config.output_format,
        "configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(cli.command, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

fn dispatch(command: Commands, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Next { rule, from, count } => commands::next::run(&rule, &from, count, out),
        Commands::Range {
            rule,
            anchor,
            start,
            end,
            limit,
            format,
        } => {
            let format = match format {
                Some(format) => format.parse::<OutputFormat>()?,
                None => config.output_format,
            };
            let args = RangeArgs {
                rule_path: &rule,
                anchor: &anchor,
                start: &start,
                end: &end,
                limit: limit.or(config.range_limit),
                format,
            };
            info!(limit = ?args.limit, %format, "listing range");
            commands::range::run(&args, out)
        }
        Commands::Describe { rule } => commands::describe::run(&rule, out),
        Commands::Check { rule, as_of } => commands::check::run(&rule, as_of.as_deref(), out),
    }
}
