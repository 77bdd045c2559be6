//! CLI argument definitions for the grid browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gridview",
    version,
    about = "Browse, select, and bulk-edit a paginated record table",
    long_about = "Browse a paginated record table from the terminal.\n\n\
                  Reads one command per line (next, prev, goto, jump, toggle, delete, \
                  status, ...) and re-renders the current page after each command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse a generated record set, reading commands from stdin or a script.
    Browse(BrowseArgs),

    /// List the statuses a bulk status change can target.
    Statuses(StatusesArgs),
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Which record set to generate.
    #[arg(long = "dataset", value_enum, default_value = "payments")]
    pub dataset: DatasetArg,

    /// Number of records to generate.
    #[arg(long = "records", value_name = "N", default_value_t = 60)]
    pub records: usize,

    /// Seed for generated amounts and estimates.
    #[arg(long = "seed", value_name = "N", default_value_t = 0)]
    pub seed: u64,

    /// Initial rows per page. Always wins over the config file; a size the
    /// file does not list is added to the selector.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Read commands from a file instead of stdin.
    #[arg(long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Print a JSON view snapshot after each command instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct StatusesArgs {
    /// Which record set's statuses to list.
    #[arg(long = "dataset", value_enum, default_value = "payments")]
    pub dataset: DatasetArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DatasetArg {
    Payments,
    Tasks,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
