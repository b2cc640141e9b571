//! CLI argument definitions for Sales Data Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sds",
    version,
    about = "Sales Data Studio - clean, normalize, and summarize sales data",
    long_about = "Process delimited sales data through a configurable pipeline.\n\n\
                  Optionally drops rows with missing Sales values, replaces Sales\n\
                  with population Z-scores, and sorts rows descending, then reports\n\
                  descriptive statistics over the result."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a delimited data file (or stdin with `-`).
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the data file, or `-` to read from stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Drop rows whose Sales value is not a valid number.
    #[arg(long = "clean-missing")]
    pub clean_missing: bool,

    /// Replace Sales values with population Z-scores (4 decimal places).
    #[arg(long = "normalize")]
    pub normalize: bool,

    /// Sort rows by Sales value, descending.
    #[arg(long = "sort-sales")]
    pub sort_sales: bool,

    /// Emit the full response as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
