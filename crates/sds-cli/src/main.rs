//! Sales Data Studio CLI.

use anyhow::Context;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use sds_cli::input::read_input;
use sds_cli::logging::{LogConfig, LogFormat, init_logging};
use sds_cli::output::print_response;
use sds_core::analyze;
use sds_model::{AnalyzeOptions, AnalyzeRequest};

mod cli;

use crate::cli::{AnalyzeArgs, Cli, Command, LogFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Analyze(args) => match run_analyze(&args) {
            Ok(code) => code,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let raw = read_input(&args.input)?;
    let request = AnalyzeRequest::new(
        raw,
        AnalyzeOptions {
            clean_missing: args.clean_missing,
            normalize_data: args.normalize,
            sort_sales: args.sort_sales,
        },
    );
    let response = analyze(&request);
    if args.json {
        let json = serde_json::to_string_pretty(&response).context("serialize response")?;
        println!("{json}");
    } else {
        print_response(&response);
    }
    Ok(if response.success { 0 } else { 1 })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
