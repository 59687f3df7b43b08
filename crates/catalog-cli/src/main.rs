//! Device-property catalog validator CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use catalog_cli::config::CatalogConfig;
use catalog_cli::logging::{LogConfig, LogFormat, init_logging};
use catalog_cli::runner::{EXIT_FATAL, exit_code, validate_root};
use catalog_model::RunReport;
use catalog_report::{render_json, render_text};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, ReportFormatArg};
use crate::summary::{Styling, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FATAL);
    }
    let status = match run(&cli) {
        Ok(report) => exit_code(&report),
        Err(error) => {
            eprintln!("error: {error:#}");
            EXIT_FATAL
        }
    };
    std::process::exit(status);
}

fn run(cli: &Cli) -> Result<RunReport> {
    let config = CatalogConfig::resolve(&cli.root, cli.config.as_deref()).context("load config")?;
    let report = validate_root(&cli.root, &config)?;
    match cli.format {
        ReportFormatArg::Text => {
            print!("{}", render_text(&report));
            print_summary(&report, styling_from_cli(cli));
        }
        ReportFormatArg::Json => {
            println!("{}", render_json(&report).context("serialize report")?);
        }
    }
    Ok(report)
}

fn styling_from_cli(cli: &Cli) -> Styling {
    match cli.color.color {
        ColorChoice::Always => Styling::Always,
        ColorChoice::Never => Styling::Never,
        ColorChoice::Auto => Styling::Auto,
    }
}

/// `--log-level` beats `-v/-q`, and either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from),
        use_env_filter: !explicit,
        format: LogFormat::from(cli.log_format),
        log_file: cli.log_file.clone(),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
        ..LogConfig::default()
    }
}
