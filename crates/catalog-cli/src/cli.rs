//! CLI argument definitions for the catalog validator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use catalog_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "catalog-validator",
    version,
    about = "Validate device-property catalog CSV files",
    long_about = "Validate device-property catalog CSV files.\n\n\
                  Every subdirectory of ROOT is a locale; each CSV inside it is checked\n\
                  against that locale's header and field rules."
)]
pub struct Cli {
    /// Catalog root containing one directory per locale.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Config file (default: <ROOT>/catalog-validator.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format written to stdout.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI report format choices.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["catalog-validator", "catalog"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("catalog"));
        assert!(cli.config.is_none());
        assert!(cli.format == ReportFormatArg::Text);
        assert!(!cli.verbosity.is_present());
    }

    #[test]
    fn parses_report_and_log_flags() {
        let cli = Cli::try_parse_from([
            "catalog-validator",
            "catalog",
            "--format",
            "json",
            "--config",
            "alt.toml",
            "--log-format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert!(cli.format == ReportFormatArg::Json);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(cli.verbosity.is_present());
    }

    #[test]
    fn log_level_converts_to_filter() {
        assert_eq!(LevelFilter::from(LogLevelArg::Debug), LevelFilter::DEBUG);
        assert_eq!(LogFormat::from(LogFormatArg::Compact), LogFormat::Compact);
    }

    #[test]
    fn root_is_required() {
        assert!(Cli::try_parse_from(["catalog-validator"]).is_err());
    }
}
