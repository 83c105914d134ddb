//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "slz-extract",
    version,
    about = "Extract speed limit zone features from a zipped file-geodatabase",
    long_about = "Extract speed limit zone features from a zipped file-geodatabase.\n\n\
                  Joins the zone, draft-geometry, and RCA reference datasets, resolves\n\
                  coded-domain values to labels, and emits one JSON feature array (or a\n\
                  single structured error payload) on the output parameter."
)]
pub struct Cli {
    /// Path to the zip archive containing the file-geodatabase.
    ///
    /// Geoprocessing hosts pass '#' for an unset parameter; it is treated as
    /// missing, and the run reports the error payload instead of usage help.
    #[arg(value_name = "ZIP_FILE")]
    pub input: Option<PathBuf>,

    /// Write the JSON output parameter to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
