//! Speed limit zone extraction CLI.

use std::io::{self, IsTerminal};
use std::path::Path;

use clap::{ColorChoice, Parser};
use tracing::error;
use tracing::level_filters::LevelFilter;

use slz_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use slz_cli::logging::{LogConfig, LogFormat, init_logging};
use slz_cli::pipeline::run_extract;
use slz_model::ExtractConfig;
use slz_report::render_error;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = ExtractConfig::default();
    let (payload, exit_code) = match run_extract(cli.input.as_deref(), &config) {
        Ok(json) => (json, 0),
        Err(run_error) => {
            error!(%run_error, "extraction failed");
            (render_error(&run_error), 1)
        }
    };

    if let Err(write_error) = emit_output(&payload, cli.output.as_deref()) {
        eprintln!("error: failed to write output: {write_error}");
        std::process::exit(1);
    }
    std::process::exit(exit_code);
}

/// Write the output parameter to its destination: a file, or stdout.
fn emit_output(payload: &str, destination: Option<&Path>) -> io::Result<()> {
    match destination {
        Some(path) => std::fs::write(path, payload),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
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
