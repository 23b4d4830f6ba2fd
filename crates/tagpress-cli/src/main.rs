//! tagpress station binary.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tagpress_cli::logging::{LogConfig, LogFormat, init_logging};
use tagpress_core::LoopSummary;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_generate, run_simulation, run_station};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let result = match &cli.command {
        Command::Run(args) => run_station(args).map(|summary| print_summary(&summary)),
        Command::Simulate(args) => run_simulation(args).map(|summary| print_summary(&summary)),
        Command::Generate(args) => run_generate(args).map(|report| {
            println!("{}  {}", report.code, report.path.display());
            if !report.dispatched {
                eprintln!("warning: artifact saved but could not be sent to the printer");
            }
        }),
    };

    if let Err(error) = result {
        tracing::error!("{error:#}");
        if cli.log_file.is_some() {
            eprintln!("error: {error:#}");
        }
        std::process::exit(1);
    }
}

fn print_summary(summary: &LoopSummary) {
    println!(
        "Exiting: {} tags printed, {} failed, {} dispatch errors.",
        summary.cycles_completed, summary.cycles_failed, summary.dispatch_failures
    );
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
