//! CLI argument definitions for the tagpress station.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use tagpress_model::Code;

#[derive(Parser)]
#[command(
    name = "tagpress",
    version,
    about = "Print a QR-coded tag every time the button is pressed",
    long_about = "Watch a push button on a GPIO line. Each press draws a fresh \
                  4-digit code, renders it as a QR code with optional text, saves \
                  the image and sends it to the printer."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for log collectors).
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
    /// Watch the configured GPIO pin until interrupted.
    Run(StationArgs),

    /// Same loop without hardware: press Enter to simulate a button press.
    Simulate(SimulateArgs),

    /// Produce a single artifact immediately.
    Generate(GenerateArgs),
}

#[derive(Args)]
pub struct StationArgs {
    /// Station configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save artifacts without sending them to the printer.
    #[arg(long = "no-print")]
    pub no_print: bool,
}

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub station: StationArgs,

    /// How long each simulated press holds the line, in milliseconds.
    #[arg(long = "hold-ms", default_value_t = 200)]
    pub hold_ms: u64,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub station: StationArgs,

    /// Use this code instead of drawing one (4 distinct digits).
    #[arg(long, value_parser = Code::parse)]
    pub code: Option<Code>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
