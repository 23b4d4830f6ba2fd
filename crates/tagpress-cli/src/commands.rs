//! Subcommand implementations.

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tagpress_core::{
    CycleReport, LoopSummary, Pipeline, ShutdownSignal, StationConfig, TriggerLoop,
    build_monitor, build_pipeline,
};
use tagpress_input::{GpioLine, InputLine, SharedLine};

use crate::cli::{GenerateArgs, SimulateArgs, StationArgs};

/// Load the station configuration, falling back to defaults.
fn load_config(args: &StationArgs) -> Result<StationConfig> {
    match &args.config {
        Some(path) => {
            let config = StationConfig::load(path)?;
            tracing::info!(path = %path.display(), "loaded station config");
            Ok(config)
        }
        None => Ok(StationConfig::default()),
    }
}

fn pipeline_for(config: &StationConfig, args: &StationArgs) -> Result<Pipeline> {
    let pipeline = build_pipeline(config).context("failed to prepare artifact pipeline")?;
    Ok(pipeline.with_printing(config.dispatch.print && !args.no_print))
}

/// Install the Ctrl+C handler that stops the loop.
fn install_interrupt_handler() -> Result<ShutdownSignal> {
    let shutdown = ShutdownSignal::new();
    let handler_signal = shutdown.clone();
    ctrlc::set_handler(move || {
        handler_signal.trigger();
    })
    .context("failed to install Ctrl+C handler")?;
    Ok(shutdown)
}

fn run_loop<L: InputLine>(
    config: &StationConfig,
    line: L,
    pipeline: Pipeline,
    shutdown: ShutdownSignal,
) -> LoopSummary {
    let monitor = build_monitor(config, line, shutdown);
    TriggerLoop::new(monitor, pipeline).run()
}

pub fn run_station(args: &StationArgs) -> Result<LoopSummary> {
    let config = load_config(args)?;
    let shutdown = install_interrupt_handler()?;
    let pipeline = pipeline_for(&config, args)?;
    let line = GpioLine::acquire(config.input.pin, config.input.pull)
        .with_context(|| format!("failed to configure GPIO pin {}", config.input.pin))?;
    tracing::info!(pin = config.input.pin, "waiting for button press on GPIO {}", config.input.pin);
    Ok(run_loop(&config, line, pipeline, shutdown))
}

pub fn run_simulation(args: &SimulateArgs) -> Result<LoopSummary> {
    let config = load_config(&args.station)?;
    let shutdown = install_interrupt_handler()?;
    let pipeline = pipeline_for(&config, &args.station)?;

    let line = SharedLine::new();
    spawn_keyboard_presser(line.clone(), shutdown.clone(), Duration::from_millis(args.hold_ms));
    println!("Press Enter to simulate a button press, Ctrl+C (or Ctrl+D) to stop.");
    Ok(run_loop(&config, line, pipeline, shutdown))
}

/// Turn each line read from stdin into a press of `hold` duration.
fn spawn_keyboard_presser(line: SharedLine, shutdown: ShutdownSignal, hold: Duration) {
    thread::spawn(move || {
        for input in io::stdin().lock().lines() {
            if input.is_err() || shutdown.is_triggered() {
                break;
            }
            line.press();
            thread::sleep(hold);
            line.release();
        }
        shutdown.trigger();
    });
}

pub fn run_generate(args: &GenerateArgs) -> Result<CycleReport> {
    let config = load_config(&args.station)?;
    let mut pipeline = pipeline_for(&config, &args.station)?;
    let report = match args.code {
        Some(code) => pipeline.run_with_code(code),
        None => pipeline.run_cycle(),
    }
    .context("failed to generate artifact")?;
    Ok(report)
}
