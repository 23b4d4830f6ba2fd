//! Assembling a station from configuration.

use tagpress_compose::{ArtifactComposer, QrEncoder, SwashRenderer};
use tagpress_dispatch::{CommandDispatcher, LogDispatcher, OutputDispatcher};
use tagpress_input::{InputLine, InputMonitor, ShutdownSignal};
use tagpress_model::validate_timestamp_format;
use tagpress_store::{ArtifactStore, FileNaming};

use crate::config::{DispatchConfig, StationConfig};
use crate::error::StartupError;
use crate::pipeline::Pipeline;

/// Build the activation pipeline.
///
/// Layout faults (a bad timestamp pattern, band padding outside its band) and
/// a missing or unreadable font are startup errors. The font is loaded only
/// when text bands are configured.
pub fn build_pipeline(config: &StationConfig) -> Result<Pipeline, StartupError> {
    validate_timestamp_format(&config.timestamp.format)?;
    for (index, band) in config.bands.iter().enumerate() {
        band.validate(index).map_err(StartupError::Layout)?;
    }

    let mut composer = ArtifactComposer::new(Box::new(QrEncoder::new(config.encoder)))
        .with_bands(config.bands.clone())
        .with_timestamp_format(config.timestamp.format.clone());

    if !config.bands.is_empty() {
        let path = config
            .font
            .path
            .as_deref()
            .ok_or(StartupError::FontNotConfigured)?;
        composer = composer.with_renderer(Box::new(SwashRenderer::from_file(path)?));
    }

    let store = ArtifactStore::new(&config.store.directory)
        .with_naming(FileNaming::new(
            config.store.prefix.clone(),
            config.store.extension.clone(),
        ))
        .with_quality(config.store.quality);
    if let Err(error) = store.ensure_directory() {
        tracing::warn!(%error, "output directory not ready; each save retries");
    }

    Ok(Pipeline::new(composer, store, build_dispatcher(&config.dispatch))
        .with_unique_codes(config.unique_per_run)
        .with_printing(config.dispatch.print))
}

/// Print command dispatcher, or a log-only one when no command is configured.
fn build_dispatcher(config: &DispatchConfig) -> Box<dyn OutputDispatcher> {
    if config.command.is_empty() {
        tracing::info!("no print command configured; artifacts are only logged");
        return Box::new(LogDispatcher);
    }
    let dispatcher =
        CommandDispatcher::new(config.command.clone()).with_timeout(config.timeout());
    tracing::debug!(command = %dispatcher, timeout = ?dispatcher.timeout(), "configured print command");
    Box::new(dispatcher)
}

/// Wrap an already configured input line in a monitor using the configured timing.
pub fn build_monitor<L: InputLine>(
    config: &StationConfig,
    line: L,
    shutdown: ShutdownSignal,
) -> InputMonitor<L> {
    InputMonitor::new(line, shutdown)
        .with_timing(config.input.timing())
        .with_active_low(config.input.active_low)
}
