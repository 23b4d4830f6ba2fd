//! Shared fixtures for trigger loop tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use image::GrayImage;
use tagpress_compose::{ArtifactComposer, CompositionError, MatrixEncoder, QrEncoder};
use tagpress_core::Pipeline;
use tagpress_dispatch::{DispatchError, OutputDispatcher};
use tagpress_input::MonitorTiming;
use tagpress_model::CodeGenerator;
use tagpress_store::ArtifactStore;

/// Records every dispatch call; clones share the log.
#[derive(Clone, Default)]
pub struct RecordingDispatcher {
    calls: Arc<Mutex<Vec<(PathBuf, bool)>>>,
    fail: bool,
}

impl RecordingDispatcher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

impl OutputDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, path: &Path, should_print: bool) -> Result<(), DispatchError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_path_buf(), should_print));
        if self.fail {
            return Err(DispatchError::EmptyCommand);
        }
        Ok(())
    }
}

/// Encoder that always rejects the payload as too long.
pub struct OverCapacityEncoder;

impl MatrixEncoder for OverCapacityEncoder {
    fn encode(&self, payload: &str) -> Result<GrayImage, CompositionError> {
        Err(CompositionError::Encode {
            payload_len: payload.len(),
            reason: "data too long".to_string(),
        })
    }
}

pub fn qr_pipeline(output: &Path, dispatcher: RecordingDispatcher) -> Pipeline {
    pipeline_with(Box::new(QrEncoder::default()), output, dispatcher)
}

pub fn pipeline_with(
    encoder: Box<dyn MatrixEncoder>,
    output: &Path,
    dispatcher: RecordingDispatcher,
) -> Pipeline {
    Pipeline::new(
        ArtifactComposer::new(encoder),
        ArtifactStore::new(output),
        Box::new(dispatcher),
    )
    .with_generator(CodeGenerator::seeded(11))
}

pub fn instant_timing() -> MonitorTiming {
    MonitorTiming {
        debounce: Duration::ZERO,
        poll_interval: Duration::ZERO,
    }
}

pub fn file_count(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}
