//! Trigger-to-artifact pipeline for tagpress stations.
//!
//! A station waits for a press on one input line, then runs one activation
//! cycle:
//!
//! ```text
//! Idle --pressed--> Generating --cycle done--> AwaitingRelease --released--> Idle
//! ```
//!
//! Each cycle captures a timestamp, draws a code, composes the artifact, saves
//! it and hands the file to the output dispatcher. A failed cycle is logged
//! and the loop goes back to waiting; only an interrupt stops it.
//!
//! # Architecture
//!
//! - `config.rs` - TOML station configuration
//! - `pipeline.rs` - one activation cycle
//! - `trigger.rs` - the press/release state machine
//! - `station.rs` - building a pipeline and monitor from configuration
//! - `error.rs` - cycle and startup error types

mod config;
mod error;
mod pipeline;
mod station;
mod trigger;

pub use config::{
    DispatchConfig, FontConfig, InputConfig, StationConfig, StoreConfig, TimestampConfig,
};
pub use error::{ConfigError, CycleError, StartupError};
pub use pipeline::{CycleReport, Pipeline};
pub use station::{build_monitor, build_pipeline};
pub use tagpress_input::ShutdownSignal;
pub use trigger::{LoopState, LoopSummary, TriggerLoop};
