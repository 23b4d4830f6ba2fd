//! Cycle and startup error types.

use std::path::PathBuf;

use tagpress_compose::{CompositionError, FontError};
use tagpress_input::HardwareConfigError;
use tagpress_model::{GenerationError, TimestampFormatError};
use tagpress_store::StorageError;
use thiserror::Error;

/// One activation cycle failed. The loop logs it and returns to idle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CycleError {
    /// Short explanation for the operator console.
    pub fn user_message(&self) -> String {
        match self {
            Self::Generation(error) => error.to_string(),
            Self::Composition(error) => error.user_message(),
            Self::Storage(error) => error.user_message(),
        }
    }
}

/// The station configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The station cannot start. Always fatal.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Font(#[from] FontError),

    #[error("text bands are configured but no font path is set")]
    FontNotConfigured,

    #[error(transparent)]
    TimestampFormat(#[from] TimestampFormatError),

    #[error("invalid band layout")]
    Layout(#[source] CompositionError),

    #[error(transparent)]
    Hardware(#[from] HardwareConfigError),
}
