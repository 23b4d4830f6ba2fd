//! Station configuration.
//!
//! Every section has defaults, so an empty file describes the reference
//! station: a pulled-up switch on BCM pin 4, a version 1 QR code with no
//! text, saved as `data/qr_code_<code>.jpg` and sent to `lp`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tagpress_compose::{BandSpec, EncoderSettings};
use tagpress_input::{MonitorTiming, Pull};
use tagpress_model::DEFAULT_TIMESTAMP_FORMAT;

use crate::error::ConfigError;

/// Complete station configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// Reject codes already issued during this run.
    pub unique_per_run: bool,
    pub input: InputConfig,
    pub encoder: EncoderSettings,
    pub font: FontConfig,
    /// Text bands beneath the matrix, top to bottom.
    pub bands: Vec<BandSpec>,
    pub timestamp: TimestampConfig,
    pub store: StoreConfig,
    pub dispatch: DispatchConfig,
}

impl StationConfig {
    /// Load a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Input line wiring and timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// BCM pin number.
    pub pin: u8,
    pub pull: Pull,
    /// Pressed reads low.
    pub active_low: bool,
    pub debounce_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pin: 4,
            pull: Pull::Up,
            active_low: true,
            debounce_ms: 100,
            poll_interval_ms: 100,
        }
    }
}

impl InputConfig {
    pub fn timing(&self) -> MonitorTiming {
        MonitorTiming {
            debounce: Duration::from_millis(self.debounce_ms),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}

/// Scalable font used by text bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub path: Option<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from(
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    /// `strftime`-style pattern.
    pub format: String,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Output directory and file naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub directory: PathBuf,
    pub prefix: String,
    pub extension: String,
    /// JPEG quality (1-100).
    pub quality: u8,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            prefix: "qr_code_".to_string(),
            extension: "jpg".to_string(),
            quality: 90,
        }
    }
}

/// Output dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Physically print each artifact.
    pub print: bool,
    /// Print command; the artifact path is appended. Empty means log only.
    pub command: Vec<String>,
    /// Seconds the print command may run before it is killed.
    pub timeout_secs: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            print: true,
            command: vec!["lp".to_string()],
            timeout_secs: 60,
        }
    }
}

impl DispatchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
