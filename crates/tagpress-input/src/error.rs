//! Hardware configuration errors.

use thiserror::Error;

/// The input line could not be configured. Always fatal at startup.
#[derive(Debug, Error)]
pub enum HardwareConfigError {
    /// The GPIO controller could not be opened.
    #[error("failed to open GPIO controller")]
    Controller {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The requested pin is unavailable or already claimed.
    #[error("failed to configure input pin {pin}")]
    Pin {
        pin: u8,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// This build has no GPIO backend.
    #[error("GPIO support is not compiled in (pin {pin} requested); rebuild with the `gpio` feature")]
    Unsupported { pin: u8 },
}
