//! Composition and font errors.

use std::path::PathBuf;
use tagpress_model::TimestampFormatError;
use thiserror::Error;

/// A single artifact could not be composed. Recoverable: the cycle is abandoned.
#[derive(Debug, Error)]
pub enum CompositionError {
    /// The matrix encoder rejected the payload.
    #[error("failed to encode {payload_len}-byte payload: {reason}")]
    Encode { payload_len: usize, reason: String },

    /// The encoder produced an image with no pixels.
    #[error("matrix encoder returned an empty image")]
    EmptyMatrix,

    /// A band shows the timestamp but none was captured for this activation.
    #[error("band {band} shows a timestamp but none was captured")]
    MissingTimestamp { band: usize },

    /// The timestamp pattern could not be rendered.
    #[error(transparent)]
    TimestampFormat(#[from] TimestampFormatError),

    /// A band's top padding leaves no room for its text.
    #[error("band {band} padding ({padding_top}px) does not fit its {height}px height")]
    PaddingExceedsHeight {
        band: usize,
        padding_top: u32,
        height: u32,
    },

    /// Bands are configured but no text renderer was supplied.
    #[error("text bands configured without a text renderer")]
    NoRenderer,

    /// Matrix plus bands does not fit in an image.
    #[error("artifact height overflows ({matrix_height}px matrix plus bands)")]
    TooTall { matrix_height: u32 },
}

impl CompositionError {
    /// Short explanation for the operator console.
    pub fn user_message(&self) -> String {
        match self {
            Self::Encode { .. } => {
                "The code could not be encoded; check the encoder version and error correction settings."
                    .to_string()
            }
            Self::EmptyMatrix => "The encoder produced an empty image.".to_string(),
            Self::MissingTimestamp { band } => {
                format!("Band {band} needs a timestamp but none was provided.")
            }
            Self::TimestampFormat(error) => {
                format!("The timestamp format {:?} is not valid.", error.pattern)
            }
            Self::PaddingExceedsHeight { band, .. } => {
                format!("Band {band} has more top padding than height.")
            }
            Self::NoRenderer => "Text bands need a font; configure one.".to_string(),
            Self::TooTall { .. } => "The configured bands make the artifact too tall.".to_string(),
        }
    }
}

/// The scalable font could not be loaded. Fatal at startup.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a usable font file: {path}")]
    Invalid { path: PathBuf },

    #[error("font data is not a usable font")]
    InvalidData,
}
