//! Artifact composition for tagpress.
//!
//! An artifact is a scannable matrix with zero or more text bands stacked
//! beneath it:
//!
//! ```text
//! +-----------------+
//! |                 |
//! |   QR matrix     |  width x width
//! |                 |
//! +-----------------+
//! |      4071       |  band 0 (height h0)
//! +-----------------+
//! |   Title line    |  band 1 (height h1)
//! +-----------------+
//! ```
//!
//! The artifact is exactly as wide as the matrix and as tall as the matrix
//! plus every band height. Each band's text is horizontally centered.
//!
//! # Collaborators
//!
//! - [`MatrixEncoder`] turns a payload into a black-on-white matrix image;
//!   [`QrEncoder`] wraps the `qrcode` crate.
//! - [`TextRenderer`] measures and paints text; [`SwashRenderer`] shapes and
//!   rasterizes with `swash` from a scalable font file.

mod band;
mod composer;
mod encoder;
mod error;
mod text;

pub use band::{BandContent, BandSpec, TextBand, layouts};
pub use composer::{Artifact, ArtifactComposer, MatrixImage};
pub use encoder::{EncoderSettings, ErrorCorrection, MatrixEncoder, QrEncoder};
pub use error::{CompositionError, FontError};
pub use text::{SwashRenderer, TextRenderer, TextStyle};
