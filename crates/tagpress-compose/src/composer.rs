//! Matrix plus text band composition.

use image::{DynamicImage, GrayImage, Rgb, RgbImage, imageops};
use tagpress_model::{Code, DEFAULT_TIMESTAMP_FORMAT, Timestamp};

use crate::band::{BandContent, BandSpec, TextBand};
use crate::encoder::MatrixEncoder;
use crate::error::CompositionError;
use crate::text::{TextRenderer, TextStyle};

/// Black-on-white scannable region produced by a [`MatrixEncoder`].
pub type MatrixImage = GrayImage;

/// A finished raster: the matrix on top, bands stacked below.
#[derive(Debug, Clone)]
pub struct Artifact {
    image: RgbImage,
}

impl Artifact {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

/// Renders codes into artifacts using one configured band layout.
pub struct ArtifactComposer {
    encoder: Box<dyn MatrixEncoder>,
    renderer: Option<Box<dyn TextRenderer>>,
    bands: Vec<BandSpec>,
    timestamp_format: String,
    text_color: Rgb<u8>,
    background: Rgb<u8>,
}

impl ArtifactComposer {
    /// Composer with no bands and no text renderer (bare matrix).
    pub fn new(encoder: Box<dyn MatrixEncoder>) -> Self {
        Self {
            encoder,
            renderer: None,
            bands: Vec::new(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            text_color: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn TextRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    #[must_use]
    pub fn with_bands(mut self, bands: Vec<BandSpec>) -> Self {
        self.bands = bands;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn bands(&self) -> &[BandSpec] {
        &self.bands
    }

    /// True if any band shows the activation time.
    pub fn needs_timestamp(&self) -> bool {
        self.bands
            .iter()
            .any(|band| band.content == BandContent::Timestamp)
    }

    /// Encode the code's digits into a matrix image.
    pub fn encode(&self, code: &Code) -> Result<MatrixImage, CompositionError> {
        let matrix = self.encoder.encode(&code.to_string())?;
        if matrix.width() == 0 || matrix.height() == 0 {
            return Err(CompositionError::EmptyMatrix);
        }
        Ok(matrix)
    }

    /// Resolve the configured bands for one activation.
    pub fn resolve_bands(
        &self,
        code: &Code,
        timestamp: Option<&Timestamp>,
    ) -> Result<Vec<TextBand>, CompositionError> {
        let formatted = timestamp
            .map(|ts| ts.format(&self.timestamp_format))
            .transpose()?;
        self.bands
            .iter()
            .enumerate()
            .map(|(index, spec)| spec.resolve(index, code, formatted.as_deref()))
            .collect()
    }

    /// Stack `bands` beneath `matrix`, each centered horizontally.
    pub fn compose(
        &mut self,
        matrix: &MatrixImage,
        bands: &[TextBand],
    ) -> Result<Artifact, CompositionError> {
        let width = matrix.width();
        let height = bands
            .iter()
            .try_fold(matrix.height(), |total, band| total.checked_add(band.height))
            .ok_or(CompositionError::TooTall {
                matrix_height: matrix.height(),
            })?;

        let mut canvas = RgbImage::from_pixel(width, height, self.background);
        let matrix_rgb = DynamicImage::ImageLuma8(matrix.clone()).to_rgb8();
        imageops::replace(&mut canvas, &matrix_rgb, 0, 0);
        if bands.is_empty() {
            return Ok(Artifact { image: canvas });
        }

        let renderer = self
            .renderer
            .as_mut()
            .ok_or(CompositionError::NoRenderer)?;
        let mut slot_top = matrix.height();
        for band in bands {
            let style = TextStyle {
                size: band.font_size,
                weight: band.weight,
                color: self.text_color,
            };
            let text_width = renderer.measure(&band.text, &style);
            let x = ((width as f32 - text_width) / 2.0).round() as i32;
            let y = (slot_top + band.padding_top) as i32;
            renderer.draw(&mut canvas, &band.text, x, y, &style);
            slot_top += band.height;
        }

        Ok(Artifact { image: canvas })
    }

    /// Encode, resolve and compose in one step.
    pub fn render(
        &mut self,
        code: &Code,
        timestamp: Option<&Timestamp>,
    ) -> Result<Artifact, CompositionError> {
        let matrix = self.encode(code)?;
        let bands = self.resolve_bands(code, timestamp)?;
        let artifact = self.compose(&matrix, &bands)?;
        tracing::debug!(
            %code,
            width = artifact.width(),
            height = artifact.height(),
            bands = bands.len(),
            "composed artifact"
        );
        Ok(artifact)
    }
}
