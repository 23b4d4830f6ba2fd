//! Matrix encoding.

use image::{GrayImage, Luma, imageops};
use qrcode::{EcLevel, QrCode, Version};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CompositionError;

/// Turns a text payload into a square black-on-white matrix image.
pub trait MatrixEncoder {
    fn encode(&self, payload: &str) -> Result<GrayImage, CompositionError>;
}

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// ~7% recovery.
    #[default]
    L,
    /// ~15% recovery.
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(value: ErrorCorrection) -> Self {
        match value {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// QR symbol parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderSettings {
    /// Fixed symbol version (1-40). `None` picks the smallest version that fits;
    /// configuration files spell that as `version = 0`.
    #[serde(
        deserialize_with = "version_or_auto",
        serialize_with = "version_or_zero"
    )]
    pub version: Option<i16>,
    pub error_correction: ErrorCorrection,
    /// Pixels per module, both axes.
    pub module_size: u32,
    /// Quiet zone width in modules.
    pub border: u32,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            version: Some(1),
            error_correction: ErrorCorrection::L,
            module_size: 10,
            border: 4,
        }
    }
}

fn version_or_auto<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i16>, D::Error> {
    let version = i16::deserialize(deserializer)?;
    Ok((version != 0).then_some(version))
}

fn version_or_zero<S: Serializer>(version: &Option<i16>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i16(version.unwrap_or(0))
}

impl EncoderSettings {
    /// Side length in pixels of a symbol with `modules` modules per side.
    #[must_use]
    pub fn side_pixels(&self, modules: u32) -> u32 {
        (modules + 2 * self.border) * self.module_size.max(1)
    }
}

/// [`MatrixEncoder`] backed by the `qrcode` crate.
#[derive(Debug, Clone, Default)]
pub struct QrEncoder {
    settings: EncoderSettings,
}

impl QrEncoder {
    pub fn new(settings: EncoderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EncoderSettings {
        &self.settings
    }
}

impl MatrixEncoder for QrEncoder {
    fn encode(&self, payload: &str) -> Result<GrayImage, CompositionError> {
        let level = EcLevel::from(self.settings.error_correction);
        let symbol = match self.settings.version {
            Some(version) => QrCode::with_version(payload, Version::Normal(version), level),
            None => QrCode::with_error_correction_level(payload, level),
        }
        .map_err(|e| CompositionError::Encode {
            payload_len: payload.len(),
            reason: e.to_string(),
        })?;

        let module = self.settings.module_size.max(1);
        let bare = symbol
            .render::<Luma<u8>>()
            .quiet_zone(false)
            .module_dimensions(module, module)
            .build();

        // Quiet zone is drawn here so its width is configurable.
        let margin = self.settings.border * module;
        let mut matrix = GrayImage::from_pixel(
            bare.width() + 2 * margin,
            bare.height() + 2 * margin,
            Luma([255]),
        );
        imageops::replace(&mut matrix, &bare, i64::from(margin), i64::from(margin));
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_one_dimensions() {
        // 21 modules + 2 * 4 border, 10px each
        let matrix = QrEncoder::default().encode("4071").unwrap();
        assert_eq!(matrix.dimensions(), (290, 290));
        assert_eq!(EncoderSettings::default().side_pixels(21), 290);
    }

    #[test]
    fn test_border_is_white_and_symbol_has_dark_modules() {
        let matrix = QrEncoder::default().encode("4071").unwrap();
        assert_eq!(matrix.get_pixel(0, 0), &Luma([255]));
        assert_eq!(matrix.get_pixel(39, 39), &Luma([255]));
        // Top-left finder pattern starts right after the quiet zone.
        assert_eq!(matrix.get_pixel(40, 40), &Luma([0]));
    }

    #[test]
    fn test_fixed_version_rejects_oversized_payload() {
        let encoder = QrEncoder::new(EncoderSettings {
            version: Some(1),
            error_correction: ErrorCorrection::H,
            ..EncoderSettings::default()
        });
        let payload = "0123456789".repeat(5);
        let err = encoder.encode(&payload).unwrap_err();
        assert!(matches!(err, CompositionError::Encode { payload_len: 50, .. }));
    }

    #[test]
    fn test_auto_version_grows_to_fit() {
        let encoder = QrEncoder::new(EncoderSettings {
            version: None,
            module_size: 1,
            border: 0,
            ..EncoderSettings::default()
        });
        let matrix = encoder.encode(&"x".repeat(100)).unwrap();
        assert!(matrix.width() > 21);
        assert_eq!(matrix.width(), matrix.height());
    }
}
