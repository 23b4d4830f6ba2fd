//! Text band descriptors.

use serde::{Deserialize, Serialize};
use tagpress_model::{Code, Timestamp};

use crate::error::CompositionError;

/// What a band displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BandContent {
    /// The activation code's digits.
    Code,
    /// The activation timestamp, formatted by the composer.
    Timestamp,
    /// Fixed text such as a title line.
    Static { text: String },
}

/// Configured slot beneath the matrix.
///
/// Bands stack top to bottom in list order. Each occupies exactly `height`
/// pixels; the text's top edge sits `padding_top` pixels into the slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSpec {
    pub content: BandContent,
    pub font_size: f32,
    pub height: u32,
    #[serde(default)]
    pub padding_top: u32,
    #[serde(default)]
    pub weight: Option<f32>,
}

impl BandSpec {
    pub fn new(content: BandContent, font_size: f32, height: u32) -> Self {
        Self {
            content,
            font_size,
            height,
            padding_top: 0,
            weight: None,
        }
    }

    pub fn code(font_size: f32, height: u32) -> Self {
        Self::new(BandContent::Code, font_size, height)
    }

    pub fn timestamp(font_size: f32, height: u32) -> Self {
        Self::new(BandContent::Timestamp, font_size, height)
    }

    pub fn text(text: impl Into<String>, font_size: f32, height: u32) -> Self {
        Self::new(BandContent::Static { text: text.into() }, font_size, height)
    }

    #[must_use]
    pub fn with_padding_top(mut self, padding_top: u32) -> Self {
        self.padding_top = padding_top;
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Check that the text's top edge lands inside the slot.
    pub fn validate(&self, index: usize) -> Result<(), CompositionError> {
        if self.padding_top > 0 && self.padding_top >= self.height {
            return Err(CompositionError::PaddingExceedsHeight {
                band: index,
                padding_top: self.padding_top,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Fill in the text for one activation.
    ///
    /// `index` identifies the band in error messages.
    pub fn resolve(
        &self,
        index: usize,
        code: &Code,
        timestamp: Option<&str>,
    ) -> Result<TextBand, CompositionError> {
        self.validate(index)?;
        let text = match &self.content {
            BandContent::Code => code.to_string(),
            BandContent::Timestamp => timestamp
                .ok_or(CompositionError::MissingTimestamp { band: index })?
                .to_string(),
            BandContent::Static { text } => text.clone(),
        };
        Ok(TextBand {
            text,
            font_size: self.font_size,
            weight: self.weight,
            height: self.height,
            padding_top: self.padding_top,
        })
    }
}

/// A band with its text resolved, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBand {
    pub text: String,
    pub font_size: f32,
    pub weight: Option<f32>,
    pub height: u32,
    pub padding_top: u32,
}

/// Band lists for the layouts used in practice.
pub mod layouts {
    use super::BandSpec;

    /// Matrix only.
    pub fn bare() -> Vec<BandSpec> {
        Vec::new()
    }

    /// Matrix with the code printed large underneath.
    pub fn code_caption() -> Vec<BandSpec> {
        vec![BandSpec::code(60.0, 80).with_padding_top(5)]
    }

    /// Code, two title lines and the activation time, each in its own size.
    pub fn ticket(title: &str, subtitle: &str) -> Vec<BandSpec> {
        vec![
            BandSpec::code(50.0, 65).with_padding_top(5),
            BandSpec::text(title, 30.0, 40).with_weight(700.0),
            BandSpec::text(subtitle, 22.0, 32),
            BandSpec::timestamp(18.0, 30),
        ]
    }
}
