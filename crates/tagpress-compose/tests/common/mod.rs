//! Test collaborators for composition: no font files or encoders with limits.

use image::{GrayImage, Luma, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use tagpress_compose::{CompositionError, MatrixEncoder, TextRenderer, TextStyle};

/// Draws each string as one solid block half an em wide per character.
pub struct BlockRenderer;

impl TextRenderer for BlockRenderer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> f32 {
        text.chars().count() as f32 * style.size * 0.5
    }

    fn draw(&mut self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, style: &TextStyle) {
        let width = self.measure(text, style).round() as u32;
        let height = (style.size * 0.7).round() as u32;
        if width == 0 || height == 0 {
            return;
        }
        draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(width, height), style.color);
    }
}

/// Encoder that always fails, as if the payload exceeded capacity.
pub struct OverCapacityEncoder;

impl MatrixEncoder for OverCapacityEncoder {
    fn encode(&self, payload: &str) -> Result<GrayImage, CompositionError> {
        Err(CompositionError::Encode {
            payload_len: payload.len(),
            reason: "data too long".to_string(),
        })
    }
}

/// Encoder returning a plain white square of fixed size.
pub struct SquareEncoder(pub u32);

impl MatrixEncoder for SquareEncoder {
    fn encode(&self, _payload: &str) -> Result<GrayImage, CompositionError> {
        Ok(GrayImage::from_pixel(self.0, self.0, Luma([255])))
    }
}

/// Horizontal extent of non-white pixels in rows `top..bottom`.
pub fn ink_span(image: &RgbImage, top: u32, bottom: u32) -> Option<(u32, u32)> {
    let mut span: Option<(u32, u32)> = None;
    for y in top..bottom {
        for x in 0..image.width() {
            if image.get_pixel(x, y).0 != [255, 255, 255] {
                span = Some(match span {
                    Some((lo, hi)) => (lo.min(x), hi.max(x)),
                    None => (x, x),
                });
            }
        }
    }
    span
}
