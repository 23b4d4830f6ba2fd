//! Text measurement and rasterization.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use swash::scale::{Render, ScaleContext, Source};
use swash::shape::ShapeContext;
use swash::zeno::{Format, Vector};
use swash::{CacheKey, FontRef};

use crate::error::FontError;

/// How a run of text is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    /// Variable-font weight axis value, e.g. 700.0 for bold.
    pub weight: Option<f32>,
    pub color: Rgb<u8>,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            weight: None,
            color: Rgb([0, 0, 0]),
        }
    }
}

/// Drawing capability used to paint band text.
pub trait TextRenderer {
    /// Advance width of `text` in pixels.
    fn measure(&mut self, text: &str, style: &TextStyle) -> f32;

    /// Paint `text` with its top-left corner at `(x, y)`, clipping to the canvas.
    fn draw(&mut self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, style: &TextStyle);
}

/// Owned font bytes plus the location of the face inside them.
struct FontData {
    data: Vec<u8>,
    offset: u32,
    key: CacheKey,
}

impl FontData {
    fn parse(data: Vec<u8>) -> Option<Self> {
        let font = FontRef::from_index(&data, 0)?;
        let (offset, key) = (font.offset, font.key);
        Some(Self { data, offset, key })
    }

    fn as_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }
}

/// [`TextRenderer`] that shapes with `swash` and alpha-blends glyph masks.
pub struct SwashRenderer {
    font: FontData,
    scale_context: ScaleContext,
    shape_context: ShapeContext,
}

impl SwashRenderer {
    /// Load the first face of a TrueType/OpenType file.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let data = fs::read(path).map_err(|e| FontError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let font = FontData::parse(data).ok_or_else(|| FontError::Invalid {
            path: path.to_path_buf(),
        })?;
        tracing::debug!(path = %path.display(), "loaded font");
        Ok(Self::with_font(font))
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontError> {
        let font = FontData::parse(data).ok_or(FontError::InvalidData)?;
        Ok(Self::with_font(font))
    }

    fn with_font(font: FontData) -> Self {
        Self {
            font,
            scale_context: ScaleContext::new(),
            shape_context: ShapeContext::new(),
        }
    }
}

impl TextRenderer for SwashRenderer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> f32 {
        let font = self.font.as_ref();
        let mut builder = self.shape_context.builder(font).size(style.size);
        if let Some(weight) = style.weight {
            builder = builder.variations(&[("wght", weight)]);
        }
        let mut shaper = builder.build();
        shaper.add_str(text);

        let mut width = 0.0;
        shaper.shape_with(|cluster| {
            for glyph in cluster.glyphs {
                width += glyph.advance;
            }
        });
        width
    }

    fn draw(&mut self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, style: &TextStyle) {
        let font = self.font.as_ref();

        let mut shape_builder = self.shape_context.builder(font).size(style.size);
        let mut scale_builder = self.scale_context.builder(font).size(style.size).hint(true);
        if let Some(weight) = style.weight {
            shape_builder = shape_builder.variations(&[("wght", weight)]);
            scale_builder = scale_builder.variations(&[("wght", weight)]);
        }
        let mut shaper = shape_builder.build();
        let mut scaler = scale_builder.build();
        shaper.add_str(text);

        let mut pen_x = x as f32;
        // Baseline sits one em below the top edge.
        let baseline = y as f32 + style.size;

        shaper.shape_with(|cluster| {
            for glyph in cluster.glyphs {
                let rendered = Render::new(&[Source::Outline])
                    .format(Format::Alpha)
                    .offset(Vector::new(glyph.x, glyph.y))
                    .render(&mut scaler, glyph.id);

                if let Some(mask) = rendered {
                    let left = (pen_x + mask.placement.left as f32) as i32;
                    let top = (baseline - mask.placement.top as f32) as i32;
                    blend_mask(
                        canvas,
                        &mask.data,
                        mask.placement.width,
                        mask.placement.height,
                        (left, top),
                        style.color,
                    );
                }
                pen_x += glyph.advance;
            }
        });
    }
}

/// Alpha-blend an 8-bit coverage mask onto the canvas.
fn blend_mask(
    canvas: &mut RgbImage,
    mask: &[u8],
    width: u32,
    height: u32,
    origin: (i32, i32),
    color: Rgb<u8>,
) {
    for row in 0..height {
        for col in 0..width {
            let Some(&coverage) = mask.get((row * width + col) as usize) else {
                return;
            };
            if coverage == 0 {
                continue;
            }
            let dest_x = origin.0 + col as i32;
            let dest_y = origin.1 + row as i32;
            if dest_x < 0
                || dest_y < 0
                || dest_x as u32 >= canvas.width()
                || dest_y as u32 >= canvas.height()
            {
                continue;
            }
            let pixel = canvas.get_pixel_mut(dest_x as u32, dest_y as u32);
            let alpha = f32::from(coverage) / 255.0;
            for channel in 0..3 {
                pixel[channel] = (f32::from(color[channel]) * alpha
                    + f32::from(pixel[channel]) * (1.0 - alpha)) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_full_coverage_paints_color() {
        let mut canvas = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        blend_mask(&mut canvas, &[255; 4], 2, 2, (1, 1), Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(1, 1), &Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(2, 2), &Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(canvas.get_pixel(3, 3), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_blend_clips_outside_canvas() {
        let mut canvas = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        blend_mask(&mut canvas, &[255; 9], 3, 3, (-1, -1), Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(1, 1), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_blend_half_coverage_mixes() {
        let mut canvas = RgbImage::from_pixel(1, 1, Rgb([255, 255, 255]));
        blend_mask(&mut canvas, &[128], 1, 1, (0, 0), Rgb([0, 0, 0]));
        let value = canvas.get_pixel(0, 0)[0];
        assert!((120..=130).contains(&value), "got {value}");
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        assert!(matches!(
            SwashRenderer::from_bytes(vec![0u8; 64]),
            Err(FontError::InvalidData)
        ));
    }

    #[test]
    fn test_missing_font_file_is_read_error() {
        let err = SwashRenderer::from_file(Path::new("/nonexistent/tagpress.ttf"))
            .err()
            .unwrap();
        assert!(matches!(err, FontError::Read { .. }));
    }
}
