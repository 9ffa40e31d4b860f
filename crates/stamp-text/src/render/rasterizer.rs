//! Glyph rasterization

use ttf_parser::{GlyphId, OutlineBuilder};

use super::TextMask;
use crate::font::FontFace;
use crate::{BoundingBox, Result, TextError};

/// A glyph placed relative to the draw origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    /// Glyph ID
    pub glyph_id: u16,
    /// Pen x position in pixels
    pub x: f32,
    /// Baseline y position in pixels (grows downward)
    pub baseline: f32,
}

/// Text rasterizer using tiny-skia
pub struct GlyphRasterizer {
    /// Whether edges are anti-aliased
    pub anti_alias: bool,
}

impl GlyphRasterizer {
    /// Create a new anti-aliasing rasterizer
    pub fn new() -> Self {
        Self { anti_alias: true }
    }

    /// Rasterize placed glyphs into a mask covering `bbox`
    ///
    /// The pixmap is sized to `bbox`, so ink outside it is dropped.
    pub fn rasterize(
        &self,
        face: &FontFace,
        glyphs: &[PlacedGlyph],
        scale: f32,
        bbox: BoundingBox,
    ) -> Result<TextMask> {
        if bbox.is_empty() {
            return Ok(TextMask::empty(bbox));
        }

        let mut builder = PathBuilder::new(scale);
        for glyph in glyphs {
            // Shift so the box's top-left corner lands on pixmap (0, 0)
            builder.set_origin(glyph.x - bbox.left as f32, glyph.baseline - bbox.top as f32);
            face.outline_glyph(GlyphId(glyph.glyph_id), &mut builder);
        }

        let Some(path) = builder.finish() else {
            return Ok(TextMask::empty(bbox));
        };

        let mut pixmap = tiny_skia::Pixmap::new(bbox.width(), bbox.height()).ok_or_else(|| {
            TextError::RasterizationFailed(format!(
                "cannot allocate {}x{} glyph pixmap",
                bbox.width(),
                bbox.height()
            ))
        })?;

        let mut paint = tiny_skia::Paint::default();
        paint.set_color(tiny_skia::Color::WHITE);
        paint.anti_alias = self.anti_alias;

        pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );

        // Extract alpha channel as coverage
        let coverage: Vec<u8> = pixmap.pixels().iter().map(|p| p.alpha()).collect();

        TextMask::from_coverage(bbox, coverage)
            .ok_or_else(|| TextError::RasterizationFailed("coverage size mismatch".into()))
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Path builder that converts ttf-parser outlines to tiny-skia paths
struct PathBuilder {
    builder: tiny_skia::PathBuilder,
    scale: f32,
    origin_x: f32,
    origin_y: f32,
}

impl PathBuilder {
    fn new(scale: f32) -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
            scale,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.origin_x = x;
        self.origin_y = y;
    }

    fn transform_x(&self, x: f32) -> f32 {
        self.origin_x + x * self.scale
    }

    fn transform_y(&self, y: f32) -> f32 {
        self.origin_y - y * self.scale // Flip Y axis
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.transform_x(x), self.transform_y(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.transform_x(x), self.transform_y(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x2), self.transform_y(y2),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builder_flips_y() {
        let mut builder = PathBuilder::new(0.5);
        builder.set_origin(10.0, 20.0);
        assert_eq!(builder.transform_x(4.0), 12.0);
        assert_eq!(builder.transform_y(4.0), 18.0);
        assert_eq!(builder.transform_y(-4.0), 22.0);
    }

    #[test]
    fn test_square_outline_fills_interior() {
        let mut builder = PathBuilder::new(1.0);
        builder.set_origin(0.0, 4.0);
        builder.move_to(0.0, 0.0);
        builder.line_to(4.0, 0.0);
        builder.line_to(4.0, 4.0);
        builder.line_to(0.0, 4.0);
        builder.close();
        let path = builder.finish().unwrap();

        let mut pixmap = tiny_skia::Pixmap::new(4, 4).unwrap();
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(tiny_skia::Color::WHITE);
        paint.anti_alias = true;
        pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 255));
    }
}
