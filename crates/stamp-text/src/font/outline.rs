//! Outline fonts scaled to a pixel size

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use ttf_parser::GlyphId;

use super::FontFace;
use crate::render::{GlyphRasterizer, PlacedGlyph};
use crate::shaping::TextShaper;
use crate::{BoundingBox, Result, TextError, TextMask};

/// A TrueType/OpenType face at a fixed pixel size
#[derive(Clone)]
pub struct OutlineFont {
    data: Arc<Vec<u8>>,
    index: u32,
    size: f32,
    name: String,
}

/// Glyph placement and ink extent of a laid out string
struct Layout {
    glyphs: Vec<PlacedGlyph>,
    bbox: BoundingBox,
    scale: f32,
}

impl OutlineFont {
    /// Validate font data and wrap it at `size` pixels per em
    pub fn from_bytes(data: Vec<u8>, index: u32, size: f32) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(TextError::FontParsing(format!("invalid font size {size}")));
        }

        let name = {
            let face = FontFace::parse(&data, index)
                .map_err(|e| TextError::FontParsing(format!("face {index}: {e}")))?;
            if face.units_per_em() == 0 {
                return Err(TextError::FontParsing("units per em is zero".into()));
            }
            face.full_name().unwrap_or_else(|| format!("face {index}"))
        };

        if rustybuzz::Face::from_slice(&data, index).is_none() {
            return Err(TextError::FontParsing(format!("face {index} cannot be shaped")));
        }

        Ok(Self { data: Arc::new(data), index, size, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixels per em
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Face index inside a collection
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Distance from the draw origin down to the baseline, in pixels
    pub fn ascent(&self) -> Result<f32> {
        let face = self.face()?;
        Ok(ascent_px(&face, self.scale(&face)))
    }

    /// Bounding box of `text` relative to the draw origin
    pub fn measure(&self, text: &str) -> Result<BoundingBox> {
        let face = self.face()?;
        Ok(self.layout(&face, text)?.bbox)
    }

    /// Anti-aliased coverage mask of `text`
    pub fn rasterize(&self, text: &str) -> Result<TextMask> {
        let face = self.face()?;
        let layout = self.layout(&face, text)?;
        GlyphRasterizer::new().rasterize(&face, &layout.glyphs, layout.scale, layout.bbox)
    }

    /// Like [`OutlineFont::rasterize`], keeping only the part inside `clip`
    pub fn rasterize_within(&self, text: &str, clip: BoundingBox) -> Result<TextMask> {
        let face = self.face()?;
        let layout = self.layout(&face, text)?;
        let visible = layout.bbox.intersect(&clip);
        GlyphRasterizer::new().rasterize(&face, &layout.glyphs, layout.scale, visible)
    }

    fn face(&self) -> Result<FontFace<'_>> {
        FontFace::parse(&self.data, self.index).map_err(|e| TextError::FontParsing(e.to_string()))
    }

    fn scale(&self, face: &FontFace) -> f32 {
        self.size / face.units_per_em() as f32
    }

    fn layout(&self, face: &FontFace, text: &str) -> Result<Layout> {
        let run = TextShaper::new().shape_with_data(&self.data, self.index, text, self.size)?;
        let scale = self.scale(face);
        let ascent = ascent_px(face, scale);

        let mut glyphs = Vec::with_capacity(run.len());
        let mut bbox = BoundingBox::EMPTY;

        for pos in run.positioned_glyphs() {
            let placed = PlacedGlyph {
                glyph_id: pos.glyph_id,
                x: pos.x,
                baseline: ascent - pos.y,
            };

            if let Some(rect) = face.glyph_bounding_box(GlyphId(pos.glyph_id)) {
                let ink = BoundingBox::enclosing(
                    placed.x + rect.x_min as f32 * scale,
                    placed.baseline - rect.y_max as f32 * scale,
                    placed.x + rect.x_max as f32 * scale,
                    placed.baseline - rect.y_min as f32 * scale,
                );
                bbox = bbox.union(&ink);
            }

            glyphs.push(placed);
        }

        debug!(font = %self.name, size = self.size, glyphs = glyphs.len(), ?bbox, "laid out text");

        Ok(Layout { glyphs, bbox, scale })
    }
}

/// The ascender line is rounded up to whole pixels
fn ascent_px(face: &FontFace, scale: f32) -> f32 {
    (face.ascender() as f32 * scale).ceil()
}

impl fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFont")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("size", &self.size)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage() {
        let err = OutlineFont::from_bytes(b"garbage".to_vec(), 0, 400.0).unwrap_err();
        assert!(matches!(err, TextError::FontParsing(_)));
    }

    #[test]
    fn test_rejects_bad_size() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(OutlineFont::from_bytes(Vec::new(), 0, size).is_err());
        }
    }
}
