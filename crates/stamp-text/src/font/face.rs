//! Font face with parsed metrics

use ttf_parser::{Face, FaceParsingError, GlyphId, OutlineBuilder, Rect};

/// Parsed font face with metrics
pub struct FontFace<'a> {
    /// The underlying ttf-parser face
    face: Face<'a>,
}

impl<'a> FontFace<'a> {
    /// Parse a face from font data; `index` selects a face inside a collection
    pub fn parse(data: &'a [u8], index: u32) -> Result<Self, FaceParsingError> {
        Face::parse(data, index).map(|face| Self { face })
    }

    /// Units per em
    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    /// Ascender (above baseline)
    pub fn ascender(&self) -> i16 {
        self.face.ascender()
    }

    /// Tight outline bounds in font units, `None` for empty glyphs
    pub fn glyph_bounding_box(&self, glyph_id: GlyphId) -> Option<Rect> {
        self.face.glyph_bounding_box(glyph_id)
    }

    /// Feed a glyph outline to `builder`
    pub fn outline_glyph(&self, glyph_id: GlyphId, builder: &mut dyn OutlineBuilder) -> Option<Rect> {
        self.face.outline_glyph(glyph_id, builder)
    }

    /// Full font name from the `name` table
    pub fn full_name(&self) -> Option<String> {
        self.face
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FULL_NAME)
            .find_map(|name| name.to_string())
            .or_else(|| {
                self.face
                    .names()
                    .into_iter()
                    .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
                    .find_map(|name| name.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(FontFace::parse(b"not a font at all", 0).is_err());
        assert!(FontFace::parse(&[], 0).is_err());
    }
}
