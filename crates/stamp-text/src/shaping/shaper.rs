//! Text shaper using rustybuzz

use rustybuzz::{Face, UnicodeBuffer, shape};

use super::{ShapedGlyph, ShapedRun};
use crate::{Result, TextError};

/// Left-to-right text shaper using HarfBuzz (via rustybuzz)
#[derive(Debug, Clone, Copy, Default)]
pub struct TextShaper;

impl TextShaper {
    pub fn new() -> Self {
        TextShaper
    }

    /// Shape text with raw font data
    pub fn shape_with_data(
        &self,
        font_data: &[u8],
        face_index: u32,
        text: &str,
        font_size: f32,
    ) -> Result<ShapedRun> {
        let face = Face::from_slice(font_data, face_index)
            .ok_or_else(|| TextError::ShapingFailed(format!("face {face_index} is not shapeable")))?;

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.set_direction(rustybuzz::Direction::LeftToRight);

        let output = shape(&face, &[], buffer);

        let glyphs: Vec<ShapedGlyph> = output
            .glyph_infos()
            .iter()
            .zip(output.glyph_positions())
            .map(|(info, pos)| ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
                x_advance: pos.x_advance,
                y_advance: pos.y_advance,
                cluster: info.cluster,
            })
            .collect();

        Ok(ShapedRun::new(glyphs, font_size, face.units_per_em() as u16))
    }
}
