//! Shaped text run

/// A shaped glyph with position
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
    /// Glyph ID in the font
    pub glyph_id: u16,
    /// X offset from current position (in font units)
    pub x_offset: i32,
    /// Y offset from current position (in font units)
    pub y_offset: i32,
    /// Horizontal advance (in font units)
    pub x_advance: i32,
    /// Vertical advance (in font units)
    pub y_advance: i32,
    /// Cluster index (original character position)
    pub cluster: u32,
}

/// A run of shaped glyphs
#[derive(Debug, Clone)]
pub struct ShapedRun {
    /// The shaped glyphs
    pub glyphs: Vec<ShapedGlyph>,
    /// Font size used for shaping
    pub font_size: f32,
    /// Units per em from the font
    pub units_per_em: u16,
}

impl ShapedRun {
    /// Create a new shaped run
    pub fn new(glyphs: Vec<ShapedGlyph>, font_size: f32, units_per_em: u16) -> Self {
        Self { glyphs, font_size, units_per_em }
    }

    /// Scale factor to convert font units to pixels
    pub fn scale(&self) -> f32 {
        self.font_size / self.units_per_em as f32
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over glyphs with pen positions in pixels (y grows upward)
    pub fn positioned_glyphs(&self) -> impl Iterator<Item = PositionedGlyph> + '_ {
        let scale = self.scale();
        let mut x = 0.0;
        let mut y = 0.0;

        self.glyphs.iter().map(move |g| {
            let pos = PositionedGlyph {
                glyph_id: g.glyph_id,
                x: x + g.x_offset as f32 * scale,
                y: y + g.y_offset as f32 * scale,
                cluster: g.cluster,
            };
            x += g.x_advance as f32 * scale;
            y += g.y_advance as f32 * scale;
            pos
        })
    }
}

/// A glyph with pixel position
#[derive(Debug, Clone, Copy)]
pub struct PositionedGlyph {
    /// Glyph ID in the font
    pub glyph_id: u16,
    /// X position in pixels
    pub x: f32,
    /// Y position in pixels, relative to the baseline
    pub y: f32,
    /// Cluster index (original character position)
    pub cluster: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(id: u16, x_advance: i32, x_offset: i32) -> ShapedGlyph {
        ShapedGlyph {
            glyph_id: id,
            x_offset,
            y_offset: 0,
            x_advance,
            y_advance: 0,
            cluster: id as u32,
        }
    }

    #[test]
    fn test_scale() {
        let run = ShapedRun::new(vec![glyph(1, 500, 0), glyph(2, 500, 0)], 20.0, 1000);
        assert!((run.scale() - 0.02).abs() < 1e-6);
        assert_eq!(run.len(), 2);
    }

    #[test]
    fn test_positions_accumulate_advances() {
        let run = ShapedRun::new(vec![glyph(1, 1000, 0), glyph(2, 1000, 100)], 10.0, 1000);
        let positions: Vec<_> = run.positioned_glyphs().collect();
        assert_eq!(positions[0].x, 0.0);
        assert!((positions[1].x - 11.0).abs() < 1e-4);
        assert_eq!(positions[1].glyph_id, 2);
    }
}
