//! Painter - draws text onto a canvas

use stamp_text::{BoundingBox, Font};
use tracing::debug;

use crate::{Canvas, Color, RenderError, Result, center_origin};

/// Placement of text drawn by [`Painter::draw_centered`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnText {
    /// Measured box relative to the draw origin
    pub bbox: BoundingBox,
    /// Draw origin on the canvas
    pub origin: (i32, i32),
}

impl DrawnText {
    /// Canvas pixels the text may have touched
    pub fn canvas_rect(&self) -> BoundingBox {
        self.bbox.translate(self.origin.0, self.origin.1)
    }
}

/// Painter owning the canvas it draws into
pub struct Painter {
    canvas: Canvas,
}

impl Painter {
    /// Painter over a fresh transparent canvas
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let canvas =
            Canvas::new(width, height).ok_or(RenderError::InvalidCanvasSize { width, height })?;
        Ok(Self { canvas })
    }

    /// Get the canvas
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Draw `text` with its top-left anchor at `(x, y)`
    ///
    /// Only the part of the text that lands on the canvas is rasterized.
    pub fn draw_text(&mut self, font: &Font, text: &str, x: i32, y: i32, color: Color) -> Result<()> {
        let mask = font.rasterize_within(text, self.visible_area(x, y))?;
        self.canvas.draw_mask(&mask, x, y, color);
        Ok(())
    }

    /// Canvas bounds relative to a draw origin at `(x, y)`
    fn visible_area(&self, x: i32, y: i32) -> BoundingBox {
        let width = i32::try_from(self.canvas.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(self.canvas.height()).unwrap_or(i32::MAX);
        BoundingBox::new(
            x.saturating_neg(),
            y.saturating_neg(),
            width.saturating_sub(x),
            height.saturating_sub(y),
        )
    }

    /// Measure `text`, center its extent and draw it
    pub fn draw_centered(&mut self, font: &Font, text: &str, color: Color) -> Result<DrawnText> {
        let bbox = font.measure(text)?;
        let origin = center_origin(bbox, self.canvas.width(), self.canvas.height());
        debug!(?bbox, ?origin, "centered text");

        self.draw_text(font, text, origin.0, origin.1, color)?;
        Ok(DrawnText { bbox, origin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamp_text::BitmapFont;

    #[test]
    fn test_invalid_size() {
        assert!(matches!(
            Painter::new(0, 512),
            Err(RenderError::InvalidCanvasSize { width: 0, height: 512 })
        ));
    }

    #[test]
    fn test_centered_bitmap_digit() {
        let mut painter = Painter::new(512, 512).unwrap();
        let font = Font::Bitmap(BitmapFont::builtin());
        let drawn = painter.draw_centered(&font, "0", Color::WHITE).unwrap();

        // Box (1, 0, 7, 7): origin ((512 - 6) / 2, (512 - 7) / 2)
        assert_eq!(drawn.bbox, BoundingBox::new(1, 0, 7, 7));
        assert_eq!(drawn.origin, (253, 252));
        assert_eq!(drawn.canvas_rect(), BoundingBox::new(254, 252, 260, 259));

        let canvas = painter.canvas();
        // Top row of the digit starts one pixel into the box
        assert_eq!(canvas.get_pixel(255, 252), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(254, 252), Some(Color::TRANSPARENT));
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_draw_text_at_anchor() {
        let mut painter = Painter::new(32, 32).unwrap();
        let font = Font::Bitmap(BitmapFont::builtin());
        painter.draw_text(&font, "1", 10, 5, Color::rgb(255, 0, 0)).unwrap();
        // Bottom row of '1' is 0b01111110: columns 1..=6, row 6
        assert_eq!(painter.canvas().get_pixel(11, 11), Some(Color::rgb(255, 0, 0)));
        assert_eq!(painter.canvas().get_pixel(10, 11), Some(Color::TRANSPARENT));
        assert_eq!(painter.canvas().get_pixel(11, 12), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_visible_area() {
        let painter = Painter::new(512, 512).unwrap();
        assert_eq!(painter.visible_area(0, 0), BoundingBox::new(0, 0, 512, 512));
        assert_eq!(painter.visible_area(-100, 20), BoundingBox::new(100, -20, 612, 492));
    }

    #[test]
    fn test_text_wider_than_canvas_is_clipped() {
        let font = Font::Bitmap(BitmapFont::builtin());
        let text = "0123456789";

        let mut painter = Painter::new(32, 32).unwrap();
        let drawn = painter.draw_centered(&font, text, Color::WHITE).unwrap();
        assert!(drawn.bbox.width() > 32);
        assert!(drawn.origin.0 < 0);

        // Same pixels as compositing the unclipped mask
        let mut reference = Canvas::new(32, 32).unwrap();
        reference.draw_mask(&font.rasterize(text).unwrap(), drawn.origin.0, drawn.origin.1, Color::WHITE);
        assert_eq!(painter.canvas().as_rgba_bytes(), reference.as_rgba_bytes());
        assert!(painter.canvas().as_rgba_bytes().iter().any(|&b| b == 255));
    }
}
