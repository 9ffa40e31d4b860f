//! Canvas - pixel buffer backed by tiny-skia

use stamp_text::TextMask;
use tiny_skia::{Pixmap, PremultipliedColorU8};

use crate::Color;

/// RGBA canvas, fully transparent on creation
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a transparent canvas; `None` for zero or oversized dimensions
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill the whole canvas with a color
    pub fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    /// Read a pixel as straight (non-premultiplied) RGBA
    ///
    /// `None` outside the canvas.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Composite a coverage mask source-over in `color`
    ///
    /// Mask sample `(i, j)` lands on pixel
    /// `(x + bbox.left + i, y + bbox.top + j)`; samples outside the canvas
    /// are dropped.
    pub fn draw_mask(&mut self, mask: &TextMask, x: i32, y: i32, color: Color) {
        let bbox = mask.bbox();
        let (width, height) = (self.width() as i64, self.height() as i64);
        let stride = self.width() as usize;
        let pixels = self.pixmap.pixels_mut();

        for my in 0..mask.height() {
            let py = y as i64 + bbox.top as i64 + my as i64;
            if py < 0 || py >= height {
                continue;
            }
            for mx in 0..mask.width() {
                let px = x as i64 + bbox.left as i64 + mx as i64;
                if px < 0 || px >= width {
                    continue;
                }
                let coverage = mask.get(mx, my).unwrap_or(0);
                if coverage == 0 {
                    continue;
                }
                let idx = py as usize * stride + px as usize;
                pixels[idx] = blend(pixels[idx], color, coverage);
            }
        }
    }

    /// Pixel data as straight RGBA bytes, row-major
    pub fn as_rgba_bytes(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }
}

/// Source-over of `color` scaled by `coverage` onto a premultiplied pixel
fn blend(dst: PremultipliedColorU8, color: Color, coverage: u8) -> PremultipliedColorU8 {
    let sa = mul_div255(color.a, coverage);
    let inv = 255 - sa;
    let channel = |src: u8, dst: u8| mul_div255(src, sa).saturating_add(mul_div255(dst, inv));

    PremultipliedColorU8::from_rgba(
        channel(color.r, dst.red()),
        channel(color.g, dst.green()),
        channel(color.b, dst.blue()),
        sa.saturating_add(mul_div255(dst.alpha(), inv)),
    )
    .unwrap_or(dst)
}

/// Rounded `a * b / 255`
fn mul_div255(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}
