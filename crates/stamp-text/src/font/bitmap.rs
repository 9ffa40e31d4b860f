//! Built-in 8x8 bitmap font
//!
//! Used when no outline font can be loaded. Cells are fixed size; the
//! ascender line is the top row of the cell and each cell advances the pen
//! by its full width.

use crate::{BoundingBox, TextMask};

/// Built-in bitmap font with no size control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitmapFont;

impl BitmapFont {
    pub const NAME: &'static str = "builtin 8x8";

    /// Cell width, height and advance in pixels
    pub const CELL_SIZE: u32 = 8;

    pub fn builtin() -> Self {
        BitmapFont
    }

    /// Bounding box of the set bits of `text`
    pub fn measure(&self, text: &str) -> BoundingBox {
        let mut bbox = BoundingBox::EMPTY;
        for (pen, c) in text.chars().enumerate() {
            let cell = glyph_ink(&char_pattern(c));
            bbox = bbox.union(&cell.translate(pen as i32 * Self::CELL_SIZE as i32, 0));
        }
        bbox
    }

    /// Hard-edged coverage mask of `text`
    pub fn rasterize(&self, text: &str) -> TextMask {
        self.rasterize_within(text, self.measure(text))
    }

    /// Coverage mask of the part of `text` inside `clip`
    pub fn rasterize_within(&self, text: &str, clip: BoundingBox) -> TextMask {
        let bbox = self.measure(text).intersect(&clip);
        let mut mask = TextMask::empty(bbox);
        if bbox.is_empty() {
            return mask;
        }

        for (pen, c) in text.chars().enumerate() {
            let pen_x = pen as i32 * Self::CELL_SIZE as i32;
            for (row, &bits) in char_pattern(c).iter().enumerate() {
                for col in 0..8 {
                    let (x, y) = (pen_x + col, row as i32);
                    if (bits >> (7 - col)) & 1 == 1 && bbox.contains(x, y) {
                        mask.set((x - bbox.left) as u32, (y - bbox.top) as u32, 255);
                    }
                }
            }
        }

        mask
    }
}

/// Ink extent of one cell, relative to the cell origin
fn glyph_ink(pattern: &[u8; 8]) -> BoundingBox {
    let mut bbox = BoundingBox::EMPTY;
    for (row, &bits) in pattern.iter().enumerate() {
        if bits == 0 {
            continue;
        }
        let left = bits.leading_zeros() as i32;
        let right = 8 - bits.trailing_zeros() as i32;
        bbox = bbox.union(&BoundingBox::new(left, row as i32, right, row as i32 + 1));
    }
    bbox
}

/// Get 8x8 bitmap pattern for a character (most significant bit is the leftmost column)
fn char_pattern(c: char) -> [u8; 8] {
    match c.to_ascii_lowercase() {
        '0' => [0b00111100, 0b01000110, 0b01001010, 0b01010010, 0b01100010, 0b01000010, 0b00111100, 0b00000000],
        '1' => [0b00011000, 0b00111000, 0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b01111110, 0b00000000],
        '2' => [0b00111100, 0b01000010, 0b00000010, 0b00001100, 0b00110000, 0b01000000, 0b01111110, 0b00000000],
        '3' => [0b00111100, 0b01000010, 0b00000010, 0b00011100, 0b00000010, 0b01000010, 0b00111100, 0b00000000],
        '4' => [0b00000100, 0b00001100, 0b00010100, 0b00100100, 0b01111110, 0b00000100, 0b00000100, 0b00000000],
        '5' => [0b01111110, 0b01000000, 0b01111100, 0b00000010, 0b00000010, 0b01000010, 0b00111100, 0b00000000],
        '6' => [0b00011100, 0b00100000, 0b01000000, 0b01111100, 0b01000010, 0b01000010, 0b00111100, 0b00000000],
        '7' => [0b01111110, 0b00000010, 0b00000100, 0b00001000, 0b00010000, 0b00010000, 0b00010000, 0b00000000],
        '8' => [0b00111100, 0b01000010, 0b01000010, 0b00111100, 0b01000010, 0b01000010, 0b00111100, 0b00000000],
        '9' => [0b00111100, 0b01000010, 0b01000010, 0b00111110, 0b00000010, 0b00000100, 0b00111000, 0b00000000],
        'a' => [0b00111100, 0b01000010, 0b01000010, 0b01111110, 0b01000010, 0b01000010, 0b01000010, 0b00000000],
        'b' => [0b01111100, 0b01000010, 0b01000010, 0b01111100, 0b01000010, 0b01000010, 0b01111100, 0b00000000],
        'c' => [0b00111100, 0b01000010, 0b01000000, 0b01000000, 0b01000000, 0b01000010, 0b00111100, 0b00000000],
        'd' => [0b01111000, 0b01000100, 0b01000010, 0b01000010, 0b01000010, 0b01000100, 0b01111000, 0b00000000],
        'e' => [0b01111110, 0b01000000, 0b01000000, 0b01111100, 0b01000000, 0b01000000, 0b01111110, 0b00000000],
        'f' => [0b01111110, 0b01000000, 0b01000000, 0b01111100, 0b01000000, 0b01000000, 0b01000000, 0b00000000],
        'g' => [0b00111100, 0b01000010, 0b01000000, 0b01001110, 0b01000010, 0b01000010, 0b00111100, 0b00000000],
        'h' => [0b01000010, 0b01000010, 0b01000010, 0b01111110, 0b01000010, 0b01000010, 0b01000010, 0b00000000],
        'i' => [0b00111100, 0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00111100, 0b00000000],
        'j' => [0b00001110, 0b00000100, 0b00000100, 0b00000100, 0b00000100, 0b01000100, 0b00111000, 0b00000000],
        'k' => [0b01000100, 0b01001000, 0b01010000, 0b01100000, 0b01010000, 0b01001000, 0b01000100, 0b00000000],
        'l' => [0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01111110, 0b00000000],
        'm' => [0b01000010, 0b01100110, 0b01011010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b00000000],
        'n' => [0b01000010, 0b01100010, 0b01010010, 0b01001010, 0b01000110, 0b01000010, 0b01000010, 0b00000000],
        'o' => [0b00111100, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b00111100, 0b00000000],
        'p' => [0b01111100, 0b01000010, 0b01000010, 0b01111100, 0b01000000, 0b01000000, 0b01000000, 0b00000000],
        'q' => [0b00111100, 0b01000010, 0b01000010, 0b01000010, 0b01001010, 0b01000100, 0b00111010, 0b00000000],
        'r' => [0b01111100, 0b01000010, 0b01000010, 0b01111100, 0b01010000, 0b01001000, 0b01000100, 0b00000000],
        's' => [0b00111100, 0b01000010, 0b01000000, 0b00111100, 0b00000010, 0b01000010, 0b00111100, 0b00000000],
        't' => [0b01111110, 0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00000000],
        'u' => [0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b00111100, 0b00000000],
        'v' => [0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b00100100, 0b00100100, 0b00011000, 0b00000000],
        'w' => [0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01011010, 0b01100110, 0b01000010, 0b00000000],
        'x' => [0b01000010, 0b00100100, 0b00011000, 0b00011000, 0b00011000, 0b00100100, 0b01000010, 0b00000000],
        'y' => [0b01000010, 0b01000010, 0b00100100, 0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00000000],
        'z' => [0b01111110, 0b00000100, 0b00001000, 0b00010000, 0b00100000, 0b01000000, 0b01111110, 0b00000000],
        '.' => [0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00011000, 0b00011000, 0b00000000],
        ',' => [0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00011000, 0b00011000, 0b00110000, 0b00000000],
        ':' => [0b00000000, 0b00011000, 0b00011000, 0b00000000, 0b00011000, 0b00011000, 0b00000000, 0b00000000],
        '-' => [0b00000000, 0b00000000, 0b00000000, 0b01111110, 0b00000000, 0b00000000, 0b00000000, 0b00000000],
        '+' => [0b00000000, 0b00011000, 0b00011000, 0b01111110, 0b00011000, 0b00011000, 0b00000000, 0b00000000],
        '!' => [0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00000000, 0b00011000, 0b00000000],
        '?' => [0b00111100, 0b01000010, 0b00000010, 0b00001100, 0b00010000, 0b00000000, 0b00010000, 0b00000000],
        _ => [0; 8],
    }
}
