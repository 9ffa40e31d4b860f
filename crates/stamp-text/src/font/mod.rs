//! Font loading, matching and fallback

mod bitmap;
mod database;
mod face;
mod matching;
mod outline;
mod resolve;

pub use bitmap::BitmapFont;
pub use database::FontDatabase;
pub use face::FontFace;
pub use matching::{FontQuery, resolve_generic_family};
pub use outline::OutlineFont;
pub use resolve::{FallbackPolicy, FontLoadError, FontResolution, FontResolver, FontSource};

use crate::{BoundingBox, Result, TextMask};

/// Unique identifier for a font in the system database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub fontdb::ID);

/// A font ready to measure and rasterize text
#[derive(Debug, Clone)]
pub enum Font {
    /// TrueType/OpenType face scaled to a pixel size
    Outline(OutlineFont),
    /// Built-in bitmap font with a fixed cell size
    Bitmap(BitmapFont),
}

impl Font {
    /// Human readable font name
    pub fn name(&self) -> &str {
        match self {
            Font::Outline(font) => font.name(),
            Font::Bitmap(_) => BitmapFont::NAME,
        }
    }

    /// Pixel size the font renders at
    pub fn size(&self) -> f32 {
        match self {
            Font::Outline(font) => font.size(),
            Font::Bitmap(_) => BitmapFont::CELL_SIZE as f32,
        }
    }

    /// Bounding box of `text` relative to the draw origin
    pub fn measure(&self, text: &str) -> Result<BoundingBox> {
        match self {
            Font::Outline(font) => font.measure(text),
            Font::Bitmap(font) => Ok(font.measure(text)),
        }
    }

    /// Coverage mask of `text`; its box always equals [`Font::measure`]
    pub fn rasterize(&self, text: &str) -> Result<TextMask> {
        match self {
            Font::Outline(font) => font.rasterize(text),
            Font::Bitmap(font) => Ok(font.rasterize(text)),
        }
    }

    /// Coverage mask of the part of `text` inside `clip`
    ///
    /// The mask box is the measured box intersected with `clip`, so the
    /// allocation never exceeds the clip area.
    pub fn rasterize_within(&self, text: &str, clip: BoundingBox) -> Result<TextMask> {
        match self {
            Font::Outline(font) => font.rasterize_within(text, clip),
            Font::Bitmap(font) => Ok(font.rasterize_within(text, clip)),
        }
    }
}

impl From<OutlineFont> for Font {
    fn from(font: OutlineFont) -> Self {
        Font::Outline(font)
    }
}

impl From<BitmapFont> for Font {
    fn from(font: BitmapFont) -> Self {
        Font::Bitmap(font)
    }
}
