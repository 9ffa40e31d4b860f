//! Glyph rendering module

mod mask;
mod rasterizer;

pub use mask::TextMask;
pub use rasterizer::{GlyphRasterizer, PlacedGlyph};
