//! stamp Text - font resolution and glyph rasterization
//!
//! This crate turns a string into an ink coverage mask:
//! - Font loading from a file path or a system family (fontdb)
//! - Fallback to a built-in bitmap font with an explicit resolution result
//! - Text shaping (rustybuzz - HarfBuzz port)
//! - Text measurement relative to a top-left draw origin
//! - Anti-aliased rasterization (tiny-skia)

pub mod bbox;
pub mod font;
pub mod render;
pub mod shaping;

pub use bbox::BoundingBox;
pub use font::{
    BitmapFont, FallbackPolicy, Font, FontDatabase, FontFace, FontId, FontLoadError, FontQuery,
    FontResolution, FontResolver, FontSource, OutlineFont,
};
pub use render::{GlyphRasterizer, TextMask};
pub use shaping::{ShapedGlyph, ShapedRun, TextShaper};

/// Text rendering error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Failed to parse font: {0}")]
    FontParsing(String),

    #[error("Shaping failed: {0}")]
    ShapingFailed(String),

    #[error("Rasterization failed: {0}")]
    RasterizationFailed(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
