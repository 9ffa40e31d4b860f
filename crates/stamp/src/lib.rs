//! stamp - render a string centered on a transparent canvas
//!
//! The pipeline allocates a canvas, resolves a font (falling back to a
//! built-in bitmap font when allowed), measures and centers the text, draws
//! it and writes the canvas as PNG.
//!
//! # Example
//!
//! ```no_run
//! use stamp::RenderConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = stamp::run(&RenderConfig::default().output("zero.png"))?;
//! println!("drew with {}", report.font.name());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
mod pipeline;

pub use config::{DEFAULT_FONT_PATH, RenderConfig};
pub use pipeline::{FontOutcome, RenderReport, render, render_with_resolver, run};

/// Errors that can stop a render run
#[derive(Debug, thiserror::Error)]
pub enum StampError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// No font available under the fallback policy
    #[error("Font unavailable: {0}")]
    Font(#[from] stamp_text::FontLoadError),

    /// Drawing, encoding or writing failed
    #[error(transparent)]
    Render(#[from] stamp_render::RenderError),
}

/// Result type alias for render runs
pub type Result<T> = std::result::Result<T, StampError>;
