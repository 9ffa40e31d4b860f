//! Render configuration
//!
//! Defaults reproduce the classic output: the digit "0" in Helvetica at
//! 400 px, white, centered on a transparent 512x512 canvas, saved as
//! `0.png` in the working directory.

use std::path::PathBuf;

use stamp_render::Color;
use stamp_text::{FallbackPolicy, FontSource};

use crate::{Result, StampError};

/// Font file tried first
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

/// Everything a render run needs
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Where the PNG is written; an existing file is replaced
    pub output: PathBuf,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Requested font
    pub font: FontSource,
    /// Pixels per em for the requested font
    pub font_size: f32,
    /// Which font failures fall back to the built-in font
    pub fallback: FallbackPolicy,
    /// Text to draw
    pub text: String,
    /// Text color
    pub color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("0.png"),
            width: 512,
            height: 512,
            font: FontSource::path(DEFAULT_FONT_PATH),
            font_size: 400.0,
            fallback: FallbackPolicy::AnyError,
            text: "0".to_string(),
            color: Color::WHITE,
        }
    }
}

impl RenderConfig {
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn font(mut self, font: FontSource) -> Self {
        self.font = font;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Reject configurations that cannot produce an image
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StampError::Config(format!(
                "canvas size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(StampError::Config(format!(
                "font size must be a positive number, got {}",
                self.font_size
            )));
        }
        if self.output.as_os_str().is_empty() {
            return Err(StampError::Config("output path is empty".into()));
        }
        if matches!(&self.font, FontSource::Family(name) if name.trim().is_empty()) {
            return Err(StampError::Config("font family is empty".into()));
        }
        Ok(())
    }
}
