//! Command line interface
//!
//! Every flag is optional; without flags the run uses
//! [`RenderConfig::default`].

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stamp_render::Color;
use stamp_text::{FallbackPolicy, FontSource};

use crate::RenderConfig;

#[derive(Debug, Parser)]
#[command(name = "stamp", version, about = "Render text centered on a transparent canvas and save it as PNG")]
pub struct Args {
    /// Output PNG path (replaced if it exists)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Font file to load
    #[arg(long, conflicts_with = "family")]
    pub font: Option<PathBuf>,

    /// Installed font family to look up instead of a file
    #[arg(long)]
    pub family: Option<String>,

    /// Face index inside a font collection
    #[arg(long, requires = "font")]
    pub index: Option<u32>,

    /// Font size in pixels per em
    #[arg(short, long)]
    pub size: Option<f32>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Text to draw
    #[arg(short, long)]
    pub text: Option<String>,

    /// Text color as #rgb, #rrggbb or #rrggbbaa
    #[arg(long, value_parser = parse_color)]
    pub color: Option<Color>,

    /// Which font load failures fall back to the built-in font
    #[arg(long, value_enum)]
    pub fallback: Option<Fallback>,
}

/// `--fallback` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fallback {
    /// Fall back on any font error
    Any,
    /// Fall back only when the font does not exist
    Missing,
    /// Never fall back
    Never,
}

impl From<Fallback> for FallbackPolicy {
    fn from(f: Fallback) -> Self {
        match f {
            Fallback::Any => FallbackPolicy::AnyError,
            Fallback::Missing => FallbackPolicy::MissingOnly,
            Fallback::Never => FallbackPolicy::Never,
        }
    }
}

impl Args {
    /// Apply the given flags on top of the default configuration
    pub fn into_config(self) -> RenderConfig {
        let mut config = RenderConfig::default();

        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(path) = self.font {
            config.font = FontSource::Path { path, index: self.index.unwrap_or(0) };
        } else if let Some(family) = self.family {
            config.font = FontSource::Family(family);
        }
        if let Some(size) = self.size {
            config.font_size = size;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(text) = self.text {
            config.text = text;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(fallback) = self.fallback {
            config.fallback = fallback.into();
        }

        config
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).ok_or_else(|| format!("'{s}' is not a hex color"))
}
