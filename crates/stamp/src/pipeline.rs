//! End-to-end render pipeline

use std::path::PathBuf;

use stamp_render::{Canvas, Painter, save_png};
use stamp_text::{BoundingBox, FontResolution, FontResolver};
use tracing::info;

use crate::{RenderConfig, Result, StampError};

/// Which font path a run took
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOutcome {
    /// The configured font was used
    Requested { name: String },
    /// The built-in font replaced it; `reason` is the load error
    Fallback { name: String, reason: String },
}

impl FontOutcome {
    pub fn name(&self) -> &str {
        match self {
            FontOutcome::Requested { name } | FontOutcome::Fallback { name, .. } => name,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FontOutcome::Fallback { .. })
    }
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub font: FontOutcome,
    /// Measured text box relative to the draw origin
    pub bbox: BoundingBox,
    /// Draw origin on the canvas
    pub origin: (i32, i32),
    /// Where the PNG goes
    pub output: PathBuf,
}

impl RenderReport {
    /// Canvas pixels the text may have touched
    pub fn canvas_rect(&self) -> BoundingBox {
        self.bbox.translate(self.origin.0, self.origin.1)
    }
}

/// Draw the configured text into a new canvas without writing it
pub fn render(config: &RenderConfig) -> Result<(Canvas, RenderReport)> {
    render_with_resolver(config, &mut FontResolver::new(config.fallback))
}

/// Like [`render`], resolving fonts through a caller-supplied resolver
pub fn render_with_resolver(
    config: &RenderConfig,
    resolver: &mut FontResolver,
) -> Result<(Canvas, RenderReport)> {
    config.validate()?;

    let mut painter = Painter::new(config.width, config.height)?;

    let (font, outcome) = match resolver.resolve(&config.font, config.font_size) {
        FontResolution::Requested(font) => {
            let outcome = FontOutcome::Requested { name: font.name().to_string() };
            (font, outcome)
        }
        FontResolution::Fallback { font, reason } => {
            let outcome = FontOutcome::Fallback {
                name: font.name().to_string(),
                reason: reason.to_string(),
            };
            (font, outcome)
        }
        FontResolution::Failed(err) => return Err(StampError::Font(err)),
    };

    let drawn = painter.draw_centered(&font, &config.text, config.color)?;

    let report = RenderReport {
        font: outcome,
        bbox: drawn.bbox,
        origin: drawn.origin,
        output: config.output.clone(),
    };
    Ok((painter.into_canvas(), report))
}

/// Render and write the PNG to `config.output`, replacing any existing file
pub fn run(config: &RenderConfig) -> Result<RenderReport> {
    let (canvas, report) = render(config)?;
    save_png(&canvas, &config.output)?;
    info!(
        output = %report.output.display(),
        font = report.font.name(),
        fallback = report.font.is_fallback(),
        "rendered {:?}",
        config.text
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamp_text::{FallbackPolicy, FontSource};

    fn missing_font() -> RenderConfig {
        RenderConfig::default().font(FontSource::path("/definitely/missing/font.ttc"))
    }

    #[test]
    fn test_render_with_fallback() {
        let (canvas, report) = render(&missing_font()).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (512, 512));
        assert!(report.font.is_fallback());
        assert_eq!(report.bbox, BoundingBox::new(1, 0, 7, 7));
        assert_eq!(report.origin, (253, 252));
    }

    #[test]
    fn test_failed_resolution_is_error() {
        let config = missing_font().fallback(FallbackPolicy::Never);
        let err = render(&config).unwrap_err();
        assert!(matches!(err, StampError::Font(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_invalid_config_checked_first() {
        let config = missing_font().canvas(0, 0).fallback(FallbackPolicy::Never);
        assert!(matches!(render(&config), Err(StampError::Config(_))));
    }

    #[test]
    fn test_report_canvas_rect() {
        let report = RenderReport {
            font: FontOutcome::Requested { name: "x".into() },
            bbox: BoundingBox::new(1, 2, 3, 4),
            origin: (10, 20),
            output: PathBuf::from("x.png"),
        };
        assert_eq!(report.canvas_rect(), BoundingBox::new(11, 22, 13, 24));
        assert_eq!(report.font.name(), "x");
    }
}
