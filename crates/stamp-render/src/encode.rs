//! PNG output

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::info;

use crate::{Canvas, RenderError, Result};

/// Encode the canvas as an 8-bit RGBA PNG
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(
        &canvas.as_rgba_bytes(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(out)
}

/// Encode the canvas and write it to `path`, replacing any existing file
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let bytes = encode_png(canvas)?;
    std::fs::write(path, &bytes)
        .map_err(|source| RenderError::Write { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
    Ok(())
}
