//! Centering arithmetic

use stamp_text::BoundingBox;

/// Draw origin that centers the measured extent of `bbox` on a canvas
///
/// `x = floor((width - (r - l)) / 2)`, `y = floor((height - (b - t)) / 2)`.
/// Only the extent is centered; the box's own offset from the origin is not
/// compensated. Text wider than the canvas yields a negative origin.
pub fn center_origin(bbox: BoundingBox, width: u32, height: u32) -> (i32, i32) {
    let text_w = bbox.right as i64 - bbox.left as i64;
    let text_h = bbox.bottom as i64 - bbox.top as i64;
    let x = (width as i64 - text_w).div_euclid(2);
    let y = (height as i64 - text_h).div_euclid(2);
    (x as i32, y as i32)
}
