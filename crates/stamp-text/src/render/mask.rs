//! Coverage masks produced by rasterization

use crate::BoundingBox;

/// 8-bit ink coverage of a piece of text
///
/// The mask covers exactly its bounding box: sample `(i, j)` belongs to
/// pixel `(bbox.left + i, bbox.top + j)` relative to the draw origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMask {
    bbox: BoundingBox,
    coverage: Vec<u8>,
}

impl TextMask {
    /// Mask with no ink
    pub fn empty(bbox: BoundingBox) -> Self {
        Self { bbox, coverage: vec![0; bbox.width() as usize * bbox.height() as usize] }
    }

    /// Wrap row-major coverage; `None` if the length does not match the box
    pub fn from_coverage(bbox: BoundingBox, coverage: Vec<u8>) -> Option<Self> {
        (coverage.len() == bbox.width() as usize * bbox.height() as usize)
            .then_some(Self { bbox, coverage })
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn width(&self) -> u32 {
        self.bbox.width()
    }

    pub fn height(&self) -> u32 {
        self.bbox.height()
    }

    /// Row-major coverage samples
    pub fn coverage(&self) -> &[u8] {
        &self.coverage
    }

    /// Coverage at mask-local coordinates
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width() && y < self.height() {
            self.coverage.get((y * self.width() + x) as usize).copied()
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width() && y < self.height() {
            let idx = (y * self.width() + x) as usize;
            self.coverage[idx] = value;
        }
    }

    /// Number of samples with any ink
    pub fn ink_count(&self) -> usize {
        self.coverage.iter().filter(|&&c| c > 0).count()
    }

    /// Whether the mask leaves no ink at all
    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|&c| c == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask_has_box_size() {
        let mask = TextMask::empty(BoundingBox::new(1, 2, 4, 6));
        assert_eq!(mask.coverage().len(), 12);
        assert!(mask.is_blank());
        assert_eq!(mask.get(2, 3), Some(0));
        assert_eq!(mask.get(3, 0), None);
    }

    #[test]
    fn test_from_coverage_checks_length() {
        let bbox = BoundingBox::new(0, 0, 2, 2);
        assert!(TextMask::from_coverage(bbox, vec![0; 3]).is_none());

        let mask = TextMask::from_coverage(bbox, vec![0, 255, 128, 0]).unwrap();
        assert_eq!(mask.get(1, 0), Some(255));
        assert_eq!(mask.get(0, 1), Some(128));
        assert_eq!(mask.ink_count(), 2);
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut mask = TextMask::empty(BoundingBox::new(0, 0, 2, 1));
        mask.set(5, 5, 255);
        mask.set(1, 0, 255);
        assert_eq!(mask.coverage(), &[0, 255]);
    }
}
