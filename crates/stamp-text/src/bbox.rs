//! Text bounding boxes
//!
//! Boxes are expressed relative to the draw origin: the left edge of the
//! pen at the ascender line. Right and bottom are exclusive.

/// Pixel extent of rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    /// Box of text that leaves no ink
    pub const EMPTY: BoundingBox = BoundingBox { left: 0, top: 0, right: 0, bottom: 0 };

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Smallest integer box enclosing a fractional extent
    pub fn enclosing(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            left: x0.floor() as i32,
            top: y0.floor() as i32,
            right: x1.ceil() as i32,
            bottom: y1.ceil() as i32,
        }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Union of two boxes; empty boxes are ignored
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        BoundingBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Overlap of two boxes; [`BoundingBox::EMPTY`] when they are disjoint
    pub fn intersect(&self, other: &BoundingBox) -> BoundingBox {
        let overlap = BoundingBox {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        if overlap.is_empty() { BoundingBox::EMPTY } else { overlap }
    }

    /// Move the box by a pixel offset
    pub fn translate(&self, dx: i32, dy: i32) -> BoundingBox {
        BoundingBox {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

impl From<BoundingBox> for (i32, i32, i32, i32) {
    fn from(b: BoundingBox) -> Self {
        (b.left, b.top, b.right, b.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_rounds_outward() {
        let b = BoundingBox::enclosing(1.2, 3.9, 10.1, 20.0);
        assert_eq!(b, BoundingBox::new(1, 3, 11, 20));

        let b = BoundingBox::enclosing(-0.5, -2.1, 0.5, 0.0);
        assert_eq!(b, BoundingBox::new(-1, -3, 1, 0));
    }

    #[test]
    fn test_union_skips_empty() {
        let a = BoundingBox::new(2, 2, 4, 4);
        assert_eq!(a.union(&BoundingBox::EMPTY), a);
        assert_eq!(BoundingBox::EMPTY.union(&a), a);

        let b = BoundingBox::new(10, 0, 12, 3);
        assert_eq!(a.union(&b), BoundingBox::new(2, 0, 12, 4));
    }

    #[test]
    fn test_dimensions() {
        let b = BoundingBox::new(-3, 5, 7, 6);
        assert_eq!(b.width(), 10);
        assert_eq!(b.height(), 1);
        assert!(!b.is_empty());
        assert!(BoundingBox::new(4, 4, 4, 9).is_empty());
    }

    #[test]
    fn test_intersect() {
        let a = BoundingBox::new(-5, -5, 10, 10);
        let b = BoundingBox::new(0, 0, 512, 512);
        assert_eq!(a.intersect(&b), BoundingBox::new(0, 0, 10, 10));
        assert_eq!(b.intersect(&a), a.intersect(&b));
        assert_eq!(a.intersect(&BoundingBox::new(20, 20, 30, 30)), BoundingBox::EMPTY);
        assert_eq!(a.intersect(&BoundingBox::new(10, 0, 20, 5)), BoundingBox::EMPTY);
    }

    #[test]
    fn test_translate_and_contains() {
        let b = BoundingBox::new(0, 0, 2, 2).translate(5, 10);
        assert_eq!(b, BoundingBox::new(5, 10, 7, 12));
        assert!(b.contains(5, 10));
        assert!(b.contains(6, 11));
        assert!(!b.contains(7, 11));
        assert!(!b.contains(6, 12));
    }
}
