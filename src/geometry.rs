use std::fmt;

/// Axis-aligned pixel rectangle with exclusive right/bottom edges
///
/// A box covering the single pixel at (3, 4) is `left=3, top=4, right=4, bottom=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        debug_assert!(left < right && top < bottom, "bounding box must not be empty");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Whether the box spans the whole of a `width` x `height` image
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Width and height of an image in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CroppedSize {
    pub width: u32,
    pub height: u32,
}

impl CroppedSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for CroppedSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for CroppedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_edges() {
        let bbox = BoundingBox::new(40, 30, 50, 50);
        assert_eq!(bbox.width(), 10);
        assert_eq!(bbox.height(), 20);
    }

    #[test]
    fn test_single_pixel_box() {
        let bbox = BoundingBox::new(3, 4, 4, 5);
        assert_eq!((bbox.width(), bbox.height()), (1, 1));
    }

    #[test]
    fn test_covers() {
        assert!(BoundingBox::new(0, 0, 8, 6).covers(8, 6));
        assert!(!BoundingBox::new(1, 0, 8, 6).covers(8, 6));
        assert!(!BoundingBox::new(0, 0, 7, 6).covers(8, 6));
    }

    #[test]
    fn test_display() {
        assert_eq!(BoundingBox::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
        assert_eq!(CroppedSize::new(10, 20).to_string(), "10x20");
    }
}
