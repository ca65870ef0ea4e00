use image::RgbaImage;

use crate::geometry::BoundingBox;

/// Find the tight bounding box of every pixel with non-zero alpha
///
/// RGB values are ignored. Returns `None` when the image is fully transparent
/// (including zero-sized images).
pub fn find_opaque_bounds(img: &RgbaImage) -> Option<BoundingBox> {
    let (width, height) = img.dimensions();
    let mut min_x = width;
    let mut max_x = 0;
    let mut min_y = height;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] > 0 {
            found = true;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    found.then(|| BoundingBox::new(min_x, min_y, max_x + 1, max_y + 1))
}
