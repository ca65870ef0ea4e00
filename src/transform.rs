use image::{imageops, Rgba, RgbaImage};

use crate::geometry::BoundingBox;

/// Colour every fully transparent pixel is rewritten to
pub const TRANSPARENT_FILL: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Rewrite the RGB of every alpha == 0 pixel to white, keeping alpha at 0
///
/// Returns the number of pixels that were changed.
pub fn normalize_transparent(img: &mut RgbaImage) -> usize {
    let mut rewritten = 0;
    for pixel in img.pixels_mut() {
        if pixel[3] == 0 && *pixel != TRANSPARENT_FILL {
            *pixel = TRANSPARENT_FILL;
            rewritten += 1;
        }
    }
    rewritten
}

/// Copy the region covered by `bounds` into a new image
pub fn crop_to_bounds(img: &RgbaImage, bounds: BoundingBox) -> RgbaImage {
    imageops::crop_imm(img, bounds.left, bounds.top, bounds.width(), bounds.height()).to_image()
}
