use std::any::Any;
use std::fs;
use std::io::{self, Cursor, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader, RgbaImage};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::detection::find_opaque_bounds;
use crate::error::CropError;
use crate::geometry::{BoundingBox, CroppedSize};
use crate::transform::{crop_to_bounds, normalize_transparent};

/// Summary of a successful crop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropReport {
    /// Dimensions of the source image
    pub original: CroppedSize,
    /// Region of the source that was kept
    pub bounds: BoundingBox,
    /// Dimensions of the written image
    pub output: CroppedSize,
}

/// Result of a crop that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropOutcome {
    Cropped(CropReport),
    /// Every pixel had alpha 0; nothing was written
    FullyTransparent,
}

/// Load an image from disk and convert it to RGBA8
///
/// The format is sniffed from the file contents, so a PNG saved with a `.jpg`
/// extension still loads.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, CropError> {
    let load_error = |source: ImageError| CropError::Load {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .map_err(|e| load_error(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| load_error(ImageError::IoError(e)))?
        .decode()
        .map_err(load_error)?;

    debug!(
        "Loaded {:?} ({}x{}, {:?})",
        path,
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.into_rgba8())
}

/// Encode `img` as PNG and write it to `path`, replacing any existing file
///
/// The extension of `path` is ignored; the output is always PNG. The data goes
/// to a temporary file next to `path` which is then renamed over it, so a
/// failed write never leaves a truncated image at `path`.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), CropError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| CropError::unexpected(path, e))?;

    let write_error = |source: io::Error| CropError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(&buf.into_inner()).map_err(write_error)?;
    set_output_permissions(tmp.as_file(), path).map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}

/// Temporary files are created owner-only; give the output the permissions an
/// overwritten file had, or the usual 0644 for a new one
fn set_output_permissions(file: &fs::File, path: &Path) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(existing) => file.set_permissions(existing.permissions()),
        Err(_) => default_permissions(file),
    }
}

#[cfg(unix)]
fn default_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}

/// Crop the image at `source` to its non-transparent content and write it to `dest`
///
/// Fully transparent pixels are rewritten to `(255, 255, 255, 0)` before
/// saving. The crop is the exact bounding box of pixels with alpha > 0, with
/// no padding. A fully transparent source yields
/// [`CropOutcome::FullyTransparent`] and leaves `dest` untouched.
pub fn crop_to_opaque_bounds(source: &Path, dest: &Path) -> Result<CropOutcome, CropError> {
    let mut img = load_rgba(source)?;
    let original = CroppedSize::from(img.dimensions());

    let rewritten = normalize_transparent(&mut img);
    debug!("Normalized {} transparent pixels", rewritten);

    let bounds = match find_opaque_bounds(&img) {
        Some(b) => b,
        None => return Ok(CropOutcome::FullyTransparent),
    };
    if bounds.covers(original.width, original.height) {
        debug!("Opaque bounds {} already span the whole image", bounds);
    } else {
        debug!("Opaque bounds: {}", bounds);
    }

    let cropped = crop_to_bounds(&img, bounds);
    save_png(&cropped, dest)?;

    Ok(CropOutcome::Cropped(CropReport {
        original,
        bounds,
        output: CroppedSize::from(cropped.dimensions()),
    }))
}

/// Like [`crop_to_opaque_bounds`], but a panic inside the image pipeline is
/// turned into [`CropError::Unexpected`] instead of unwinding into the caller
pub fn crop_guarded(source: &Path, dest: &Path) -> Result<CropOutcome, CropError> {
    guard(source, || crop_to_opaque_bounds(source, dest))
}

fn guard<T>(path: &Path, f: impl FnOnce() -> Result<T, CropError>) -> Result<T, CropError> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(CropError::unexpected(path, panic_message(&*payload))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
