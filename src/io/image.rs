//! Image decode and encode at the crate boundary

use crate::io::error::{MosaicError, Result};
use crate::raster::Bitmap;
use image::RgbImage;
use std::path::Path;

/// Load an image file into an owned bitmap
///
/// Decoding goes through [`Bitmap::from_dynamic`], so higher-precision
/// channels are normalized at this single point and alpha is dropped.
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] with the offending path when the
/// file is missing, unreadable, or not a decodable image.
pub fn load_bitmap<P: AsRef<Path>>(path: P) -> Result<Bitmap> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(Bitmap::from_dynamic(&img))
}

/// Save a bitmap as an 8-bit RGB image
///
/// The format is chosen from the path extension by the `image` crate.
/// RGB output has no alpha channel, so every written pixel is fully
/// opaque.
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when the parent directory cannot
/// be created and [`MosaicError::ImageExport`] when encoding fails.
pub fn save_bitmap<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let img = RgbImage::from_fn(bitmap.width(), bitmap.height(), |x, y| {
        image::Rgb(bitmap.get(x, y).map_or([0, 0, 0], |color| color.channels()))
    });
    img.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
