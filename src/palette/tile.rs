//! Tile identity and footprint types

use crate::color::Rgb8;
use crate::io::error::{Result, invalid_dimension};
use crate::raster::Bitmap;

/// Fixed output dimensions shared by every resized tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileFootprint {
    /// Width of each resized tile in pixels
    pub width: u32,
    /// Height of each resized tile in pixels
    pub height: u32,
}

impl TileFootprint {
    /// Create a footprint
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check that both sides are positive
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidDimension`] when either side
    /// is zero.
    pub fn validate(self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_dimension(
                "tile_width",
                &self.width,
                &"tile footprint must be positive",
            ));
        }
        if self.height == 0 {
            return Err(invalid_dimension(
                "tile_height",
                &self.height,
                &"tile footprint must be positive",
            ));
        }
        Ok(())
    }

    /// Whether a bitmap has exactly these dimensions
    pub fn matches(self, bitmap: &Bitmap) -> bool {
        bitmap.width() == self.width && bitmap.height() == self.height
    }
}

/// A palette entry: stable key, representative color, resized bitmap
///
/// Tiles are immutable once the palette is built; the matcher reads the
/// color and the compositor reads the bitmap.
#[derive(Debug, Clone)]
pub struct Tile {
    key: String,
    color: Rgb8,
    bitmap: Bitmap,
}

impl Tile {
    pub(crate) const fn new(key: String, color: Rgb8, bitmap: Bitmap) -> Self {
        Self { key, color, bitmap }
    }

    /// Stable identifier, typically the source file stem
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Representative (average) color of the resized bitmap
    pub const fn color(&self) -> Rgb8 {
        self.color
    }

    /// The footprint-sized bitmap used for compositing
    pub const fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
}
