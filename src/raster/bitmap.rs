//! Owned pixel grid with bounds-checked access and region averaging

use crate::color::{ChannelSum, Rgb8};
use crate::io::error::{MosaicError, Result};
use ndarray::Array2;
use std::ops::Range;

/// An owned RGB image
///
/// Pixels are stored row-major as `(row, col)` = `(y, x)`; the public
/// accessors take `(x, y)` coordinates in `[0, width) × [0, height)`.
/// Construction from decoded files goes through [`Bitmap::from_dynamic`],
/// which applies the crate-wide channel normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pixels: Array2<Rgb8>,
}

impl Bitmap {
    /// Create a bitmap filled with a single color
    pub fn filled(width: u32, height: u32, color: Rgb8) -> Self {
        Self {
            pixels: Array2::from_elem((height as usize, width as usize), color),
        }
    }

    /// Build a bitmap by evaluating `f` at every `(x, y)` coordinate
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> Rgb8,
    {
        Self {
            pixels: Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
                f(x as u32, y as u32)
            }),
        }
    }

    /// Wrap an already-computed cell array
    pub const fn from_cells(pixels: Array2<Rgb8>) -> Self {
        Self { pixels }
    }

    /// Convert a decoded image to an owned bitmap
    ///
    /// All decode paths widen to 16-bit channels first and then reduce
    /// through the shared normalization, so 8-bit and 16-bit sources load
    /// identically. Alpha, if present, is dropped here: the data model is
    /// opaque RGB throughout.
    pub fn from_dynamic(image: &image::DynamicImage) -> Self {
        let rgb16 = image.to_rgb16();
        Self::from_fn(rgb16.width(), rgb16.height(), |x, y| {
            rgb16
                .get_pixel_checked(x, y)
                .map_or_else(Rgb8::default, |pixel| {
                    let image::Rgb([r, g, b]) = *pixel;
                    Rgb8::from_channels16(r, g, b)
                })
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.ncols() as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.nrows() as u32
    }

    /// Pixel at `(x, y)`, or `None` outside the bitmap
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.pixels.get((y as usize, x as usize)).copied()
    }

    /// Write the pixel at `(x, y)`; returns `false` outside the bitmap
    pub fn put(&mut self, x: u32, y: u32, color: Rgb8) -> bool {
        match self.pixels.get_mut((y as usize, x as usize)) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    /// Iterate all pixels as `(x, y, color)`
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb8)> + '_ {
        self.pixels
            .indexed_iter()
            .map(|((y, x), &color)| (x as u32, y as u32, color))
    }

    /// Per-channel floor-divided mean over a half-open pixel region
    ///
    /// This is the color reducer shared by downsampling and palette
    /// construction. Coordinates outside the bitmap contribute nothing,
    /// but callers are expected to pass in-bounds ranges.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyRegion`] if the ranges select no pixels.
    /// Block partitioning guarantees non-empty regions, so this surfaces a
    /// dimension-computation defect rather than a user error.
    pub fn region_average(&self, xs: Range<u32>, ys: Range<u32>) -> Result<Rgb8> {
        let mut sum = ChannelSum::new();
        for y in ys.clone() {
            for x in xs.clone() {
                if let Some(color) = self.get(x, y) {
                    sum.add(color);
                }
            }
        }
        sum.mean().ok_or(MosaicError::EmptyRegion {
            width: xs.end.saturating_sub(xs.start),
            height: ys.end.saturating_sub(ys.start),
        })
    }

    /// Mean color over the whole bitmap
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyRegion`] for a zero-sized bitmap.
    pub fn average(&self) -> Result<Rgb8> {
        self.region_average(0..self.width(), 0..self.height())
    }
}
