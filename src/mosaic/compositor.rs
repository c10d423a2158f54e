//! Pixel-exact canvas composition from matched tiles

use crate::color::Rgb8;
use crate::io::error::{MosaicError, Result, invalid_dimension};
use crate::mosaic::matcher::Assignment;
use crate::palette::Palette;
use crate::raster::Bitmap;

/// Composite the final canvas from an assignment grid and palette bitmaps
///
/// Allocates a `(grid_width · tile_width) × (grid_height · tile_height)`
/// canvas and copies each assigned tile bitmap pixel-for-pixel into its
/// cell region. Cell regions are disjoint and exhaustive: tile bitmaps
/// are footprint-sized by construction, so every canvas pixel is written
/// exactly once. Output carries no alpha; export writes fully opaque
/// pixels.
///
/// # Errors
///
/// Returns [`MosaicError::TileIndex`] if an assignment entry falls
/// outside the palette (unreachable through the pipeline, where the
/// matcher produced the entries) and
/// [`crate::MosaicError::InvalidDimension`] when the canvas dimensions
/// overflow `u32`.
pub fn compose(assignment: &Assignment, palette: &Palette) -> Result<Bitmap> {
    let (grid_height, grid_width) = assignment.dim();
    let footprint = palette.footprint();

    let canvas_width = (grid_width as u32)
        .checked_mul(footprint.width)
        .ok_or_else(|| {
            invalid_dimension("canvas_width", &grid_width, &"canvas dimensions overflow u32")
        })?;
    let canvas_height = (grid_height as u32)
        .checked_mul(footprint.height)
        .ok_or_else(|| {
            invalid_dimension(
                "canvas_height",
                &grid_height,
                &"canvas dimensions overflow u32",
            )
        })?;

    let mut canvas = Bitmap::filled(canvas_width, canvas_height, Rgb8::default());
    for ((row, col), &tile_index) in assignment.indexed_iter() {
        let tile = palette.get(tile_index).ok_or(MosaicError::TileIndex {
            index: tile_index,
            tile_count: palette.len(),
        })?;
        let origin_x = col as u32 * footprint.width;
        let origin_y = row as u32 * footprint.height;
        for (x, y, color) in tile.bitmap().enumerate_pixels() {
            canvas.put(origin_x + x, origin_y + y, color);
        }
    }

    Ok(canvas)
}
