//! Block-average downsampling to a fixed grid

use crate::color::Rgb8;
use crate::io::error::{Result, invalid_dimension};
use crate::raster::bitmap::Bitmap;
use crate::raster::blocks::block_span;
use ndarray::Array2;

/// Check grid dimensions against a source size
///
/// The system performs no upscaling: both grid dimensions must be positive
/// and no larger than the source.
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidDimension`] for non-positive or
/// upscaling dimensions.
pub fn validate_grid(
    source_width: u32,
    source_height: u32,
    grid_width: u32,
    grid_height: u32,
) -> Result<()> {
    if grid_width == 0 {
        return Err(invalid_dimension(
            "grid_width",
            &grid_width,
            &"grid dimensions must be positive",
        ));
    }
    if grid_height == 0 {
        return Err(invalid_dimension(
            "grid_height",
            &grid_height,
            &"grid dimensions must be positive",
        ));
    }
    if grid_width > source_width {
        return Err(invalid_dimension(
            "grid_width",
            &grid_width,
            &format!("exceeds source width {source_width} (no upscaling)"),
        ));
    }
    if grid_height > source_height {
        return Err(invalid_dimension(
            "grid_height",
            &grid_height,
            &format!("exceeds source height {source_height} (no upscaling)"),
        ));
    }
    Ok(())
}

/// Downsample `source` to `grid_width × grid_height` by block averaging
///
/// Partitions the source into half-open rectangular blocks via
/// [`block_span`] and assigns each output cell the floor-divided mean of
/// its block. Cell `(i, j)` depends only on its own block, so the
/// reduction is independent across cells.
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidDimension`] for non-positive or
/// upscaling grid dimensions. [`crate::MosaicError::EmptyRegion`] cannot
/// occur once the dimensions validate.
pub fn downsample(source: &Bitmap, grid_width: u32, grid_height: u32) -> Result<Bitmap> {
    validate_grid(source.width(), source.height(), grid_width, grid_height)?;

    let mut cells = Array2::from_elem(
        (grid_height as usize, grid_width as usize),
        Rgb8::default(),
    );
    for ((row, col), cell) in cells.indexed_iter_mut() {
        let xs = block_span(source.width(), grid_width, col as u32);
        let ys = block_span(source.height(), grid_height, row as u32);
        *cell = source.region_average(xs, ys)?;
    }

    Ok(Bitmap::from_cells(cells))
}
