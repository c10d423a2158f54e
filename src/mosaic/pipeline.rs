//! Configuration validation and the staged pipeline driver

use crate::io::error::{Result, invalid_dimension};
use crate::mosaic::compositor::compose;
use crate::mosaic::matcher::assign_tiles;
use crate::palette::{Palette, TileFootprint};
use crate::raster::{Bitmap, downsample, validate_grid};

/// Grid and tile dimensions for one mosaic run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Output grid width in cells
    pub grid_width: u32,
    /// Output grid height in cells
    pub grid_height: u32,
    /// Dimensions each tile is resized to
    pub footprint: TileFootprint,
}

impl MosaicConfig {
    /// Positivity checks, surfaced before any processing begins
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidDimension`] when a grid or
    /// footprint dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 {
            return Err(invalid_dimension(
                "grid_width",
                &self.grid_width,
                &"grid dimensions must be positive",
            ));
        }
        if self.grid_height == 0 {
            return Err(invalid_dimension(
                "grid_height",
                &self.grid_height,
                &"grid dimensions must be positive",
            ));
        }
        self.footprint.validate()
    }

    /// Bounds check against a decoded target
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidDimension`] when the grid
    /// exceeds the target resolution; the system performs no upscaling.
    pub fn validate_against(&self, target: &Bitmap) -> Result<()> {
        validate_grid(
            target.width(),
            target.height(),
            self.grid_width,
            self.grid_height,
        )
    }
}

/// Run the three core stages over an already-built palette
///
/// Downsamples the target to the configured grid, assigns each cell its
/// nearest tile, and composites the final canvas. Each stage's output is
/// an immutable input to the next.
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidDimension`] for invalid or
/// upscaling dimensions or a palette whose footprint disagrees with the
/// configuration, and [`crate::MosaicError::EmptyPalette`] for an empty
/// palette. All are surfaced before composition writes any pixel.
pub fn build_mosaic(target: &Bitmap, palette: &Palette, config: &MosaicConfig) -> Result<Bitmap> {
    config.validate()?;
    config.validate_against(target)?;
    if palette.footprint() != config.footprint {
        return Err(invalid_dimension(
            "tile_footprint",
            &format!(
                "{}x{}",
                palette.footprint().width,
                palette.footprint().height
            ),
            &format!(
                "palette footprint differs from configured {}x{}",
                config.footprint.width, config.footprint.height
            ),
        ));
    }

    let grid = downsample(target, config.grid_width, config.grid_height)?;
    let assignment = assign_tiles(&grid, palette)?;
    compose(&assignment, palette)
}
