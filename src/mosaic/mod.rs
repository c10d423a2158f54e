//! Mosaic assembly: nearest-color matching and canvas composition
//!
//! This module contains the two consuming stages of the pipeline plus the
//! staged driver that ties them to the downsampler:
//! - Per-cell nearest-color tile assignment
//! - Pixel-exact composition of the final canvas
//! - Configuration validation and stage ordering

/// Pixel-exact canvas composition from matched tiles
pub mod compositor;
/// Nearest-color assignment of grid cells to palette tiles
pub mod matcher;
/// Configuration validation and the staged pipeline driver
pub mod pipeline;

pub use compositor::compose;
pub use matcher::{Assignment, assign_tiles};
pub use pipeline::{MosaicConfig, build_mosaic};
