//! Raster image abstraction and block-average downsampling
//!
//! This module contains the pixel-level building blocks:
//! - Owned bitmap storage with bounds-checked access
//! - Half-open block partitioning of a source axis
//! - Deterministic block-average downsampling to a fixed grid

/// Owned pixel grid with bounds-checked access and region averaging
pub mod bitmap;
/// Half-open block partition of a source axis onto a grid axis
pub mod blocks;
/// Block-average downsampling to a fixed grid
pub mod downsample;

pub use bitmap::Bitmap;
pub use downsample::{downsample, validate_grid};
