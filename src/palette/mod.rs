//! Palette construction from candidate tile images
//!
//! A palette reduces each candidate tile to a representative color plus a
//! footprint-sized bitmap, keyed by a stable identifier and held in a
//! fixed lexicographic order.

/// Ordered palette accumulation and nearest-color lookup
pub mod builder;
/// Tile identity and footprint types
pub mod tile;

pub use builder::{Palette, PaletteBuilder};
pub use tile::{Tile, TileFootprint};
