//! Ordered palette accumulation and nearest-color lookup

use crate::color::{Rgb8, weighted_distance};
use crate::io::error::{MosaicError, Result, empty_palette};
use crate::palette::tile::{Tile, TileFootprint};
use crate::raster::{Bitmap, downsample};
use std::collections::BTreeMap;

/// Accumulates candidate tiles into an ordered [`Palette`]
///
/// Candidates that fail to decode or are smaller than the footprint are
/// skipped by the caller via [`PaletteBuilder::record_skip`]; only the
/// wholly empty result is fatal, at [`PaletteBuilder::finish`].
#[derive(Debug)]
pub struct PaletteBuilder {
    footprint: TileFootprint,
    tiles: BTreeMap<String, Tile>,
    candidates: usize,
    skipped: usize,
}

impl PaletteBuilder {
    /// Create a builder for the given tile footprint
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidDimension`] for a zero-sized
    /// footprint.
    pub fn new(footprint: TileFootprint) -> Result<Self> {
        footprint.validate()?;
        Ok(Self {
            footprint,
            tiles: BTreeMap::new(),
            candidates: 0,
            skipped: 0,
        })
    }

    /// The footprint every accepted tile is resized to
    pub const fn footprint(&self) -> TileFootprint {
        self.footprint
    }

    /// Resize a candidate image to the footprint and record it
    ///
    /// The resized bitmap is produced by block-average downsampling and
    /// its whole-image mean becomes the representative color. On success
    /// a reference to the stored tile is returned so callers can persist
    /// the resized bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DuplicateTile`] for an already-present key
    /// and [`MosaicError::InvalidDimension`] when the candidate is smaller
    /// than the footprint (upscaling is never performed). Both are
    /// skippable: call [`PaletteBuilder::record_skip`] and continue.
    pub fn insert_image(&mut self, key: &str, image: &Bitmap) -> Result<&Tile> {
        if self.tiles.contains_key(key) {
            return Err(MosaicError::DuplicateTile {
                key: key.to_string(),
            });
        }
        let bitmap = downsample(image, self.footprint.width, self.footprint.height)?;
        self.insert_tile(key, bitmap)
    }

    /// Record an already-resized bitmap, e.g. one recovered from a cache
    ///
    /// The representative color is recomputed from the bitmap so cached
    /// and freshly-resized tiles go through the same reduction.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DuplicateTile`] for an already-present key
    /// and [`MosaicError::InvalidDimension`] when the bitmap does not
    /// match the footprint.
    pub fn insert_resized(&mut self, key: &str, bitmap: Bitmap) -> Result<&Tile> {
        if self.tiles.contains_key(key) {
            return Err(MosaicError::DuplicateTile {
                key: key.to_string(),
            });
        }
        if !self.footprint.matches(&bitmap) {
            return Err(crate::io::error::invalid_dimension(
                "resized tile",
                &format!("{}x{}", bitmap.width(), bitmap.height()),
                &format!(
                    "does not match the {}x{} footprint",
                    self.footprint.width, self.footprint.height
                ),
            ));
        }
        self.insert_tile(key, bitmap)
    }

    fn insert_tile(&mut self, key: &str, bitmap: Bitmap) -> Result<&Tile> {
        let color = bitmap.average()?;
        self.candidates += 1;
        let tile = self
            .tiles
            .entry(key.to_string())
            .or_insert_with(|| Tile::new(key.to_string(), color, bitmap));
        Ok(tile)
    }

    /// Count a candidate that was seen but could not be used
    pub const fn record_skip(&mut self) {
        self.candidates += 1;
        self.skipped += 1;
    }

    /// Finalize into an immutable palette
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPalette`] when no candidate survived;
    /// any downstream matching would be meaningless.
    pub fn finish(self) -> Result<Palette> {
        if self.tiles.is_empty() {
            return Err(empty_palette(self.candidates, self.skipped));
        }
        Ok(Palette {
            footprint: self.footprint,
            tiles: self.tiles.into_values().collect(),
        })
    }
}

/// An immutable, ordered collection of tiles
///
/// Iteration order is lexicographic by key. The matcher's tie-break
/// depends on this order being fixed, so it must never fall back to an
/// unordered mapping's incidental order.
#[derive(Debug, Clone)]
pub struct Palette {
    footprint: TileFootprint,
    tiles: Vec<Tile>,
}

impl Palette {
    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the palette holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The footprint shared by every tile bitmap
    pub const fn footprint(&self) -> TileFootprint {
        self.footprint
    }

    /// Tile at `index` in key order
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Iterate tiles in key order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Index of the tile nearest to `color` under the luma-weighted metric
    ///
    /// Ties break to the lowest index, i.e. the lexicographically first
    /// key: the strict comparison never replaces an equal-distance
    /// earlier tile.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPalette`] if the palette has no tiles.
    /// Palettes built through [`PaletteBuilder::finish`] are never empty.
    pub fn nearest(&self, color: Rgb8) -> Result<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, tile) in self.tiles.iter().enumerate() {
            let distance = weighted_distance(tile.color(), color);
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index).ok_or_else(|| empty_palette(0, 0))
    }
}
