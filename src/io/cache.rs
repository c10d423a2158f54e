//! On-disk persistence of resized tile bitmaps
//!
//! Resizing a large tile library dominates runtime, so the resized
//! footprint-sized bitmaps can be reused across runs. Representative
//! colors are never cached; they are recomputed from the bitmap so the
//! reduction path stays single.

use crate::io::error::{MosaicError, Result};
use crate::io::image::{load_bitmap, save_bitmap};
use crate::palette::TileFootprint;
use crate::raster::Bitmap;
use std::path::{Path, PathBuf};

/// Directory-backed store of footprint-sized tile bitmaps
///
/// Entries are PNGs named after the tile key. A cached entry whose
/// dimensions disagree with the requested footprint reads as a miss, so
/// changing the footprint between runs invalidates the cache naturally.
#[derive(Debug, Clone)]
pub struct TileCache {
    dir: PathBuf,
}

impl TileCache {
    /// Open a cache directory, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::FileSystem`] when the directory cannot be
    /// created.
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir).map_err(|e| MosaicError::FileSystem {
            path: dir.to_path_buf(),
            operation: "create cache directory",
            source: e,
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Cached bitmap for `key`, if present with the expected footprint
    ///
    /// Unreadable or stale entries read as a miss rather than an error;
    /// the caller falls back to resizing the original candidate.
    pub fn load(&self, key: &str, footprint: TileFootprint) -> Option<Bitmap> {
        let path = self.entry_path(key);
        if !path.exists() {
            return None;
        }
        let bitmap = load_bitmap(&path).ok()?;
        footprint.matches(&bitmap).then_some(bitmap)
    }

    /// Persist a resized bitmap under `key`
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::ImageExport`] when the entry cannot be
    /// written.
    pub fn store(&self, key: &str, bitmap: &Bitmap) -> Result<()> {
        save_bitmap(bitmap, self.entry_path(key))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.png"))
    }
}
