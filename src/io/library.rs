//! Tile library enumeration with stable keys

use crate::io::configuration::TILE_EXTENSIONS;
use crate::io::error::{MosaicError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A candidate tile: stable key and source path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileEntry {
    /// Key derived from the file name without its extension
    pub key: String,
    /// Path to the candidate image
    pub path: PathBuf,
}

/// Result of scanning a tile library directory
#[derive(Debug, Default)]
pub struct LibraryScan {
    /// Usable entries, sorted lexicographically by key
    pub entries: Vec<TileEntry>,
    /// Paths dropped because another file already claimed their key
    pub duplicates: Vec<PathBuf>,
}

/// Enumerate candidate tile images in a directory
///
/// Regular files with a supported extension become entries keyed by file
/// stem, sorted lexicographically by key so downstream iteration order is
/// reproducible. When two files share a stem (`a.jpg` and `a.png`), the
/// lexicographically first path wins and the rest are reported as
/// duplicates. An empty result is not an error here; the palette stage
/// raises it once skips are accounted for.
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when the directory cannot be read.
pub fn scan(dir: &Path) -> Result<LibraryScan> {
    let reader = std::fs::read_dir(dir).map_err(|e| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read tile library",
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in reader {
        let path = entry
            .map_err(|e| MosaicError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read tile library",
                source: e,
            })?
            .path();
        if path.is_file() && has_tile_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut result = LibraryScan::default();
    let mut seen = HashSet::new();
    for path in paths {
        let Some(key) = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
        else {
            continue;
        };
        if seen.insert(key.clone()) {
            result.entries.push(TileEntry { key, path });
        } else {
            result.duplicates.push(path);
        }
    }
    result.entries.sort_by(|a, b| a.key.cmp(&b.key));

    Ok(result)
}

fn has_tile_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            TILE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(extension))
        })
}
