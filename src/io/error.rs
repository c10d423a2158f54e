//! Error types and context helpers for mosaic operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode an image from the filesystem
    ///
    /// Fatal for the target image; tile-level occurrences are skipped and
    /// reported during palette construction.
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode an image to the filesystem
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Dimension parameter validation failed
    ///
    /// Covers non-positive dimensions, upscaling grids, and footprint
    /// mismatches. Always surfaced before pixel work begins.
    InvalidDimension {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A zero-pixel region was passed to the color reducer
    ///
    /// Indicates a dimension-computation defect: block partitioning never
    /// produces empty blocks, so this is a programmer error, not a user
    /// error.
    EmptyRegion {
        /// Width of the offending region
        width: u32,
        /// Height of the offending region
        height: u32,
    },

    /// No usable tiles were available for matching
    EmptyPalette {
        /// Candidates seen during palette construction
        candidates: usize,
        /// Candidates that were skipped
        skipped: usize,
    },

    /// A tile key was inserted more than once
    DuplicateTile {
        /// The repeated key
        key: String,
    },

    /// An assignment entry indexes outside the palette
    TileIndex {
        /// The invalid palette index
        index: usize,
        /// Number of tiles in the palette
        tile_count: usize,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidDimension {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid dimension '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyRegion { width, height } => {
                write!(f, "Cannot average a {width}x{height} region with no pixels")
            }
            Self::EmptyPalette {
                candidates,
                skipped,
            } => {
                write!(
                    f,
                    "Palette contains no usable tiles ({candidates} candidates, {skipped} skipped)"
                )
            }
            Self::DuplicateTile { key } => {
                write!(f, "Tile key '{key}' is already present in the palette")
            }
            Self::TileIndex { index, tile_count } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds (palette holds {tile_count})"
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid dimension error
pub fn invalid_dimension(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidDimension {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an empty palette error
pub const fn empty_palette(candidates: usize, skipped: usize) -> MosaicError {
    MosaicError::EmptyPalette {
        candidates,
        skipped,
    }
}
