//! Matching constants and runtime configuration defaults

// Distance weights approximating human luma sensitivity; green dominates
// perceived brightness and blue contributes least
/// Red channel weight in the matching metric
pub const LUMA_WEIGHT_RED: f64 = 0.30;
/// Green channel weight in the matching metric
pub const LUMA_WEIGHT_GREEN: f64 = 0.59;
/// Blue channel weight in the matching metric
pub const LUMA_WEIGHT_BLUE: f64 = 0.11;

// Default values for configurable parameters
/// Default output grid width in cells
pub const DEFAULT_GRID_WIDTH: u32 = 64;
/// Default output grid height in cells
pub const DEFAULT_GRID_HEIGHT: u32 = 64;
/// Default width each tile is resized to
pub const DEFAULT_TILE_WIDTH: u32 = 32;
/// Default height each tile is resized to
pub const DEFAULT_TILE_HEIGHT: u32 = 32;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

/// File extensions considered when scanning the tile library
pub const TILE_EXTENSIONS: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png"];
