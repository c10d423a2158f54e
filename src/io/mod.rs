//! Input/output operations and error handling

/// On-disk persistence of resized tile bitmaps
pub mod cache;
/// Command-line interface and run orchestration
pub mod cli;
/// Matching constants and configuration defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Image decode and encode at the crate boundary
pub mod image;
/// Tile library enumeration with stable keys
pub mod library;
/// Stage progress display
pub mod progress;
