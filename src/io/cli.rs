//! Command-line interface for building photomosaics

use crate::io::cache::TileCache;
use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
    OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{load_bitmap, save_bitmap};
use crate::io::library;
use crate::io::progress::ProgressManager;
use crate::mosaic::{MosaicConfig, build_mosaic};
use crate::palette::{Palette, PaletteBuilder, TileFootprint};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tesserae")]
#[command(
    author,
    version,
    about = "Build a photomosaic of a target image from a tile library"
)]
/// Command-line arguments for the mosaic builder
pub struct Cli {
    /// Target image to approximate
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory containing candidate tile images
    #[arg(short, long, value_name = "DIR")]
    pub tiles: PathBuf,

    /// Output grid width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub grid_width: u32,

    /// Output grid height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub grid_height: u32,

    /// Width each tile is resized to, in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Height each tile is resized to, in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Output path (defaults to the target name with a mosaic suffix)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory for reusing resized tiles across runs
    #[arg(short, long, value_name = "DIR")]
    pub cache: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid and footprint configuration from the arguments
    pub const fn config(&self) -> MosaicConfig {
        MosaicConfig {
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            footprint: TileFootprint::new(self.tile_width, self.tile_height),
        }
    }
}

/// Orchestrates a single mosaic run from CLI arguments
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the full pipeline: palette, downsample, match, compose, save
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, target decoding,
    /// palette construction, matching, or export fails. Individual tile
    /// decode failures are reported and skipped, not fatal.
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();

        let config = self.cli.config();
        config.validate()?;

        let output_path = self.output_path();
        if !self.cli.force && output_path.exists() {
            self.report(&format!(
                "Skipping: {} already exists (use --force to overwrite)",
                output_path.display()
            ));
            return Ok(());
        }

        let target = load_bitmap(&self.cli.target)?;
        config.validate_against(&target)?;

        let palette = self.build_palette(&config)?;
        self.report(&format!(
            "Palette ready: {} tiles at {}x{}",
            palette.len(),
            config.footprint.width,
            config.footprint.height
        ));

        let canvas = build_mosaic(&target, &palette, &config)?;
        save_bitmap(&canvas, &output_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        self.report(&format!(
            "Wrote {} ({}x{}) in {:.1}s",
            output_path.display(),
            canvas.width(),
            canvas.height(),
            start_time.elapsed().as_secs_f64()
        ));

        Ok(())
    }

    fn build_palette(&self, config: &MosaicConfig) -> Result<Palette> {
        let scan = library::scan(&self.cli.tiles)?;
        for duplicate in &scan.duplicates {
            self.report(&format!(
                "Skipping {}: another file already claims its key",
                duplicate.display()
            ));
        }

        let cache = match &self.cli.cache {
            Some(dir) => Some(TileCache::open(dir)?),
            None => None,
        };

        let mut builder = PaletteBuilder::new(config.footprint)?;
        let bar = self
            .progress_manager
            .as_ref()
            .map(|pm| pm.stage("tiles", scan.entries.len() as u64));

        for entry in &scan.entries {
            self.ingest_candidate(&mut builder, cache.as_ref(), entry);
            if let Some(ref bar) = bar {
                bar.inc(1);
            }
        }
        if let Some(bar) = bar {
            bar.finish();
        }

        builder.finish()
    }

    fn ingest_candidate(
        &self,
        builder: &mut PaletteBuilder,
        cache: Option<&TileCache>,
        entry: &library::TileEntry,
    ) {
        // A cache hit skips decoding the original candidate entirely
        if let Some(cache) = cache {
            if let Some(bitmap) = cache.load(&entry.key, builder.footprint()) {
                if builder.insert_resized(&entry.key, bitmap).is_ok() {
                    return;
                }
                builder.record_skip();
                self.report(&format!(
                    "Skipping {}: stale cache entry could not be used",
                    entry.path.display()
                ));
                return;
            }
        }

        let image = match load_bitmap(&entry.path) {
            Ok(image) => image,
            Err(error) => {
                builder.record_skip();
                self.report(&format!("Skipping {}: {error}", entry.path.display()));
                return;
            }
        };

        match builder.insert_image(&entry.key, &image) {
            Ok(tile) => {
                if let Some(cache) = cache {
                    if let Err(error) = cache.store(&entry.key, tile.bitmap()) {
                        // A failed cache write costs a resize next run, nothing more
                        self.report(&format!("Cache write failed: {error}"));
                    }
                }
            }
            Err(error) => {
                builder.record_skip();
                self.report(&format!("Skipping {}: {error}", entry.path.display()));
            }
        }
    }

    fn output_path(&self) -> PathBuf {
        if let Some(ref output) = self.cli.output {
            return output.clone();
        }

        let stem = self.cli.target.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = self.cli.target.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    // Allow print for user feedback on skips and completion
    #[allow(clippy::print_stderr)]
    fn report(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}
