//! CLI entry point for the photomosaic builder

use clap::Parser;
use tesserae::io::cli::{Cli, MosaicProcessor};

fn main() -> tesserae::Result<()> {
    let cli = Cli::parse();
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}
