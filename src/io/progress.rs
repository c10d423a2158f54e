//! Stage progress display for long-running phases

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>8} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates per-stage progress bars for a single mosaic run
///
/// Stages of known size (tile resizing, cell matching) each get a
/// labelled bar under a shared [`MultiProgress`]
pub struct ProgressManager {
    multi_progress: MultiProgress,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
        }
    }

    /// Add a labelled bar for a stage of known length
    pub fn stage(&self, label: &'static str, len: u64) -> ProgressBar {
        let bar = ProgressBar::new(len);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_message(label);
        self.multi_progress.add(bar)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
