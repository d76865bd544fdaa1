//! Progress reporting for a single generation run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cells {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking collapsed cells across one run
///
/// Position follows the collapsed-cell count rather than the iteration
/// count, so backtracking visibly moves the bar backwards.
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a bar sized to the total cell count
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(BAR_STYLE.clone());
        Self { bar }
    }

    /// Report current collapse progress and counters
    pub fn update(&self, collapsed_cells: usize, iteration: usize, backtracks: usize) {
        self.bar.set_position(collapsed_cells as u64);
        self.bar
            .set_message(format!("(iteration {iteration}, backtracks {backtracks})"));
    }

    /// Close the bar with the run's termination message
    pub fn finish(&self, success: bool, message: &str) {
        if success {
            self.bar.finish_with_message(message.to_string());
        } else {
            self.bar.abandon_with_message(message.to_string());
        }
    }
}
