//! Progress display for long-running enumerations

use crate::io::configuration::PROGRESS_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner showing elapsed time and the running solution count while the
/// enumeration drains its stream
///
/// Created disabled when the user asked for quiet output; all methods are
/// then plain passthroughs to stdout where output is expected at all.
pub struct SearchProgress {
    bar: Option<ProgressBar>,
    solutions: u64,
}

impl SearchProgress {
    /// Start the spinner, or create a disabled display when `enabled` is
    /// false
    pub fn new(enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SEARCH_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
            bar.set_message("searching...");
            bar
        });
        Self { bar, solutions: 0 }
    }

    /// Record one more streamed solution
    pub fn solution_found(&mut self) {
        self.solutions += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("{} solutions found", self.solutions));
        }
    }

    /// Print a block of text without garbling the spinner line
    // Solutions are reported on stdout for the invoking user
    #[allow(clippy::print_stdout)]
    pub fn announce(&self, text: &str) {
        self.bar.as_ref().map_or_else(
            || println!("{text}"),
            |bar| bar.println(text),
        );
    }

    /// Stop the spinner, leaving the terminal clean
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
