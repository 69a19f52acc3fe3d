//! Progress reporting for a batch run.
//!
//! The batch converter only talks to [`ProgressReporter`]; the console
//! implementation draws an indicatif bar, prints one line per file and mirrors
//! that line into the terminal title.

use crate::batch::BatchResult;
use crate::constants::PROGRESS_BAR_TEMPLATE;
use crate::utils::{display_name, format_counter};
use crate::{error, info, warn};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;

pub trait ProgressReporter {
    fn begin(&self, _total: usize) {}

    /// Called before a file is probed; `index` is 1-based.
    fn item_started(&self, index: usize, total: usize, path: &Path);

    fn item_finished(&self, _path: &Path) {}

    fn item_failed(&self, path: &Path, detail: &str);

    fn warning(&self, message: &str);

    fn finish(&self, _result: &BatchResult) {}

    /// Called instead of `finish` when the run stops on a fatal error.
    fn aborted(&self) {}
}

/// Reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn item_started(&self, _index: usize, _total: usize, _path: &Path) {}

    fn item_failed(&self, _path: &Path, _detail: &str) {}

    fn warning(&self, _message: &str) {}
}

pub struct ConsoleReporter {
    bar: ProgressBar,
    term: console::Term,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::hidden();
        if !crate::logger::is_quiet() {
            bar.set_draw_target(ProgressDrawTarget::stderr());
        }
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);

        Self {
            bar,
            term: console::Term::stdout(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn begin(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn item_started(&self, index: usize, total: usize, path: &Path) {
        let line = format!("{} Processing {} ...", format_counter(index, total), display_name(path));
        if self.term.is_term() {
            self.term.set_title(&line);
        }
        self.bar.set_message(display_name(path));
        self.bar.suspend(|| info!("{}", line));
    }

    fn item_finished(&self, _path: &Path) {
        self.bar.inc(1);
    }

    fn item_failed(&self, path: &Path, detail: &str) {
        self.bar.inc(1);
        self.bar.suspend(|| {
            error!("Failed to process image: '{}'", path.display());
            if !detail.is_empty() {
                eprintln!("{}", detail);
            }
        });
    }

    fn warning(&self, message: &str) {
        self.bar.suspend(|| warn!("{}", message));
    }

    fn finish(&self, result: &BatchResult) {
        self.bar.finish_and_clear();
        if result.total() == 0 {
            return;
        }

        info!(
            "Converted {} of {} image(s) into {}",
            result.succeeded,
            result.total(),
            result.output_dir.display()
        );
        if !result.is_success() {
            warn!("{} image(s) failed:", result.failed.len());
            for item in &result.failed {
                warn!("  {}: {}", item.path.display(), item.detail);
            }
        }
    }

    fn aborted(&self) {
        self.bar.finish_and_clear();
    }
}
