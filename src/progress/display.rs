//! Progress bar coordination for one sync pass.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Main asset counter plus one byte bar per in-flight download.
pub struct ProgressDisplay {
    multi: MultiProgress,
    main: ProgressBar,
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a display counting `needed` downloads.
    pub fn new(style_options: StyleOptions, needed: usize) -> Self {
        let multi = if style_options.is_enabled() {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };

        let main = multi.add(style_options.main().to_progress_bar(needed as u64));
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Add a child bar of `size` bytes labelled `label`.
    pub fn create_child(&self, size: u64, label: &str) -> ProgressBar {
        let pb = self.multi.add(self.style_options.child().to_progress_bar(size));
        pb.set_message(label.to_string());
        pb
    }

    /// Finish a child bar, clearing it if configured.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Count one more processed download.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish the display.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }
}
