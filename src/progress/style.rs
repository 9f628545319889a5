//! Progress bar styling for sync passes.
//!
//! The main bar counts assets that need downloading; each child bar counts
//! the bytes of the asset currently being fetched.
//!
//! # Examples
//!
//! ```rust
//! use assetsync::progress::{ProgressBarOpts, StyleOptions};
//!
//! // Keep the asset counter on screen, drop per-file bars once complete.
//! let style = StyleOptions::default();
//! assert!(style.is_enabled());
//!
//! // Nothing drawn at all.
//! let hidden = StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
//! assert!(!hidden.is_enabled());
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Style options for the main (asset count) and child (bytes) bars.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub(crate) main: ProgressBarOpts,
    pub(crate) child: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_ASSETS.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
            child: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_BYTES.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
                enabled: true,
                clear: true,
            },
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(main: ProgressBarOpts, child: ProgressBarOpts) -> Self {
        Self { main, child }
    }

    /// Both bars hidden.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
    }

    /// Return `false` if neither the main nor the child bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled
    }

    /// Get a reference to the main progress bar options.
    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    /// Get a reference to the child progress bar options.
    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }
}

/// Options for a single progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    template: Option<String>,
    /// At least 3 characters: "filled", "current" and "to do".
    progress_chars: Option<String>,
    pub(crate) enabled: bool,
    /// Clear the bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// `███████████████▋          12/40 assets (30%) eta 00:00:09`
    pub const TEMPLATE_ASSETS: &'static str =
        "{bar:40.blue} {pos:>}/{len} assets ({percent}%) eta {eta_precise:.blue}";
    /// `━━━━━━━━━╾────── 1.21 MiB/2.40 MiB 3.02 MiB/s lib/modules`
    pub const TEMPLATE_BYTES: &'static str =
        "{bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} {msg}";
    /// Fine blocks: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// A line: `"━╾╴─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Options which hide the bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Build the [`ProgressStyle`]; an invalid template falls back to the default bar.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = &self.template {
            match ProgressStyle::default_bar().template(template) {
                Ok(s) => style = s,
                Err(e) => warn!("Ignoring invalid progress template {:?}: {}", template, e),
            }
        }
        if let Some(progress_chars) = &self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] of `len` units, hidden when disabled.
    pub fn to_progress_bar(&self, len: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        ProgressBar::new(len).with_style(self.to_progress_style())
    }
}
