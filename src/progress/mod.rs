//! Terminal progress display for sync passes.
//!
//! - `style` - [`StyleOptions`] and [`ProgressBarOpts`]
//! - `display` - [`ProgressDisplay`], driven by the sync engine
//!
//! # Examples
//!
//! ```rust
//! use assetsync::progress::StyleOptions;
//! use assetsync::sync::SyncEngineBuilder;
//!
//! # fn example() -> assetsync::Result<()> {
//! let engine = SyncEngineBuilder::new("https://cdn.example.com/assets")
//!     .style_options(StyleOptions::hidden())
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
