//! Lifecycle notifications emitted during a sync pass.
//!
//! Events are delivered synchronously, in order, to the callback installed
//! with [`SyncEngineBuilder::on_event`](crate::sync::SyncEngineBuilder::on_event).
//! They are purely observational: the results of a pass are the same
//! whether or not a callback is installed.
//!
//! # Examples
//!
//! ```rust
//! use assetsync::sync::{SyncEngineBuilder, SyncEvent};
//!
//! # fn example() -> assetsync::Result<()> {
//! let engine = SyncEngineBuilder::hidden("https://cdn.example.com/assets")
//!     .on_event(|event| match event {
//!         SyncEvent::Planned { total, needed } => println!("{needed}/{total} files need downloading"),
//!         SyncEvent::Downloaded { item, progress } => {
//!             println!("{:.2}% {}", progress, item.destination.display())
//!         }
//!         SyncEvent::Failed { item, error } => println!("{} failed: {}", item.source, error),
//!         _ => {}
//!     })
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::asset::{Asset, AssetResult, DownloadItem};
use crate::error::Error;

/// A notification emitted by the sync engine.
#[derive(Debug)]
pub enum SyncEvent<'a> {
    /// The pass is starting with the full asset list.
    Starting { assets: &'a [Asset] },
    /// The diff is done: `needed` of `total` assets will be downloaded.
    Planned { total: usize, needed: usize },
    /// A download is about to start.
    Downloading { item: &'a DownloadItem },
    /// A download finished; `progress` is the processed percentage of the queue.
    Downloaded { item: &'a DownloadItem, progress: f64 },
    /// A download failed and the pass continues.
    Failed {
        item: &'a DownloadItem,
        error: &'a Error,
    },
    /// The pass completed with these results.
    Complete { results: &'a [AssetResult] },
}

impl SyncEvent<'_> {
    /// Short name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            SyncEvent::Starting { .. } => "starting",
            SyncEvent::Planned { .. } => "planned",
            SyncEvent::Downloading { .. } => "downloading",
            SyncEvent::Downloaded { .. } => "downloaded",
            SyncEvent::Failed { .. } => "failed",
            SyncEvent::Complete { .. } => "complete",
        }
    }
}

/// Callback type for sync events.
pub type SyncCallback = Box<dyn Fn(&SyncEvent<'_>) + Send + Sync>;
