//! Sync module: the engine, its builder and configuration, and lifecycle events.
//!
//! - `engine` - [`SyncEngine`], the diff-then-download pass
//! - `builder` - [`SyncEngineBuilder`]
//! - `config` - [`SyncConfig`] and [`FailurePolicy`]
//! - `events` - [`SyncEvent`] notifications
//!
//! For a single pass without keeping an engine around, use
//! [`sync_from_index`] or [`sync_assets`].

pub mod builder;
pub mod config;
pub mod engine;
pub mod events;

pub use builder::SyncEngineBuilder;
pub use config::{FailurePolicy, SyncConfig};
pub use engine::SyncEngine;
pub use events::{SyncCallback, SyncEvent};

use crate::asset::{Asset, AssetResult};
use crate::error::Result;
use std::path::Path;

/// One-shot sync of `destination` against the asset index at `index`.
///
/// Uses a default engine with hidden progress bars.
///
/// ```rust,no_run
/// # async fn example() -> assetsync::Result<()> {
/// let results = assetsync::sync_from_index(
///     "https://launcher.example.com/assets",
///     "https://launcher.example.com/indexes/jdk-17.json",
///     "runtime/java",
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn sync_from_index(
    cdn_base_url: &str,
    index: &str,
    destination: impl AsRef<Path>,
) -> Result<Vec<AssetResult>> {
    SyncEngineBuilder::hidden(cdn_base_url)
        .build()?
        .sync_from_index(index, destination.as_ref())
        .await
}

/// One-shot sync of `destination` against `assets`.
pub async fn sync_assets(
    cdn_base_url: &str,
    assets: &[Asset],
    destination: impl AsRef<Path>,
) -> Result<Vec<AssetResult>> {
    SyncEngineBuilder::hidden(cdn_base_url)
        .build()?
        .sync(assets, destination.as_ref())
        .await
}
