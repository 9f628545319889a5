//! Per-asset outcome of a sync pass.
//!
//! A sync pass produces exactly one [`AssetResult`] per [`Asset`] in the
//! index, in index order. Its [`AssetStatus`] reflects what was found on disk
//! when the pass compared the index against the destination, and is turned
//! into [`AssetStatus::Failed`] if the subsequent download did not succeed.
//!
//! # Examples
//!
//! ```rust
//! use assetsync::asset::{Asset, AssetResult, AssetStatus};
//!
//! let asset = Asset::new("a.txt", "a9993e364706816aba3e25717850c26c9cd0d89d", 3);
//! let result = AssetResult::new(asset, AssetStatus::Downloaded);
//!
//! match result.status() {
//!     AssetStatus::Downloaded => println!("{} was missing", result.asset().path),
//!     AssetStatus::Replaced => println!("{} was corrupted", result.asset().path),
//!     AssetStatus::Skipped => println!("{} was already valid", result.asset().path),
//!     AssetStatus::Failed(reason) => println!("{} failed: {}", result.asset().path, reason),
//! }
//! ```

use super::asset::Asset;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reconciliation outcome for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// The file was absent and has been downloaded.
    Downloaded,
    /// The file existed with the wrong content and has been downloaded again.
    Replaced,
    /// The file existed with the expected content.
    Skipped,
    /// The file needed downloading but the download failed.
    Failed(String),
}

impl AssetStatus {
    /// Whether this status required a download.
    pub fn needs_download(&self) -> bool {
        matches!(self, AssetStatus::Downloaded | AssetStatus::Replaced)
    }

    /// Whether this status is a failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, AssetStatus::Failed(_))
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetStatus::Downloaded => f.write_str("DOWNLOADED"),
            AssetStatus::Replaced => f.write_str("REPLACED"),
            AssetStatus::Skipped => f.write_str("SKIPPED"),
            AssetStatus::Failed(reason) => write!(f, "FAILED ({})", reason),
        }
    }
}

/// An [`Asset`] tagged with its [`AssetStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetResult {
    #[serde(flatten)]
    asset: Asset,
    status: AssetStatus,
}

impl AssetResult {
    /// Create a new [`AssetResult`].
    pub fn new(asset: Asset, status: AssetStatus) -> Self {
        Self { asset, status }
    }

    /// Get a reference to the result's asset.
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Get a reference to the result's status.
    pub fn status(&self) -> &AssetStatus {
        &self.status
    }

    /// Mark the result as failed with a message.
    pub fn fail(self, msg: impl fmt::Display) -> Self {
        Self {
            status: AssetStatus::Failed(msg.to_string()),
            ..self
        }
    }
}
