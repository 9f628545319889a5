//! assetsync mirrors an asset index into a local directory.
//!
//! An asset index lists files by relative path, content hash and size. The
//! assets themselves live on a content-addressed CDN at
//! `{cdn}/{hash[0..2]}/{hash}`. A sync pass downloads every asset that is
//! missing or fails hash verification and leaves valid files untouched, so
//! running it twice in a row costs no network requests the second time.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use assetsync::{AssetStatus, SyncEngineBuilder};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> assetsync::Result<()> {
//! let engine = SyncEngineBuilder::new("https://launcher.example.com/assets").build()?;
//! let results = engine
//!     .sync_from_index(
//!         "https://launcher.example.com/indexes/jdk-17.json",
//!         Path::new("runtime/java"),
//!     )
//!     .await?;
//!
//! for result in results.iter().filter(|r| r.status().is_failed()) {
//!     eprintln!("{}: {}", result.asset().path, result.status());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`asset`] - Asset model, per-asset results, hashing and file validation
//! - [`http`] - HTTP client setup and the single-file fetcher
//! - [`manifest`] - Asset index loading
//! - [`sync`] - The sync engine, its builder, configuration and events
//! - [`progress`] - Progress bar styling and display
//! - [`error`] - The crate [`Error`] enum

pub mod asset;
pub mod error;
pub mod http;
pub mod manifest;
pub mod progress;
pub mod sync;

pub use asset::{Asset, AssetResult, AssetStatus, DownloadItem, HashAlgorithm};
pub use error::{Error, Result};
pub use http::{create_http_client, Fetched, FileFetcher, HttpClientConfig};
pub use manifest::ManifestLoader;
pub use progress::{ProgressBarOpts, StyleOptions};
pub use sync::{
    sync_assets, sync_from_index, FailurePolicy, SyncConfig, SyncEngine, SyncEngineBuilder,
    SyncEvent,
};
