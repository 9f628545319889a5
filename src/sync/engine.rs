//! The sync engine: diff an asset list against disk, then download the difference.
//!
//! A pass runs in two stages so the number of needed downloads is known
//! before any network activity:
//!
//! 1. **Diff.** Every asset is resolved to its destination path and CDN URL
//!    and checked on disk. Missing files become [`AssetStatus::Downloaded`],
//!    files failing verification [`AssetStatus::Replaced`], valid files
//!    [`AssetStatus::Skipped`]. The first two are queued.
//! 2. **Execute.** The queue is downloaded strictly one item at a time, in
//!    index order, each item verified after it is written.
//!
//! # Examples
//!
//! ```rust,no_run
//! use assetsync::asset::AssetStatus;
//! use assetsync::sync::SyncEngineBuilder;
//! use std::path::Path;
//!
//! # async fn example() -> assetsync::Result<()> {
//! let engine = SyncEngineBuilder::new("https://launcher.example.com/assets").build()?;
//! let results = engine
//!     .sync_from_index(
//!         "https://launcher.example.com/indexes/jdk-17.json",
//!         Path::new("runtime/java"),
//!     )
//!     .await?;
//!
//! let downloaded = results
//!     .iter()
//!     .filter(|r| *r.status() == AssetStatus::Downloaded)
//!     .count();
//! println!("Processed {} assets, downloaded {}.", results.len(), downloaded);
//! # Ok(())
//! # }
//! ```

use super::config::{FailurePolicy, SyncConfig};
use super::events::SyncEvent;
use crate::asset::{validate_file, Asset, AssetResult, AssetStatus, DownloadItem, HashAlgorithm};
use crate::error::{Error, Result};
use crate::http::{create_http_client, Fetched, FileFetcher};
use crate::manifest::ManifestLoader;
use crate::progress::ProgressDisplay;

use reqwest::{header::HeaderMap, Url};
use std::fmt;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// A queued download and the position of its asset in the index.
struct Queued {
    index: usize,
    item: DownloadItem,
}

/// Keeps a local directory in sync with an asset index.
///
/// An engine is cheap to clone and can run any number of passes, but two
/// concurrent passes must not target the same destination directory.
#[derive(Clone)]
pub struct SyncEngine {
    config: SyncConfig,
    fetcher: FileFetcher,
    loader: ManifestLoader,
}

impl fmt::Debug for SyncEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncEngine")
            .field("config", &self.config)
            .finish()
    }
}

impl SyncEngine {
    /// Creates a new engine, building its HTTP client once.
    pub(crate) fn new(config: SyncConfig) -> Result<Self> {
        let client = create_http_client(config.http_client_config())?;
        Ok(Self {
            fetcher: FileFetcher::new(client.clone(), config.hash_algorithm),
            loader: ManifestLoader::new(client),
            config,
        })
    }

    /// Gets the CDN base URL.
    pub fn cdn_base_url(&self) -> &str {
        &self.config.cdn_base_url
    }

    /// Gets the verification algorithm.
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.config.hash_algorithm
    }

    /// Gets the failure policy.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.config.failure_policy
    }

    /// Gets the number of transport-level retries.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets the file fetcher used for downloads.
    pub fn fetcher(&self) -> &FileFetcher {
        &self.fetcher
    }

    /// Gets the asset index loader.
    pub fn loader(&self) -> &ManifestLoader {
        &self.loader
    }

    /// Checks a local file with this engine's algorithm.
    pub async fn validate(&self, file_path: &Path, expected_hash: Option<&str>) -> Result<bool> {
        validate_file(file_path, expected_hash, self.config.hash_algorithm).await
    }

    /// Fetches a single resource with this engine's client and algorithm.
    pub async fn fetch(
        &self,
        source: &Url,
        destination: &Path,
        expected_hash: Option<&str>,
    ) -> Result<Fetched> {
        self.fetcher.fetch(source, destination, expected_hash).await
    }

    /// Loads an asset index from a local path or a URL.
    pub async fn load_index(&self, index: &str) -> Result<Vec<Asset>> {
        self.loader.load(index).await
    }

    /// Loads the asset index at `index` and syncs `destination` against it.
    pub async fn sync_from_index(&self, index: &str, destination: &Path) -> Result<Vec<AssetResult>> {
        let assets = self.load_index(index).await?;
        self.sync(&assets, destination).await
    }

    /// Syncs `destination` against `assets`.
    ///
    /// Returns one result per asset, in the order of `assets`.
    pub async fn sync(&self, assets: &[Asset], destination: &Path) -> Result<Vec<AssetResult>> {
        self.emit(&SyncEvent::Starting { assets });

        debug!("Creating destination directory {:?}", destination);
        fs::create_dir_all(destination).await?;

        let (mut results, queue) = self.diff(assets, destination).await?;
        info!("{}/{} files need downloading.", queue.len(), assets.len());
        self.emit(&SyncEvent::Planned {
            total: assets.len(),
            needed: queue.len(),
        });

        self.execute(&queue, &mut results).await?;
        info!("Download finished");

        self.emit(&SyncEvent::Complete { results: &results });
        Ok(results)
    }

    async fn diff(
        &self,
        assets: &[Asset],
        destination: &Path,
    ) -> Result<(Vec<AssetResult>, Vec<Queued>)> {
        let mut results = Vec::with_capacity(assets.len());
        let mut queue = Vec::new();

        for (index, asset) in assets.iter().enumerate() {
            let item = DownloadItem::resolve(asset, &self.config.cdn_base_url, destination)?;

            let exists = fs::try_exists(&item.destination)
                .await
                .map_err(|e| Error::validation(&item.destination, e))?;
            let status = if !exists {
                AssetStatus::Downloaded
            } else if self.validate(&item.destination, Some(asset.hash.as_str())).await? {
                AssetStatus::Skipped
            } else {
                debug!("{:?} does not match {}", item.destination, asset.hash);
                AssetStatus::Replaced
            };

            if status.needs_download() {
                queue.push(Queued { index, item });
            }
            results.push(AssetResult::new(asset.clone(), status));
        }

        Ok((results, queue))
    }

    async fn execute(&self, queue: &[Queued], results: &mut [AssetResult]) -> Result<()> {
        if queue.is_empty() {
            return Ok(());
        }

        let display = ProgressDisplay::new(self.config.style_options.clone(), queue.len());
        let mut processed: usize = 0;

        for Queued { index, item } in queue {
            self.emit(&SyncEvent::Downloading { item });

            let pb = display.create_child(item.size, &results[*index].asset().path);
            let outcome = self
                .fetcher
                .fetch_with_progress(&item.source, &item.destination, Some(item.hash.as_str()), &pb)
                .await;
            display.finish_child(pb);
            display.increment_main();

            processed += 1;
            let progress = processed as f64 / queue.len() as f64 * 100.0;

            match outcome {
                Ok(fetched) => {
                    if let Fetched::Downloaded { bytes } = fetched {
                        if bytes != item.size {
                            warn!(
                                "{} is {} bytes, the index declares {}",
                                item.source, bytes, item.size
                            );
                        }
                    }
                    info!("Download progress: {:.2}%", progress);
                    self.emit(&SyncEvent::Downloaded { item, progress });
                }
                Err(error) if self.config.failure_policy == FailurePolicy::Abort => {
                    display.finish();
                    return Err(error);
                }
                Err(error) => {
                    let reason = error_chain(&error);
                    warn!("{}", reason);
                    self.emit(&SyncEvent::Failed {
                        item,
                        error: &error,
                    });
                    results[*index] = results[*index].clone().fail(reason);
                }
            }
        }

        display.finish();
        Ok(())
    }

    fn emit(&self, event: &SyncEvent<'_>) {
        if let Some(ref callback) = self.config.on_event {
            callback(event);
        }
    }
}

/// Render an error with its sources, e.g. `Failed to download <url>: <cause>`.
fn error_chain(error: &Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_chain_includes_sources() {
        let error = Error::validation(
            "/tmp/a.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            error_chain(&error),
            "Failed to validate file \"/tmp/a.txt\": denied"
        );
    }
}
