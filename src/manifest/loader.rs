//! Asset index acquisition.
//!
//! An asset index is a JSON array of `{ "path", "hash", "size" }` objects.
//! It is read from disk or fetched over HTTP(S) in full and parsed once;
//! nothing is cached between loads.

use crate::asset::Asset;
use crate::error::{Error, Result};

use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Whether `index` designates a remote asset index.
pub fn is_remote(index: &str) -> bool {
    let lower = index.get(..8).unwrap_or(index).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Parse the raw bytes of an asset index.
pub fn parse_index(data: &[u8]) -> Result<Vec<Asset>> {
    serde_json::from_slice(data).map_err(|source| Error::ManifestMalformed { source })
}

/// Loads asset indexes from local paths or remote URLs.
#[derive(Clone)]
pub struct ManifestLoader {
    client: ClientWithMiddleware,
}

impl fmt::Debug for ManifestLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManifestLoader").finish_non_exhaustive()
    }
}

impl ManifestLoader {
    /// Creates a loader fetching remote indexes with `client`.
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self { client }
    }

    /// Loads the asset index at `index`, a URL or a local path.
    pub async fn load(&self, index: &str) -> Result<Vec<Asset>> {
        if is_remote(index) {
            self.load_remote(index).await
        } else {
            load_local(Path::new(index)).await
        }
    }

    async fn load_remote(&self, url: &str) -> Result<Vec<Asset>> {
        debug!("Fetching asset index {}", url);
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::ManifestUnavailable(format!("{}: {}", url, e)))?
            .error_for_status()
            .map_err(|e| Error::ManifestUnavailable(format!("{}: {}", url, e)))?;
        let body = res
            .bytes()
            .await
            .map_err(|e| Error::ManifestUnavailable(format!("{}: {}", url, e)))?;
        parse_index(&body)
    }
}

/// Loads an asset index from the local filesystem.
pub async fn load_local(path: &Path) -> Result<Vec<Asset>> {
    let exists = fs::try_exists(path)
        .await
        .map_err(|e| Error::ManifestUnavailable(format!("{:?}: {}", path, e)))?;
    if !exists {
        return Err(Error::ManifestUnavailable(format!(
            "index file {:?} does not exist",
            path
        )));
    }

    debug!("Reading asset index {:?}", path);
    let data = fs::read(path)
        .await
        .map_err(|e| Error::ManifestUnavailable(format!("{:?}: {}", path, e)))?;
    parse_index(&data)
}
