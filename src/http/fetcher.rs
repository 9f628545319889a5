//! Single-file download with skip-on-valid and post-download verification.
//!
//! A [`FileFetcher`] brings one remote resource to one local path. If the
//! destination already holds acceptable content no request is made at all,
//! so fetching is idempotent. Otherwise the response body is streamed
//! straight into the destination file and, when a hash is known, the written
//! file is hashed again before the fetch is reported as successful.
//!
//! # Examples
//!
//! ```rust,no_run
//! use assetsync::asset::HashAlgorithm;
//! use assetsync::http::{create_http_client, FileFetcher, HttpClientConfig};
//! use reqwest::Url;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let fetcher = FileFetcher::new(client, HashAlgorithm::Sha1);
//!
//! let url = Url::parse("https://cdn.example.com/a9/a9993e364706816aba3e25717850c26c9cd0d89d")?;
//! fetcher
//!     .fetch(&url, Path::new("assets/a.txt"), Some("a9993e364706816aba3e25717850c26c9cd0d89d"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::asset::{hash_file, validate_file, HashAlgorithm};
use crate::error::{Error, Result};

use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::path::Path;
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

/// What a successful [`FileFetcher::fetch`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetched {
    /// The destination was already valid; nothing was requested.
    AlreadyValid,
    /// The resource was downloaded.
    Downloaded {
        /// Number of bytes written to disk.
        bytes: u64,
    },
}

/// Downloads remote resources to local paths.
#[derive(Clone)]
pub struct FileFetcher {
    client: ClientWithMiddleware,
    algorithm: HashAlgorithm,
}

impl fmt::Debug for FileFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileFetcher")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl FileFetcher {
    /// Creates a fetcher verifying downloads with `algorithm`.
    pub fn new(client: ClientWithMiddleware, algorithm: HashAlgorithm) -> Self {
        Self { client, algorithm }
    }

    /// Gets the verification algorithm.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Fetches `source` into `destination`.
    ///
    /// No retry is attempted: the first failure is returned to the caller.
    pub async fn fetch(
        &self,
        source: &Url,
        destination: &Path,
        expected_hash: Option<&str>,
    ) -> Result<Fetched> {
        self.fetch_with_progress(source, destination, expected_hash, &ProgressBar::hidden())
            .await
    }

    /// Same as [`FileFetcher::fetch`], advancing `pb` by every chunk written.
    pub(crate) async fn fetch_with_progress(
        &self,
        source: &Url,
        destination: &Path,
        expected_hash: Option<&str>,
        pb: &ProgressBar,
    ) -> Result<Fetched> {
        if validate_file(destination, expected_hash, self.algorithm).await? {
            debug!("{:?} is already valid, skipping {}", destination, source);
            return Ok(Fetched::AlreadyValid);
        }

        if let Some(parent) = destination.parent() {
            debug!("Creating destination directory {:?}", parent);
            fs::create_dir_all(parent).await?;
        }

        debug!("Fetching {}", source);
        let res = self
            .client
            .get(source.clone())
            .send()
            .await
            .map_err(|e| Error::transport(source.as_str(), e))?
            .error_for_status()
            .map_err(|e| Error::transport(source.as_str(), e))?;

        debug!("Creating destination file {:?}", destination);
        let mut file = fs::File::create(destination).await?;
        let mut written: u64 = 0;

        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item.map_err(|e| Error::transport(source.as_str(), e))?;
            let chunk_size = chunk.len() as u64;
            file.write_all_buf(&mut chunk).await?;
            written += chunk_size;
            pb.inc(chunk_size);
        }
        file.flush().await?;
        drop(file);

        // The file must be fully on disk before it is hashed again.
        if let Some(expected) = expected_hash {
            let actual = hash_file(destination, self.algorithm)
                .await
                .map_err(|e| Error::validation(destination, e))?;
            if !actual.eq_ignore_ascii_case(expected) {
                return Err(Error::HashMismatch {
                    url: source.to_string(),
                    expected: expected.to_string(),
                    actual,
                });
            }
        }

        Ok(Fetched::Downloaded { bytes: written })
    }
}
