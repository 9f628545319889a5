//! Error handling for the assetsync library.
//!
//! Every failure a sync pass can run into is folded into the single [`Error`]
//! enum below. A file that is simply missing or does not match its hash is
//! *not* an error: the validator reports that as `false`. Errors are reserved
//! for conditions that stop an operation from reaching a decision.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when synchronizing assets.
#[derive(Error, Debug)]
pub enum Error {
    /// The asset index could not be obtained.
    ///
    /// Raised when a local index path does not exist or cannot be read, or
    /// when fetching a remote index fails at the transport level or returns a
    /// non-success status.
    #[error("Asset index unavailable: {0}")]
    ManifestUnavailable(String),

    /// The asset index was obtained but is not a list of assets.
    #[error("Failed to parse asset index")]
    ManifestMalformed {
        #[source]
        source: serde_json::Error,
    },

    /// An I/O error occurred while checking whether a local file is valid.
    ///
    /// This is distinct from a file that does not exist or does not match
    /// its hash, which the validator reports as `false`.
    #[error("Failed to validate file {path:?}")]
    Validation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The download request failed or its body stream broke before completion.
    #[error("Failed to download {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest_middleware::Error,
    },

    /// The downloaded content does not match the digest declared for it.
    #[error("Failed to download {url}! Hash mismatched (expected {expected}, got {actual})")]
    HashMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    /// An asset entry cannot be mapped onto the destination or the CDN.
    #[error("Invalid asset: {0}")]
    InvalidAsset(String),

    /// The CDN base URL combined with an asset hash is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    ///
    /// Wraps failures creating the destination directories or writing the
    /// downloaded file.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library, e.g. while building the HTTP client.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
}

impl Error {
    pub(crate) fn transport(
        url: impl Into<String>,
        source: impl Into<reqwest_middleware::Error>,
    ) -> Self {
        Error::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    pub(crate) fn validation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Validation {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for operations that can fail with an assetsync error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_path() {
        let err = Error::validation(
            "/tmp/assets/a.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to validate file \"/tmp/assets/a.txt\""
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_hash_mismatch_names_url() {
        let err = Error::HashMismatch {
            url: "https://cdn.example.com/ab/abcd".into(),
            expected: "abcd".into(),
            actual: "ffff".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://cdn.example.com/ab/abcd"));
        assert!(msg.contains("Hash mismatched"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, Error::IOError { .. }));
    }
}
