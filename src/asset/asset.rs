//! Asset entries as declared by an asset index.
//!
//! An [`Asset`] is identified by its relative `path` and carries the content
//! digest used both to locate it on the CDN and to check its integrity. A
//! [`DownloadItem`] is the transient, fully-resolved form of an asset that a
//! sync pass has decided to fetch.
//!
//! # Examples
//!
//! ```rust
//! use assetsync::asset::Asset;
//!
//! let asset = Asset::new("lib/rt.jar", "0a4f4b54e5ad0a8bd2b1d0a5cc5a2bb6a2d4f0f1", 3);
//! assert_eq!(asset.shard(), Some("0a"));
//! ```

use crate::error::{Error, Result};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// One named, hash-identified file described by an asset index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// File path relative to the destination root.
    pub path: String,
    /// Lowercase hex content digest.
    pub hash: String,
    /// Expected size in bytes.
    pub size: u64,
}

impl Asset {
    /// Creates a new [`Asset`].
    pub fn new(path: impl Into<String>, hash: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            hash: hash.into(),
            size,
        }
    }

    /// The CDN shard prefix: the first two characters of the hash.
    ///
    /// Returns `None` when the hash is too short to carry a prefix.
    pub fn shard(&self) -> Option<&str> {
        self.hash.get(0..2)
    }

    /// Location of the asset on a CDN laid out as `{base}/{hash[0..2]}/{hash}`.
    pub fn source_url(&self, cdn_base_url: &str) -> Result<Url> {
        let shard = self.shard().ok_or_else(|| {
            Error::InvalidAsset(format!(
                "the hash \"{}\" of \"{}\" is too short for a shard prefix",
                self.hash, self.path
            ))
        })?;
        let raw = format!(
            "{}/{}/{}",
            cdn_base_url.trim_end_matches('/'),
            shard,
            self.hash
        );
        Url::parse(&raw)
            .map_err(|e| Error::InvalidUrl(format!("the url \"{}\" cannot be parsed: {}", raw, e)))
    }

    /// Resolves the asset path under `root`.
    ///
    /// Absolute paths and paths with `..` components are rejected so an
    /// index entry can never write outside the destination directory.
    pub fn destination(&self, root: &Path) -> Result<PathBuf> {
        let relative = Path::new(&self.path);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if self.path.is_empty() || escapes {
            return Err(Error::InvalidAsset(format!(
                "the path \"{}\" is not relative to the destination directory",
                self.path
            )));
        }
        Ok(root.join(relative))
    }
}

/// An asset queued for download during one sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadItem {
    /// Fully-qualified remote URL.
    pub source: Url,
    /// Local path the content is written to.
    pub destination: PathBuf,
    /// Expected content digest.
    pub hash: String,
    /// Expected size in bytes.
    pub size: u64,
}

impl DownloadItem {
    /// Resolves an [`Asset`] against a CDN base URL and a destination root.
    pub fn resolve(asset: &Asset, cdn_base_url: &str, root: &Path) -> Result<Self> {
        Ok(Self {
            source: asset.source_url(cdn_base_url)?,
            destination: asset.destination(root)?,
            hash: asset.hash.clone(),
            size: asset.size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

    #[test]
    fn test_shard_prefix() {
        let asset = Asset::new("a.txt", HASH, 3);
        assert_eq!(asset.shard(), Some("a9"));
        assert_eq!(Asset::new("a.txt", "f", 3).shard(), None);
    }

    #[test]
    fn test_source_url_layout() {
        let asset = Asset::new("a.txt", HASH, 3);
        let url = asset.source_url("https://cdn.example.com/assets/").unwrap();
        assert_eq!(
            url.as_str(),
            format!("https://cdn.example.com/assets/a9/{}", HASH)
        );

        let url = asset.source_url("https://cdn.example.com/assets").unwrap();
        assert_eq!(
            url.as_str(),
            format!("https://cdn.example.com/assets/a9/{}", HASH)
        );
    }

    #[test]
    fn test_source_url_rejects_bad_base() {
        let asset = Asset::new("a.txt", HASH, 3);
        assert!(matches!(
            asset.source_url("not a url"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_destination_nested() {
        let asset = Asset::new("lib/security/cacerts", HASH, 3);
        let dest = asset.destination(Path::new("/opt/jdk")).unwrap();
        assert_eq!(dest, Path::new("/opt/jdk/lib/security/cacerts"));
    }

    #[test]
    fn test_destination_rejects_escape() {
        let root = Path::new("/opt/jdk");
        for path in ["../evil", "lib/../../evil", "/etc/passwd", ""] {
            let asset = Asset::new(path, HASH, 3);
            assert!(
                matches!(asset.destination(root), Err(Error::InvalidAsset(_))),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = format!(
            r#"{{"path":"a.txt","hash":"{}","size":3,"executable":true}}"#,
            HASH
        );
        let asset: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(asset, Asset::new("a.txt", HASH, 3));
    }
}
