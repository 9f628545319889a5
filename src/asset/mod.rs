//! Asset module containing the asset data model and local file checks.
//!
//! # Overview
//!
//! - [`asset`] - [`Asset`] entries and the transient [`DownloadItem`]
//! - [`result`] - Per-asset [`AssetResult`] and [`AssetStatus`]
//! - [`hash`] - Streaming file digests ([`HashAlgorithm`], [`check_hash`])
//! - [`validate`] - Existence and integrity check ([`validate_file`])
//!
//! # Examples
//!
//! ```rust,no_run
//! use assetsync::asset::{validate_file, Asset, HashAlgorithm};
//! use std::path::Path;
//!
//! # async fn example() -> assetsync::Result<()> {
//! let asset = Asset::new("a.txt", "a9993e364706816aba3e25717850c26c9cd0d89d", 3);
//! let path = asset.destination(Path::new("assets"))?;
//! let valid = validate_file(&path, Some(asset.hash.as_str()), HashAlgorithm::Sha1).await?;
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod hash;
pub mod result;
pub mod validate;

pub use asset::{Asset, DownloadItem};
pub use hash::{check_hash, hash_file, HashAlgorithm};
pub use result::{AssetResult, AssetStatus};
pub use validate::validate_file;
