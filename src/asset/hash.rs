//! Content digests of local files.
//!
//! Files are hashed by streaming them from disk through an incremental
//! digest, so arbitrarily large assets never have to fit in memory. The
//! digest is only compared once the whole file has been read.
//!
//! # Supported Algorithms
//!
//! - **SHA-1** (default): 40 hex characters, the algorithm asset CDNs
//!   are usually keyed by
//! - **SHA-256**: 64 hex characters
//! - **MD5**: 32 hex characters
//!
//! # Examples
//!
//! ```rust,no_run
//! use assetsync::asset::hash::{check_hash, HashAlgorithm};
//! use std::path::Path;
//!
//! # async fn example() -> std::io::Result<()> {
//! let ok = check_hash(
//!     Path::new("assets/a.txt"),
//!     "a9993e364706816aba3e25717850c26c9cd0d89d",
//!     HashAlgorithm::Sha1,
//! )
//! .await?;
//! println!("hash verification: {}", if ok { "passed" } else { "failed" });
//! # Ok(())
//! # }
//! ```

use digest::DynDigest;
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;
use tokio::{fs::File, io::AsyncReadExt};

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Digest algorithm used to verify asset content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    /// SHA-1.
    #[default]
    Sha1,
    /// SHA-256.
    Sha256,
    /// MD5.
    Md5,
}

impl HashAlgorithm {
    /// Length of a digest in hex characters.
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Md5 => 32,
        }
    }

    fn hasher(&self) -> Box<dyn DynDigest + Send> {
        match self {
            HashAlgorithm::Sha1 => Box::new(sha1::Sha1::default()),
            HashAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
            HashAlgorithm::Md5 => Box::new(md5::Md5::default()),
        }
    }

    /// Digest an in-memory buffer, returned as lowercase hex.
    pub fn digest_bytes(&self, data: &[u8]) -> String {
        let mut hasher = self.hasher();
        hasher.update(data);
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha1 => f.write_str("sha1"),
            HashAlgorithm::Sha256 => f.write_str("sha256"),
            HashAlgorithm::Md5 => f.write_str("md5"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "md5" => Ok(HashAlgorithm::Md5),
            other => Err(format!("unsupported hash algorithm \"{}\"", other)),
        }
    }
}

/// Compute the hex digest of a file on disk.
///
/// Fails with [`io::ErrorKind::NotFound`] if the file does not exist, and
/// with any other I/O error raised while reading it.
pub async fn hash_file(file_path: &Path, algorithm: HashAlgorithm) -> io::Result<String> {
    let mut file = File::open(file_path).await?;
    let mut hasher = algorithm.hasher();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Verify the digest of a file against an expected hex digest.
///
/// The comparison ignores case.
///
/// # Returns
///
/// * `Ok(true)` if the digests match
/// * `Ok(false)` if they differ
/// * `Err` if the file does not exist or cannot be read
pub async fn check_hash(
    file_path: &Path,
    expected_hash: &str,
    algorithm: HashAlgorithm,
) -> io::Result<bool> {
    let actual = hash_file(file_path, algorithm).await?;
    Ok(actual.eq_ignore_ascii_case(expected_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ABC_SHA1: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";
    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const ABC_MD5: &str = "900150983cd24fb0d6963f7d28e17f72";
    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    #[test]
    fn test_digest_bytes() {
        assert_eq!(HashAlgorithm::Sha1.digest_bytes(b"abc"), ABC_SHA1);
        assert_eq!(HashAlgorithm::Sha256.digest_bytes(b"abc"), ABC_SHA256);
        assert_eq!(HashAlgorithm::Md5.digest_bytes(b"abc"), ABC_MD5);
        assert_eq!(HashAlgorithm::Sha1.digest_bytes(b""), EMPTY_SHA1);
    }

    #[test]
    fn test_hex_len_matches_digest() {
        for algorithm in [HashAlgorithm::Sha1, HashAlgorithm::Sha256, HashAlgorithm::Md5] {
            assert_eq!(algorithm.digest_bytes(b"x").len(), algorithm.hex_len());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("sha1".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha1));
        assert_eq!("SHA-256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!("md5".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Md5));
        assert!("crc32".parse::<HashAlgorithm>().is_err());
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha1);
    }

    #[tokio::test]
    async fn test_hash_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("abc.txt");
        fs::write(&file_path, b"abc").unwrap();

        let digest = hash_file(&file_path, HashAlgorithm::Sha1).await.unwrap();
        assert_eq!(digest, ABC_SHA1);
    }

    #[tokio::test]
    async fn test_hash_file_larger_than_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("big.bin");
        let content: Vec<u8> = (0..READ_BUFFER_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        fs::write(&file_path, &content).unwrap();

        let digest = hash_file(&file_path, HashAlgorithm::Sha256).await.unwrap();
        assert_eq!(digest, HashAlgorithm::Sha256.digest_bytes(&content));
    }

    #[tokio::test]
    async fn test_check_hash_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("abc.txt");
        fs::write(&file_path, b"abc").unwrap();

        let upper = ABC_SHA1.to_uppercase();
        assert!(check_hash(&file_path, &upper, HashAlgorithm::Sha1).await.unwrap());
        assert!(!check_hash(&file_path, EMPTY_SHA1, HashAlgorithm::Sha1).await.unwrap());
    }

    #[tokio::test]
    async fn test_check_hash_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_hash(&dir.path().join("missing"), ABC_SHA1, HashAlgorithm::Sha1)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
