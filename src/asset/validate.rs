//! Acceptance check for files already on disk.

use super::hash::{check_hash, HashAlgorithm};
use crate::error::{Error, Result};

use std::path::Path;
use tokio::fs;

/// Decide whether the file at `file_path` is acceptable.
///
/// * Missing file: `Ok(false)`.
/// * Existing file, no `expected_hash`: `Ok(true)`.
/// * Existing file with `expected_hash`: whether its digest matches.
///
/// I/O failures while checking existence or hashing surface as
/// [`Error::Validation`]; they are never reported as `false`.
pub async fn validate_file(
    file_path: &Path,
    expected_hash: Option<&str>,
    algorithm: HashAlgorithm,
) -> Result<bool> {
    let exists = fs::try_exists(file_path)
        .await
        .map_err(|e| Error::validation(file_path, e))?;
    if !exists {
        return Ok(false);
    }

    let Some(expected_hash) = expected_hash else {
        return Ok(true);
    };

    check_hash(file_path, expected_hash, algorithm)
        .await
        .map_err(|e| Error::validation(file_path, e))
}
