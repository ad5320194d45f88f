//! File materialization: directory creation and artifact/static writes.
//! All operations are synchronous `std::fs` calls; a write reported as
//! complete has passed through the filesystem layer.

use crate::error::{Error, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// What to do when the target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Write unconditionally, replacing any prior content
    Overwrite,
    /// Log a conflict and leave the existing file untouched
    Skip,
}

/// Creates the directory and all missing ancestors.
///
/// Idempotent: succeeds without touching anything when the directory
/// already exists.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(path.as_ref()).map_err(Error::IoError)
}

/// Writes rendered content to `path`, creating parent directories first.
///
/// # Arguments
/// * `path` - Target file path
/// * `content` - Rendered content to write
/// * `policy` - Conflict handling when the file already exists
///
/// # Returns
/// * `Result<bool>` - `true` if the file was written, `false` if an
///   existing file was skipped under `OverwritePolicy::Skip`
pub fn write_artifact<P: AsRef<Path>>(
    path: P,
    content: &str,
    policy: OverwritePolicy,
) -> Result<bool> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    if policy == OverwritePolicy::Skip && path.exists() {
        warn!("'{}' already exists, skipping.", path.display());
        return Ok(false);
    }

    fs::write(path, content).map_err(Error::IoError)?;
    Ok(true)
}

/// Copies a static file byte-for-byte, creating parent directories first.
/// No rendering is applied.
///
/// # Returns
/// * `Result<bool>` - `true` if the file was copied, `false` if an
///   existing file was skipped under `OverwritePolicy::Skip`
pub fn copy_static<P: AsRef<Path>>(source: P, dest: P, policy: OverwritePolicy) -> Result<bool> {
    let dest = dest.as_ref();

    if let Some(parent) = dest.parent() {
        ensure_dir(parent)?;
    }

    if policy == OverwritePolicy::Skip && dest.exists() {
        warn!("'{}' already exists, skipping.", dest.display());
        return Ok(false);
    }

    fs::copy(source.as_ref(), dest).map(|_| true).map_err(Error::IoError)
}
