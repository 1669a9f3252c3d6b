use std::path::PathBuf;

use thiserror::Error;

/// The scan root itself is unusable. Fatal: the run aborts before any diff
/// or copy work happens.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path does not exist: {0}")]
    Missing(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// A file could not be read while computing its content checksum. Reported
/// per file; the rest of the duplicate scan continues.
#[derive(Debug, Error)]
#[error("Failed to checksum '{path}': {source}")]
pub struct ChecksumError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A staging copy failed. Reported per file; the remaining delta entries
/// still attempt their copy.
#[derive(Debug, Error)]
#[error("Failed to copy '{src}' to '{dest}': {source}")]
pub struct CopyError {
    pub src: PathBuf,
    pub dest: PathBuf,
    #[source]
    pub source: std::io::Error,
}
