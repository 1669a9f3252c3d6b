use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::ChecksumError;

const CHUNK_SIZE: usize = 8192;

/// Streams the file through BLAKE3 and returns the lowercase hex digest.
///
/// Equal content always yields an equal digest; a read error aborts the
/// computation and surfaces as a `ChecksumError` so the caller never sees a
/// digest for bytes that were not fully read.
pub fn file_checksum(path: &Path) -> Result<String, ChecksumError> {
    let mut file = File::open(path).map_err(|source| ChecksumError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(|source| ChecksumError {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let digest = hasher.finalize().to_hex().to_string();
    debug!("Checksum for '{}': {}", path.display(), digest);
    Ok(digest)
}
