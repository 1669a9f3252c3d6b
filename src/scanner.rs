use std::path::Path;

use indicatif::{HumanBytes, HumanCount, ProgressBar};
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::inventory::{Inventory, PhotoEntry};

/// Recursively inventories every regular file under `root`.
///
/// Fails only if the root itself is missing or not a directory. Entries that
/// cannot be read (broken symlinks, permission problems) are skipped with a
/// warning rather than aborting the scan. Symlinks are not followed.
pub fn scan(root: &Path) -> Result<Inventory, ScanError> {
    if !root.exists() {
        return Err(ScanError::Missing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    info!("Scanning {}", root.display());

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Scanning {}...", root.display()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut entries = Vec::new();
    let mut total_size = 0u64;

    for entry in WalkDir::new(root).follow_links(false) {
        spinner.tick();
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry under '{}': {}", root.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("Failed to read metadata for '{}': {}", entry.path().display(), err);
                continue;
            }
        };

        let filename = entry.file_name().to_string_lossy().into_owned();
        let directory = entry.path().parent().unwrap_or(root).to_path_buf();

        debug!("Found file: '{}'", entry.path().display());
        total_size += metadata.len();
        entries.push(PhotoEntry::new(filename, directory, metadata.len()));
    }
    spinner.finish_and_clear();

    info!(
        "Found {} files ({}) under {}",
        HumanCount(entries.len() as u64),
        HumanBytes(total_size),
        root.display()
    );

    Ok(Inventory::new(root, entries))
}
