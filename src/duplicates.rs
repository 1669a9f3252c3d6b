use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use indicatif::{HumanCount, ProgressBar};
use log::info;
use rayon::prelude::*;

use crate::checksum::file_checksum;
use crate::error::ChecksumError;
use crate::inventory::{Inventory, PhotoEntry};

/// Entries sharing one filename, sub-classified by content checksum.
///
/// One checksum key means every copy is byte-identical (a true duplicate);
/// two or more keys mean distinct files are sharing a name (a collision worth
/// warning about). Paths whose checksum failed are excluded from the map and
/// recorded in `failed`; the readable paths still classify.
#[derive(Debug)]
pub struct DuplicateGroup {
    pub filename: String,
    /// Checksum -> paths holding that exact content. Paths are sorted.
    pub paths_by_checksum: BTreeMap<String, Vec<PathBuf>>,
    /// Paths that could not be read, with the error for each.
    pub failed: Vec<(PathBuf, ChecksumError)>,
}

impl DuplicateGroup {
    /// All readable copies share one checksum.
    pub fn is_true_duplicate(&self) -> bool {
        self.paths_by_checksum.len() == 1
    }

    pub fn path_count(&self) -> usize {
        self.paths_by_checksum.values().map(Vec::len).sum::<usize>() + self.failed.len()
    }
}

/// Finds filenames occurring 2+ times within the storage tree and classifies
/// each by content checksum. This reads the full content of every colliding
/// file, which is why it only runs when explicitly requested.
pub fn find_duplicates(storage: &Inventory) -> Vec<DuplicateGroup> {
    classify(storage.entries())
}

/// Same classification, run over the camera card and the storage tree merged,
/// so a filename present once on each side still forms a group.
pub fn find_cross_duplicates(camera: &Inventory, storage: &Inventory) -> Vec<DuplicateGroup> {
    let mut merged = Vec::with_capacity(camera.len() + storage.len());
    merged.extend_from_slice(camera.entries());
    merged.extend_from_slice(storage.entries());
    classify(&merged)
}

fn classify(entries: &[PhotoEntry]) -> Vec<DuplicateGroup> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.filename.as_str()).or_default() += 1;
    }

    let colliding: Vec<&PhotoEntry> = entries
        .iter()
        .filter(|entry| counts[entry.filename.as_str()] >= 2)
        .collect();

    info!(
        "Checksumming {} files across {} colliding filenames",
        HumanCount(colliding.len() as u64),
        HumanCount(counts.values().filter(|count| **count >= 2).count() as u64)
    );

    let progress = ProgressBar::new(colliding.len() as u64);
    progress.set_message("Checksumming colliding files...");

    // Checksums are independent per file; hash them in parallel and rebuild
    // deterministic ordering afterwards (groups by filename, digests via
    // BTreeMap, paths sorted).
    let checksummed: Vec<(&PhotoEntry, Result<String, ChecksumError>)> = colliding
        .par_iter()
        .map(|entry| {
            let result = file_checksum(&entry.path());
            progress.inc(1);
            (*entry, result)
        })
        .collect();
    progress.finish_and_clear();

    let mut groups: BTreeMap<String, DuplicateGroup> = BTreeMap::new();
    for (entry, result) in checksummed {
        let group = groups
            .entry(entry.filename.clone())
            .or_insert_with(|| DuplicateGroup {
                filename: entry.filename.clone(),
                paths_by_checksum: BTreeMap::new(),
                failed: Vec::new(),
            });
        match result {
            Ok(digest) => group
                .paths_by_checksum
                .entry(digest)
                .or_default()
                .push(entry.path()),
            Err(err) => group.failed.push((entry.path(), err)),
        }
    }

    let mut groups: Vec<DuplicateGroup> = groups.into_values().collect();
    for group in &mut groups {
        for paths in group.paths_by_checksum.values_mut() {
            paths.sort();
        }
        group.failed.sort_by(|a, b| a.0.cmp(&b.0));
    }
    groups
}
