use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use log::{info, warn};

use crate::error::CopyError;
use crate::inventory::PhotoEntry;

/// Outcome of staging one delta: which destinations were written and which
/// sources failed.
#[derive(Debug, Default)]
pub struct StagingReport {
    pub copied: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, CopyError)>,
}

/// Copies every delta entry into the staging root, preserving permissions
/// and modification time.
///
/// Destinations are flat: `staging_root/<filename>`. When two delta entries
/// share a filename the later one overwrites the earlier at the staging root,
/// with a warning naming both sources. A failed copy is recorded and the
/// remaining entries still attempt theirs.
pub fn stage_delta(delta: &[PhotoEntry], staging_root: &Path) -> StagingReport {
    let mut report = StagingReport::default();
    let mut staged: HashMap<&str, &PhotoEntry> = HashMap::new();

    for entry in delta {
        let src = entry.path();
        let dest = staging_root.join(&entry.filename);

        if let Some(previous) = staged.insert(entry.filename.as_str(), entry) {
            warn!(
                "'{}' overwrites '{}' at the staging root (same filename)",
                src.display(),
                previous.path().display()
            );
        }

        info!("Copying {} to {}", src.display(), dest.display());
        match copy_preserving(&src, &dest) {
            Ok(()) => report.copied.push(dest),
            Err(source) => {
                let err = CopyError {
                    src: src.clone(),
                    dest,
                    source,
                };
                warn!("{err}");
                report.failed.push((src, err));
            }
        }
    }

    report
}

/// `fs::copy` carries permissions; the modification time has to be restated
/// from the source's metadata afterwards.
fn copy_preserving(src: &Path, dest: &Path) -> Result<(), std::io::Error> {
    fs::copy(src, dest)?;
    let metadata = fs::metadata(src)?;
    filetime::set_file_mtime(dest, FileTime::from_last_modification_time(&metadata))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entry_for(path: &Path) -> PhotoEntry {
        let metadata = fs::metadata(path).unwrap();
        PhotoEntry::new(
            path.file_name().unwrap().to_string_lossy().into_owned(),
            path.parent().unwrap(),
            metadata.len(),
        )
    }

    #[test]
    fn staging_two_entries_produces_two_files_with_matching_sizes() {
        let src_dir = tempdir().unwrap();
        let staging = tempdir().unwrap();
        let a = src_dir.path().join("a.jpg");
        let b = src_dir.path().join("b.jpg");
        fs::write(&a, b"aaaa").unwrap();
        fs::write(&b, b"bb").unwrap();

        let delta = vec![entry_for(&a), entry_for(&b)];
        let report = stage_delta(&delta, staging.path());

        assert_eq!(report.copied.len(), 2);
        assert!(report.failed.is_empty());
        assert_eq!(fs::metadata(staging.path().join("a.jpg")).unwrap().len(), 4);
        assert_eq!(fs::metadata(staging.path().join("b.jpg")).unwrap().len(), 2);
    }

    #[test]
    fn staged_copy_preserves_modification_time() {
        let src_dir = tempdir().unwrap();
        let staging = tempdir().unwrap();
        let src = src_dir.path().join("old.jpg");
        fs::write(&src, b"x").unwrap();
        filetime::set_file_mtime(&src, FileTime::from_unix_time(1_000_000, 0)).unwrap();

        let report = stage_delta(&[entry_for(&src)], staging.path());
        assert_eq!(report.copied.len(), 1);

        let staged = fs::metadata(staging.path().join("old.jpg")).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&staged).unix_seconds(), 1_000_000);
    }

    #[test]
    fn later_entry_wins_a_staging_name_collision() {
        let src_dir = tempdir().unwrap();
        let staging = tempdir().unwrap();
        let first = src_dir.path().join("one").join("img.jpg");
        let second = src_dir.path().join("two").join("img.jpg");
        fs::create_dir_all(first.parent().unwrap()).unwrap();
        fs::create_dir_all(second.parent().unwrap()).unwrap();
        fs::write(&first, b"first").unwrap();
        fs::write(&second, b"second!").unwrap();

        let delta = vec![entry_for(&first), entry_for(&second)];
        let report = stage_delta(&delta, staging.path());

        assert_eq!(report.copied.len(), 2);
        assert_eq!(
            fs::read(staging.path().join("img.jpg")).unwrap(),
            b"second!"
        );
    }

    #[test]
    fn failed_copy_is_recorded_and_the_rest_still_copy() {
        let src_dir = tempdir().unwrap();
        let staging = tempdir().unwrap();
        let real = src_dir.path().join("real.jpg");
        fs::write(&real, b"x").unwrap();

        let vanished = PhotoEntry::new("gone.jpg", src_dir.path(), 1);
        let delta = vec![vanished, entry_for(&real)];
        let report = stage_delta(&delta, staging.path());

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, src_dir.path().join("gone.jpg"));
        assert_eq!(report.copied, vec![staging.path().join("real.jpg")]);
    }
}
