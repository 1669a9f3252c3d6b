use colored::Colorize;
use indicatif::HumanBytes;
use log::warn;

use crate::duplicates::DuplicateGroup;
use crate::inventory::PhotoEntry;
use crate::staging::StagingReport;

/// Prints the delta sorted by `(filename, directory)`, one file per line.
pub fn print_delta(delta: &[PhotoEntry]) {
    let mut sorted: Vec<&PhotoEntry> = delta.iter().collect();
    sorted.sort_by(|a, b| (&a.filename, &a.directory).cmp(&(&b.filename, &b.directory)));

    println!("Files that need copying:");
    for entry in sorted {
        println!("  {} ({})", entry.path().display(), HumanBytes(entry.size));
    }
}

/// Prints each group in one of two formats: a plain location list for true
/// duplicates, or a per-checksum breakdown for name collisions.
pub fn print_duplicate_groups(groups: &[DuplicateGroup]) {
    if groups.is_empty() {
        println!("{}", "No duplicate filenames found!".green());
        return;
    }

    for group in groups {
        if group.is_true_duplicate() {
            println!(
                "{} appears in the following locations:",
                group.filename.as_str().yellow()
            );
            for paths in group.paths_by_checksum.values() {
                for path in paths {
                    println!("   - {}", path.display());
                }
            }
        } else {
            println!(
                "There are multiple files named {} but they do not have the same checksums",
                group.filename.as_str().red()
            );
            for (checksum, paths) in &group.paths_by_checksum {
                println!("   - Checksum of: {checksum}");
                for path in paths {
                    println!("      - {}", path.display());
                }
            }
        }
        for (path, err) in &group.failed {
            warn!("Skipped '{}' in group '{}': {}", path.display(), group.filename, err);
        }
    }
}

/// End-of-run summary of everything that went wrong without being fatal.
pub fn print_failure_summary(groups: &[DuplicateGroup], staging: Option<&StagingReport>) {
    let checksum_failures: usize = groups.iter().map(|group| group.failed.len()).sum();
    let copy_failures = staging.map_or(0, |report| report.failed.len());
    if checksum_failures == 0 && copy_failures == 0 {
        return;
    }

    warn!(
        "Run completed with {} checksum failure(s) and {} copy failure(s)",
        checksum_failures, copy_failures
    );
    for group in groups {
        for (_, err) in &group.failed {
            warn!("  {err}");
        }
    }
    if let Some(report) = staging {
        for (_, err) in &report.failed {
            warn!("  {err}");
        }
    }
}
