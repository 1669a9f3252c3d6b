use std::collections::HashSet;

use log::debug;

use crate::inventory::{Fingerprint, Inventory, PhotoEntry};

/// Camera entries whose fingerprint is absent from storage.
///
/// Pure set difference over fingerprints, O(|camera| + |storage|). The
/// difference is computed per entry, not per fingerprint: if the camera card
/// holds two files with the same name and size, both show up in the delta and
/// the staging copier has to deal with the destination name collision.
pub fn compute_delta(camera: &Inventory, storage: &Inventory) -> Vec<PhotoEntry> {
    let stored: HashSet<Fingerprint> = storage.fingerprints();

    let delta: Vec<PhotoEntry> = camera
        .iter()
        .filter(|entry| !stored.contains(&entry.fingerprint()))
        .cloned()
        .collect();

    debug!(
        "Delta: {} of {} camera entries missing from storage",
        delta.len(),
        camera.len()
    );
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(entries: Vec<PhotoEntry>) -> Inventory {
        Inventory::new("/root", entries)
    }

    #[test]
    fn delta_of_inventory_with_itself_is_empty() {
        let camera = inventory(vec![
            PhotoEntry::new("a.jpg", "/cam", 10),
            PhotoEntry::new("b.jpg", "/cam/sub", 20),
        ]);
        assert!(compute_delta(&camera, &camera).is_empty());
    }

    #[test]
    fn delta_of_empty_camera_is_empty() {
        let camera = inventory(vec![]);
        let storage = inventory(vec![PhotoEntry::new("a.jpg", "/store", 10)]);
        assert!(compute_delta(&camera, &storage).is_empty());
    }

    #[test]
    fn delta_against_empty_storage_is_whole_camera() {
        let camera = inventory(vec![
            PhotoEntry::new("a.jpg", "/cam", 10),
            PhotoEntry::new("a.jpg", "/cam/sub", 10),
        ]);
        let storage = inventory(vec![]);
        let delta = compute_delta(&camera, &storage);
        assert_eq!(delta.len(), 2);
        assert_eq!(delta, camera.entries());
    }

    #[test]
    fn delta_ignores_directory_differences() {
        let storage = inventory(vec![PhotoEntry::new("photo1.jpg", "/store/2013", 100)]);
        let camera = inventory(vec![
            PhotoEntry::new("photo1.jpg", "/cam/DCIM", 100),
            PhotoEntry::new("photo2.jpg", "/cam/DCIM", 200),
        ]);

        let delta = compute_delta(&camera, &storage);
        assert_eq!(delta.len(), 1);
        assert_eq!(delta[0].filename, "photo2.jpg");
        assert_eq!(delta[0].size, 200);
    }

    #[test]
    fn same_name_different_size_is_missing() {
        let storage = inventory(vec![PhotoEntry::new("photo1.jpg", "/store", 100)]);
        let camera = inventory(vec![PhotoEntry::new("photo1.jpg", "/cam", 101)]);

        let delta = compute_delta(&camera, &storage);
        assert_eq!(delta.len(), 1);
    }

    #[test]
    fn duplicate_camera_fingerprints_each_appear() {
        let storage = inventory(vec![]);
        let camera = inventory(vec![
            PhotoEntry::new("a.jpg", "/cam/one", 10),
            PhotoEntry::new("a.jpg", "/cam/two", 10),
        ]);

        let delta = compute_delta(&camera, &storage);
        assert_eq!(delta.len(), 2);
    }

    #[test]
    fn delta_entries_come_from_camera_only() {
        let storage = inventory(vec![PhotoEntry::new("s.jpg", "/store", 1)]);
        let camera = inventory(vec![PhotoEntry::new("c.jpg", "/cam", 2)]);

        let delta = compute_delta(&camera, &storage);
        let stored = storage.fingerprints();
        for entry in &delta {
            assert!(camera.entries().contains(entry));
            assert!(!stored.contains(&entry.fingerprint()));
        }
    }
}
