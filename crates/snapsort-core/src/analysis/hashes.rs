/// Per-file content hashes for the File Hashes tab.
use crate::error::{CoreError, CoreResult};
use crate::model::FileEntry;
use crate::organize::duplicates::hash_file;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// How many files to hash per rayon batch between cancellation checks.
const HASH_BATCH: usize = 64;

/// A file together with its content digest.
#[derive(Debug, Clone, Serialize)]
pub struct HashedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    /// SHA-256 hex digest.
    pub digest: String,
}

/// Hash every file in `entries`, preserving input order.
///
/// Unreadable files are appended to `errors`; cancellation is checked
/// between batches and surfaces as [`CoreError::Cancelled`].
pub fn hash_listing(
    entries: &[FileEntry],
    cancel: &AtomicBool,
    errors: &mut Vec<(PathBuf, String)>,
) -> CoreResult<Vec<HashedFile>> {
    let mut hashed = Vec::with_capacity(entries.len());

    for batch in entries.chunks(HASH_BATCH) {
        if cancel.load(Ordering::Relaxed) {
            return Err(CoreError::Cancelled);
        }

        // Indexed parallel iterators collect in input order.
        let results: Vec<std::io::Result<String>> = batch
            .par_iter()
            .map(|entry| hash_file(&entry.path))
            .collect();

        for (entry, result) in batch.iter().zip(results) {
            match result {
                Ok(digest) => hashed.push(HashedFile {
                    name: entry.name.to_string(),
                    path: entry.path.clone(),
                    size: entry.size,
                    digest,
                }),
                Err(e) => errors.push((entry.path.clone(), e.to_string())),
            }
        }
    }

    Ok(hashed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::AtomicBool;
    use tempfile::TempDir;

    fn entry_for(path: &std::path::Path) -> FileEntry {
        let meta = fs::symlink_metadata(path).unwrap();
        FileEntry::from_metadata(path.to_path_buf(), &meta)
    }

    #[test]
    fn listing_preserves_input_order() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, b"first").unwrap();
        fs::write(&b, b"second").unwrap();

        let entries = vec![entry_for(&b), entry_for(&a)];
        let mut errors = Vec::new();
        let cancel = AtomicBool::new(false);
        let hashed = hash_listing(&entries, &cancel, &mut errors).unwrap();

        assert_eq!(hashed.len(), 2);
        assert_eq!(hashed[0].name, "b.txt");
        assert_eq!(hashed[1].name, "a.txt");
        assert!(errors.is_empty());
    }

    #[test]
    fn identical_content_produces_identical_digests() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.bin");
        let b = tmp.path().join("b.bin");
        fs::write(&a, b"same bytes").unwrap();
        fs::write(&b, b"same bytes").unwrap();

        let entries = vec![entry_for(&a), entry_for(&b)];
        let mut errors = Vec::new();
        let cancel = AtomicBool::new(false);
        let hashed = hash_listing(&entries, &cancel, &mut errors).unwrap();
        assert_eq!(hashed[0].digest, hashed[1].digest);
    }

    #[test]
    fn unreadable_file_is_collected_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real.txt");
        fs::write(&real, b"data").unwrap();
        let ghost = tmp.path().join("ghost.txt");
        fs::write(&ghost, b"x").unwrap();
        let mut entries = vec![entry_for(&real), entry_for(&ghost)];
        fs::remove_file(&ghost).unwrap();
        entries[1].size = 1;

        let mut errors = Vec::new();
        let cancel = AtomicBool::new(false);
        let hashed = hash_listing(&entries, &cancel, &mut errors).unwrap();
        assert_eq!(hashed.len(), 1);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn cancellation_surfaces_as_error() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        fs::write(&a, b"x").unwrap();

        let entries = vec![entry_for(&a)];
        let mut errors = Vec::new();
        let cancel = AtomicBool::new(true);
        let err = hash_listing(&entries, &cancel, &mut errors).unwrap_err();
        assert!(matches!(err, CoreError::Cancelled));
    }
}
