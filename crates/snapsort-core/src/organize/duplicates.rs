/// Duplicate file detection — size-first grouping, then content hashing.
///
/// Phase 1 groups files by size: a file with a unique size cannot have a
/// byte-identical twin, so most files are rejected without any I/O.
/// Phase 2 hashes the remaining candidates (SHA-256, streamed in 8 KiB
/// chunks) on the rayon pool and groups by digest. Only groups of two or
/// more survive. No action is taken on found duplicates beyond reporting.
use crate::error::{CoreError, CoreResult};
use crate::walk::collect_files;
use rayon::prelude::*;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Streaming read chunk for hashing.
const HASH_CHUNK_SIZE: usize = 8 * 1024;

/// A group of files with identical content.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroup {
    /// File size in bytes (shared by all files in the group).
    pub size: u64,
    /// SHA-256 hex digest of the file content.
    pub hash: String,
    /// Paths that share the same content (always 2+).
    pub files: Vec<PathBuf>,
}

/// Outcome of one Find Duplicates run.
#[derive(Debug, Default, Serialize)]
pub struct DuplicateReport {
    /// Duplicate groups, sorted by file size descending.
    pub groups: Vec<DuplicateGroup>,
    /// Total number of files examined (before size rejection).
    pub files_scanned: u64,
    /// Bytes that could be reclaimed: `size * (count - 1)` per group.
    pub wasted_bytes: u64,
    /// Files that could not be read or hashed.
    pub errors: Vec<(PathBuf, String)>,
}

impl DuplicateReport {
    /// Total number of files across all duplicate groups.
    pub fn duplicate_file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }
}

/// Find groups of byte-identical files under `root`, recursively.
///
/// Checks `cancel` between size groups and returns
/// [`CoreError::Cancelled`] when it flips, so a long hash run can be
/// abandoned promptly.
pub fn find_duplicates(root: &Path, cancel: &AtomicBool) -> CoreResult<DuplicateReport> {
    let outcome = collect_files(root)?;

    let mut report = DuplicateReport {
        files_scanned: outcome.files.len() as u64,
        errors: outcome.errors,
        ..Default::default()
    };

    // Phase 1: group by size — unique sizes cannot be duplicates.
    let mut size_groups: HashMap<u64, Vec<PathBuf>> = HashMap::new();
    for entry in outcome.files {
        size_groups.entry(entry.size).or_default().push(entry.path);
    }
    let candidates: Vec<(u64, Vec<PathBuf>)> = size_groups
        .into_iter()
        .filter(|(_, paths)| paths.len() >= 2)
        .collect();
    debug!(
        "{} size-colliding groups out of {} files",
        candidates.len(),
        report.files_scanned
    );

    // Phase 2: hash candidates and sub-group by digest.
    for (size, paths) in candidates {
        if cancel.load(Ordering::Relaxed) {
            return Err(CoreError::Cancelled);
        }

        let hashed: Vec<(PathBuf, std::io::Result<String>)> = paths
            .into_par_iter()
            .map(|path| {
                let digest = hash_file(&path);
                (path, digest)
            })
            .collect();

        let mut hash_groups: HashMap<String, Vec<PathBuf>> = HashMap::new();
        for (path, result) in hashed {
            match result {
                Ok(digest) => hash_groups.entry(digest).or_default().push(path),
                Err(e) => report.errors.push((path, e.to_string())),
            }
        }

        for (hash, files) in hash_groups {
            if files.len() >= 2 {
                report.wasted_bytes += size * (files.len() as u64 - 1);
                report.groups.push(DuplicateGroup { size, hash, files });
            }
        }
    }

    // Largest duplicates first; paths sorted for stable display.
    report.groups.sort_by(|a, b| b.size.cmp(&a.size));
    for group in &mut report.groups {
        group.files.sort();
    }

    info!(
        "duplicate scan of {}: {} groups, {} wasted bytes",
        root.display(),
        report.groups.len(),
        report.wasted_bytes
    );
    Ok(report)
}

/// SHA-256 hex digest of a file's content, streamed in 8 KiB chunks.
pub fn hash_file(path: &Path) -> std::io::Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; HASH_CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn hash_file_matches_known_digest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("abc.txt");
        fs::write(&path, b"abc").unwrap();
        // SHA-256("abc")
        assert_eq!(
            hash_file(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn hash_file_streams_past_one_chunk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.bin");
        let content = vec![0x5a_u8; HASH_CHUNK_SIZE * 3 + 17];
        fs::write(&path, &content).unwrap();

        let mut hasher = Sha256::new();
        hasher.update(&content);
        assert_eq!(hash_file(&path).unwrap(), format!("{:x}", hasher.finalize()));
    }

    #[test]
    fn hash_file_missing_is_io_error() {
        assert!(hash_file(Path::new("/no/such/file")).is_err());
    }
}
