/// File-type histogram — per-extension counts and byte totals.
use crate::model::FileEntry;
use serde::Serialize;
use std::collections::HashMap;

/// Bucket label for files without an extension.
pub const NO_EXTENSION: &str = "no extension";

/// Count and size totals for a single extension.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExtensionStat {
    /// Lowercase extension without the dot, or [`NO_EXTENSION`].
    pub extension: String,
    pub count: u64,
    pub total_size: u64,
}

/// Compute per-extension stats over `entries`, most frequent first.
///
/// Directories are ignored. Ties on count break by total size, then by
/// name, so the ordering is fully deterministic.
pub fn extension_histogram(entries: &[FileEntry]) -> Vec<ExtensionStat> {
    let mut map: HashMap<String, ExtensionStat> = HashMap::new();

    for entry in entries {
        if entry.is_dir {
            continue;
        }
        let ext = entry
            .extension()
            .unwrap_or_else(|| NO_EXTENSION.to_string());
        let stat = map.entry(ext.clone()).or_insert_with(|| ExtensionStat {
            extension: ext,
            count: 0,
            total_size: 0,
        });
        stat.count += 1;
        stat.total_size += entry.size;
    }

    let mut results: Vec<ExtensionStat> = map.into_values().collect();
    results.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(b.total_size.cmp(&a.total_size))
            .then(a.extension.cmp(&b.extension))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> FileEntry {
        FileEntry {
            name: CompactString::new(name),
            path: PathBuf::from(format!("/data/{name}")),
            size,
            modified: None,
            is_dir: false,
        }
    }

    #[test]
    fn histogram_groups_and_sorts_by_count() {
        let entries = vec![
            file("a.rs", 10),
            file("b.rs", 20),
            file("c.png", 500),
        ];
        let stats = extension_histogram(&entries);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].extension, "rs");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].total_size, 30);
        assert_eq!(stats[1].extension, "png");
    }

    #[test]
    fn histogram_buckets_extensionless_files() {
        let entries = vec![file("Makefile", 5), file("LICENSE", 7)];
        let stats = extension_histogram(&entries);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].extension, NO_EXTENSION);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].total_size, 12);
    }

    #[test]
    fn histogram_is_case_insensitive() {
        let entries = vec![file("a.JPG", 1), file("b.jpg", 1)];
        let stats = extension_histogram(&entries);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].extension, "jpg");
        assert_eq!(stats[0].count, 2);
    }

    #[test]
    fn histogram_empty_input() {
        assert!(extension_histogram(&[]).is_empty());
    }
}
