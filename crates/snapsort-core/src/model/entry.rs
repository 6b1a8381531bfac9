/// A single entry in a scanned folder listing.
///
/// Listings are transient: they reflect the filesystem at the moment of the
/// scan and are recomputed from scratch by every operation rather than kept
/// in sync incrementally.
use compact_str::CompactString;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A single file or directory found by a scan.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// File or directory name only (NOT the full path).
    pub name: CompactString,

    /// Full path of the entry.
    pub path: PathBuf,

    /// Logical file size in bytes. Zero for directories.
    pub size: u64,

    /// Last-modified timestamp, when the filesystem reports one.
    pub modified: Option<SystemTime>,

    /// `true` if this entry is a directory.
    pub is_dir: bool,
}

impl FileEntry {
    /// Build an entry from a path and its metadata.
    pub fn from_metadata(path: PathBuf, meta: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_else(|| CompactString::new(path.to_string_lossy()));
        Self {
            name,
            size: if meta.is_dir() { 0 } else { meta.len() },
            modified: meta.modified().ok(),
            is_dir: meta.is_dir(),
            path,
        }
    }

    /// The lowercased final extension, without the dot.
    ///
    /// Returns `None` for directories and for names without an extension
    /// (including dotfiles like `.gitignore`, where the whole name is the
    /// stem as far as `Path::extension` is concerned).
    pub fn extension(&self) -> Option<String> {
        if self.is_dir {
            return None;
        }
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
    }
}

/// The complete listing produced by a folder scan.
#[derive(Debug, Clone, Default)]
pub struct FolderListing {
    /// The folder that was scanned.
    pub root: PathBuf,

    /// Every file and directory found, in walk order (root excluded).
    pub entries: Vec<FileEntry>,

    /// Sum of all file sizes.
    pub total_size: u64,
}

impl FolderListing {
    /// Number of files (not directories) in the listing.
    pub fn file_count(&self) -> u64 {
        self.entries.iter().filter(|e| !e.is_dir).count() as u64
    }

    /// Number of directories in the listing.
    pub fn dir_count(&self) -> u64 {
        self.entries.iter().filter(|e| e.is_dir).count() as u64
    }

    /// Entries that live directly inside the scanned folder.
    ///
    /// The files panel shows one level; deeper entries only feed analysis
    /// and duplicate detection.
    pub fn immediate(&self) -> Vec<&FileEntry> {
        self.entries
            .iter()
            .filter(|e| e.path.parent() == Some(self.root.as_path()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, size: u64) -> FileEntry {
        FileEntry {
            name: CompactString::new(Path::new(path).file_name().unwrap().to_string_lossy()),
            path: PathBuf::from(path),
            size,
            modified: None,
            is_dir: false,
        }
    }

    fn dir(path: &str) -> FileEntry {
        FileEntry {
            name: CompactString::new(Path::new(path).file_name().unwrap().to_string_lossy()),
            path: PathBuf::from(path),
            size: 0,
            modified: None,
            is_dir: true,
        }
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file("/tmp/PHOTO.JPG", 1).extension().as_deref(), Some("jpg"));
        assert_eq!(file("/tmp/notes.md", 1).extension().as_deref(), Some("md"));
    }

    #[test]
    fn extension_none_for_dirs_and_bare_names() {
        assert_eq!(dir("/tmp/sub").extension(), None);
        assert_eq!(file("/tmp/README", 1).extension(), None);
        // `.gitignore` has no extension per Path semantics.
        assert_eq!(file("/tmp/.gitignore", 1).extension(), None);
    }

    #[test]
    fn immediate_filters_nested_entries() {
        let listing = FolderListing {
            root: PathBuf::from("/data"),
            entries: vec![
                file("/data/a.txt", 10),
                dir("/data/sub"),
                file("/data/sub/b.txt", 20),
            ],
            total_size: 30,
        };
        let top: Vec<_> = listing.immediate().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(top, vec!["a.txt", "sub"]);
    }

    #[test]
    fn counts_split_files_and_dirs() {
        let listing = FolderListing {
            root: PathBuf::from("/data"),
            entries: vec![file("/data/a.txt", 10), dir("/data/sub")],
            total_size: 10,
        };
        assert_eq!(listing.file_count(), 1);
        assert_eq!(listing.dir_count(), 1);
    }
}
