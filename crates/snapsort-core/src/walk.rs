/// Synchronous recursive file collection used by duplicate detection and
/// folder analysis.
///
/// Unlike the background [`crate::scanner`], these walks run inside an
/// already-spawned worker and want a plain `Vec` back. Unreadable entries
/// are collected as per-path errors rather than aborting the walk.
use crate::error::{io_error_for, CoreError, CoreResult};
use crate::model::FileEntry;
use std::path::{Path, PathBuf};

/// Maximum recursion depth, guarding against symlink loops.
const MAX_WALK_DEPTH: usize = 64;

/// Everything a recursive walk produced.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Regular files found, in walk order.
    pub files: Vec<FileEntry>,
    /// Number of directories visited (the root excluded).
    pub dir_count: u64,
    /// Entries that could not be read, with the failure message.
    pub errors: Vec<(PathBuf, String)>,
}

/// Recursively collect all regular files under `root`.
///
/// Symlinks are not followed. Fails fast only when `root` itself is
/// missing or not a directory; everything below that is best-effort.
pub fn collect_files(root: &Path) -> CoreResult<WalkOutcome> {
    if !root.exists() {
        return Err(CoreError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CoreError::NotADirectory(root.to_path_buf()));
    }

    let mut outcome = WalkOutcome::default();
    walk_into(root, 0, &mut outcome);
    Ok(outcome)
}

fn walk_into(dir: &Path, depth: usize, out: &mut WalkOutcome) {
    if depth > MAX_WALK_DEPTH {
        out.errors.push((
            dir.to_path_buf(),
            format!("maximum folder depth ({MAX_WALK_DEPTH}) exceeded"),
        ));
        return;
    }

    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            out.errors
                .push((dir.to_path_buf(), io_error_for(dir, e).to_string()));
            return;
        }
    };

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                out.errors.push((dir.to_path_buf(), e.to_string()));
                continue;
            }
        };

        let path = dir_entry.path();
        let meta = match std::fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                out.errors.push((path.clone(), e.to_string()));
                continue;
            }
        };

        if meta.is_dir() {
            out.dir_count += 1;
            walk_into(&path, depth + 1, out);
        } else if meta.is_file() {
            out.files.push(FileEntry::from_metadata(path, &meta));
        }
        // Symlinks and other special entries are skipped.
    }
}

/// Collect only the regular files sitting directly inside `root`.
///
/// Sort Files and Bulk Rename operate on one level, matching what the
/// files panel displays.
pub fn immediate_files(root: &Path) -> CoreResult<(Vec<FileEntry>, Vec<(PathBuf, String)>)> {
    if !root.exists() {
        return Err(CoreError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CoreError::NotADirectory(root.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(root).map_err(|e| io_error_for(root, e))?;

    let mut files = Vec::new();
    let mut errors = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                errors.push((root.to_path_buf(), e.to_string()));
                continue;
            }
        };
        let path = dir_entry.path();
        match std::fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_file() => files.push(FileEntry::from_metadata(path, &meta)),
            Ok(_) => {}
            Err(e) => errors.push((path, e.to_string())),
        }
    }
    Ok((files, errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collect_finds_nested_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("top.txt"), b"aa").unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.bin"), b"bbbb").unwrap();

        let outcome = collect_files(tmp.path()).unwrap();
        assert_eq!(outcome.files.len(), 2);
        assert_eq!(outcome.dir_count, 1);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn collect_missing_root_is_not_found() {
        let err = collect_files(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn collect_on_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, b"x").unwrap();
        let err = collect_files(&file).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)));
    }

    #[test]
    fn immediate_skips_directories_and_nested_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("nested.txt"), b"n").unwrap();

        let (files, errors) = immediate_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name.as_str(), "a.txt");
        assert!(errors.is_empty());
    }
}
