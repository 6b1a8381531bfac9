/// Extension classifier — moves files into category subfolders.
///
/// A single pass over the folder's immediate files. Each file whose
/// extension matches a category is moved into a subfolder named after that
/// category, created on demand. Unmatched files and subdirectories are left
/// untouched. Destinations are never overwritten: a colliding name receives
/// a ` (n)` suffix before the extension, smallest free `n` first.
use crate::error::CoreResult;
use crate::rules::CategoryRules;
use crate::walk::immediate_files;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One file that Sort Files relocated.
#[derive(Debug, Clone, Serialize)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
    pub category: String,
}

/// Outcome of one Sort Files run.
#[derive(Debug, Default, Serialize)]
pub struct OrganizeReport {
    /// Files moved, in processing order.
    pub moved: Vec<MovedFile>,
    /// Files whose extension matched no category and were left in place.
    pub unmatched: u64,
    /// Per-file failures (the file stays where it was).
    pub errors: Vec<(PathBuf, String)>,
}

/// Classify the immediate files of `root` into category subfolders.
///
/// Fails only when `root` itself is unusable; per-file move failures are
/// collected into the report.
pub fn organize_folder(root: &Path, rules: &CategoryRules) -> CoreResult<OrganizeReport> {
    let (files, walk_errors) = immediate_files(root)?;

    let mut report = OrganizeReport {
        errors: walk_errors,
        ..Default::default()
    };

    for entry in files {
        let Some(category) = entry.extension().as_deref().and_then(|e| rules.category_for(e))
        else {
            report.unmatched += 1;
            continue;
        };
        let category = category.to_string();

        let dest_dir = root.join(&category);
        if let Err(e) = std::fs::create_dir_all(&dest_dir) {
            report.errors.push((dest_dir, e.to_string()));
            continue;
        }

        let dest = unique_destination(&dest_dir.join(entry.name.as_str()));
        match move_file(&entry.path, &dest) {
            Ok(()) => report.moved.push(MovedFile {
                from: entry.path,
                to: dest,
                category,
            }),
            Err(e) => {
                warn!("failed to move {}: {e}", entry.path.display());
                report.errors.push((entry.path, e.to_string()));
            }
        }
    }

    info!(
        "organized {}: {} moved, {} unmatched, {} errors",
        root.display(),
        report.moved.len(),
        report.unmatched,
        report.errors.len()
    );
    Ok(report)
}

/// Move a file, falling back to copy + delete when rename fails
/// (e.g. across filesystems).
fn move_file(src: &Path, dest: &Path) -> std::io::Result<()> {
    match std::fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(_) => {
            std::fs::copy(src, dest)?;
            std::fs::remove_file(src)
        }
    }
}

/// First non-existing variant of `wanted`, inserting ` (n)` before the
/// extension when the plain name is taken.
fn unique_destination(wanted: &Path) -> PathBuf {
    if !wanted.exists() {
        return wanted.to_path_buf();
    }

    let stem = wanted
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = wanted
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = wanted.parent().unwrap_or_else(|| Path::new(""));

    for n in 1u32.. {
        let candidate = parent.join(format!("{stem} ({n}){ext}"));
        if !candidate.exists() {
            return candidate;
        }
    }
    unreachable!("u32 counter exhausted");
}
