/// Bulk renamer — sequential renaming with a fixed template.
///
/// Every immediate file in the folder becomes `<stem>_NNN<ext>` with a
/// strictly increasing counter and the original extension preserved.
/// Renaming is two-phase: every file first moves to a unique temporary
/// name, then to its final name. Without the intermediate step a target
/// like `photo_002.jpg` could collide with a source that has not been
/// processed yet.
use crate::error::{CoreError, CoreResult};
use crate::walk::immediate_files;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of one Bulk Rename run.
#[derive(Debug, Default, Serialize)]
pub struct RenameReport {
    /// (old path, new path) pairs, in counter order.
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Per-file failures (the file keeps its previous name).
    pub errors: Vec<(PathBuf, String)>,
}

/// Compute the planned old name → new name pairs without touching disk.
///
/// Used by the rename dialog to preview the outcome before confirming.
pub fn rename_plan(root: &Path, stem: &str) -> CoreResult<Vec<(String, String)>> {
    validate_stem(stem)?;
    let files = sorted_files(root)?;
    let width = counter_width(files.len());

    Ok(files
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            (
                entry.name.to_string(),
                target_name(stem, i + 1, width, &entry.path),
            )
        })
        .collect())
}

/// Rename every immediate file of `root` to the template `<stem>_NNN<ext>`.
///
/// Files are processed in name order so the counter assignment is
/// deterministic. A file that fails phase one keeps its original name and
/// its counter value is simply skipped; the output sequence stays strictly
/// increasing either way.
pub fn bulk_rename(root: &Path, stem: &str) -> CoreResult<RenameReport> {
    validate_stem(stem)?;
    let files = sorted_files(root)?;
    let width = counter_width(files.len());

    let mut report = RenameReport::default();

    // Phase 1: move everything out of the way under unique temporary names.
    let mut staged: Vec<(PathBuf, PathBuf, String)> = Vec::with_capacity(files.len());
    for (i, entry) in files.iter().enumerate() {
        let final_name = target_name(stem, i + 1, width, &entry.path);
        let tmp = root.join(format!(".snapsort-tmp-{i}"));
        match std::fs::rename(&entry.path, &tmp) {
            Ok(()) => staged.push((entry.path.clone(), tmp, final_name)),
            Err(e) => {
                warn!("failed to stage {}: {e}", entry.path.display());
                report.errors.push((entry.path.clone(), e.to_string()));
            }
        }
    }

    // Phase 2: settle each staged file under its final name.
    for (original, tmp, final_name) in staged {
        let target = root.join(&final_name);
        match std::fs::rename(&tmp, &target) {
            Ok(()) => report.renamed.push((original, target)),
            Err(e) => {
                // Roll the temporary name back so the file is not stranded
                // under a hidden name; if even that fails, report the
                // temporary path so the user can find it.
                let msg = e.to_string();
                if std::fs::rename(&tmp, &original).is_err() {
                    report.errors.push((tmp, msg));
                } else {
                    report.errors.push((original, msg));
                }
            }
        }
    }

    info!(
        "renamed {} files in {} ({} errors)",
        report.renamed.len(),
        root.display(),
        report.errors.len()
    );
    Ok(report)
}

/// Immediate files of `root`, sorted by name for deterministic numbering.
fn sorted_files(root: &Path) -> CoreResult<Vec<crate::model::FileEntry>> {
    let (mut files, _errors) = immediate_files(root)?;
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Counter width: at least three digits, widened for very large folders.
fn counter_width(count: usize) -> usize {
    let digits = count.to_string().len();
    digits.max(3)
}

/// `<stem>_NNN<ext>` for the file at `path`.
fn target_name(stem: &str, counter: usize, width: usize, path: &Path) -> String {
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{stem}_{counter:0width$}{ext}")
}

/// Reject template stems that cannot form a valid file name.
fn validate_stem(stem: &str) -> CoreResult<()> {
    let ok = !stem.is_empty()
        && stem != "."
        && stem != ".."
        && !stem.contains(['/', '\\', '\0', ':']);
    if ok {
        Ok(())
    } else {
        Err(CoreError::InvalidName(stem.to_string()))
    }
}
