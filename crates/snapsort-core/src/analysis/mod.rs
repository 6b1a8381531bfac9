/// Analysis modules — the numbers and charts behind the Analyse dialog.

pub mod file_types;
pub mod hashes;
pub mod size_dist;

use crate::error::CoreResult;
use crate::walk::collect_files;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use tracing::info;

pub use file_types::{extension_histogram, ExtensionStat};
pub use hashes::HashedFile;
pub use size_dist::{size_distribution, SizeHistogram};

/// Default number of buckets for the size-distribution histogram.
pub const DEFAULT_SIZE_BINS: usize = 20;

/// Headline statistics for a folder.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FolderSummary {
    pub file_count: u64,
    pub dir_count: u64,
    pub total_size: u64,
    pub unique_extensions: u64,
}

/// Everything the analysis view displays, computed in one pass.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub root: PathBuf,
    pub summary: FolderSummary,
    /// Per-extension counts and byte totals, most frequent first.
    pub extensions: Vec<ExtensionStat>,
    /// File sizes bucketed into equal-width bins.
    pub size_histogram: SizeHistogram,
    /// Per-file SHA-256 digests.
    pub hashes: Vec<HashedFile>,
    /// Entries that could not be read or hashed.
    pub errors: Vec<(PathBuf, String)>,
}

/// Analyse the folder subtree rooted at `root`.
///
/// Walks recursively, then computes the summary, both histograms, and the
/// per-file hash listing. Hashing dominates the cost and honours `cancel`.
pub fn analyse_folder(root: &Path, cancel: &AtomicBool) -> CoreResult<AnalysisReport> {
    let outcome = collect_files(root)?;

    let extensions = extension_histogram(&outcome.files);
    let summary = FolderSummary {
        file_count: outcome.files.len() as u64,
        dir_count: outcome.dir_count,
        total_size: outcome.files.iter().map(|f| f.size).sum(),
        unique_extensions: extensions.len() as u64,
    };
    let size_histogram = size_distribution(&outcome.files, DEFAULT_SIZE_BINS);

    let mut errors = outcome.errors;
    let hashes = hashes::hash_listing(&outcome.files, cancel, &mut errors)?;

    info!(
        "analysed {}: {} files, {} extensions, {} errors",
        root.display(),
        summary.file_count,
        summary.unique_extensions,
        errors.len()
    );

    Ok(AnalysisReport {
        root: root.to_path_buf(),
        summary,
        extensions,
        size_histogram,
        hashes,
        errors,
    })
}
