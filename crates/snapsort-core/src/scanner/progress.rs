/// Scan progress reporting — lightweight messages sent from the scan
/// thread to the UI thread via a crossbeam channel.

use crate::model::FolderListing;
use std::time::Duration;

/// Progress updates sent from the scan thread to the UI.
#[derive(Debug)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        dirs_found: u64,
        total_size: u64,
        current_path: String,
    },
    /// A non-fatal error (e.g. permission denied on one entry).
    Error { path: String, message: String },
    /// Scanning completed successfully; the finished listing rides along.
    Complete {
        listing: FolderListing,
        duration: Duration,
        error_count: u64,
    },
    /// Scan was cancelled by the user.
    Cancelled,
}
