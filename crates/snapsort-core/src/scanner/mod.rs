/// Scanner module — background folder listing.
///
/// A scan walks the selected folder recursively on a dedicated thread using
/// `jwalk`'s rayon-backed parallel traversal, streaming lightweight progress
/// messages over a bounded channel. The finished [`FolderListing`] is
/// delivered inside the final `Complete` message, so the UI thread never
/// touches the filesystem itself.
pub mod progress;

use crate::model::{FileEntry, FolderListing};
use progress::ScanProgress;

use crossbeam_channel::Receiver;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

/// Maximum number of progress messages that may queue up in the channel.
///
/// The UI drains this channel once per frame (~60 fps). A burst of 1 024
/// messages gives the scanner plenty of headroom before back-pressure causes
/// `send` to block; if the UI falls behind (hidden window, resizing) the
/// scanner stalls briefly rather than consuming unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 1_024;

/// How many entries between `Update` progress messages.
const UPDATE_EVERY: u64 = 500;

/// Handle to a running or completed scan. Allows cancellation and
/// receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

/// Start a new scan of `root_path` on a background thread.
///
/// Returns a `ScanHandle` for receiving progress and requesting
/// cancellation.
pub fn scan_folder(root_path: PathBuf) -> ScanHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("snapsort-scanner".into())
        .spawn(move || {
            info!("Starting scan of {}", root_path.display());
            run_scan(root_path, &progress_tx, &cancel_clone);
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        cancel_flag,
        _thread: Some(thread),
    }
}

fn run_scan(
    root_path: PathBuf,
    progress_tx: &crossbeam_channel::Sender<ScanProgress>,
    cancel_flag: &AtomicBool,
) {
    let start = Instant::now();

    let mut entries: Vec<FileEntry> = Vec::new();
    let mut files_found: u64 = 0;
    let mut dirs_found: u64 = 0;
    let mut total_size: u64 = 0;
    let mut error_count: u64 = 0;
    let mut seen: u64 = 0;

    let walker = jwalk::WalkDir::new(&root_path)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    for entry_result in walker {
        seen += 1;
        if seen.is_multiple_of(UPDATE_EVERY) && cancel_flag.load(Ordering::Relaxed) {
            let _ = progress_tx.send(ScanProgress::Cancelled);
            return;
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                error_count += 1;
                let err_path = err
                    .path()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let _ = progress_tx.send(ScanProgress::Error {
                    path: err_path,
                    message: format!("{err}"),
                });
                continue;
            }
        };

        let path = entry.path();

        // Skip the root itself; the listing holds its contents.
        if path == root_path {
            continue;
        }

        // Stat outside any lock — this is the expensive syscall.
        let meta = match std::fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(err) => {
                error_count += 1;
                let _ = progress_tx.send(ScanProgress::Error {
                    path: path.to_string_lossy().into_owned(),
                    message: format!("{err}"),
                });
                continue;
            }
        };

        let file_entry = FileEntry::from_metadata(path, &meta);
        if file_entry.is_dir {
            dirs_found += 1;
        } else {
            files_found += 1;
            total_size += file_entry.size;
        }
        entries.push(file_entry);

        if seen.is_multiple_of(UPDATE_EVERY) {
            let _ = progress_tx.send(ScanProgress::Update {
                files_found,
                dirs_found,
                total_size,
                current_path: entries
                    .last()
                    .map(|e| e.path.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            });
        }
    }

    let duration = start.elapsed();
    debug!(
        "Scan complete: {} files, {} dirs, {} errors in {:?}",
        files_found, dirs_found, error_count, duration
    );

    let listing = FolderListing {
        root: root_path,
        entries,
        total_size,
    };
    let _ = progress_tx.send(ScanProgress::Complete {
        listing,
        duration,
        error_count,
    });
}
