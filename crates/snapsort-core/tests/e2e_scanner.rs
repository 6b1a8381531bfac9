/// End-to-end scanner integration tests.
///
/// These tests exercise the real `scanner::scan_folder` code path against a
/// real temporary filesystem, verifying that the scanner enumerates files
/// and directories, accumulates sizes, and reports progress through the
/// channel.
use snapsort_core::model::FolderListing;
use snapsort_core::scanner::progress::ScanProgress;
use snapsort_core::scanner::{scan_folder, PROGRESS_CHANNEL_CAPACITY};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Create a reproducible directory tree for scanner tests:
///
/// ```text
/// root/
///   alpha/
///     a.txt   (100 bytes)
///     b.rs    (200 bytes)
///   beta/
///     c.png   (300 bytes)
///   d.zip     (400 bytes)
/// ```
///
/// Total file bytes: 1 000.
fn build_test_tree(root: &Path) {
    let alpha = root.join("alpha");
    let beta = root.join("beta");
    fs::create_dir_all(&alpha).unwrap();
    fs::create_dir_all(&beta).unwrap();

    write_bytes(&alpha.join("a.txt"), 100);
    write_bytes(&alpha.join("b.rs"), 200);
    write_bytes(&beta.join("c.png"), 300);
    write_bytes(&root.join("d.zip"), 400);
}

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// Drain progress messages until `Complete` arrives, returning the listing
/// (or panicking after a generous timeout).
fn drain_to_completion(handle: snapsort_core::scanner::ScanHandle) -> FolderListing {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    loop {
        assert!(
            std::time::Instant::now() < deadline,
            "scanner did not complete within 30 seconds"
        );
        match handle.progress_rx.try_recv() {
            Ok(ScanProgress::Complete { listing, .. }) => return listing,
            Ok(ScanProgress::Cancelled) => panic!("scan was unexpectedly cancelled"),
            Ok(_) => continue,
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(10));
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                panic!("scanner channel disconnected before Complete was sent");
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The scanner must visit all files and report the exact total size.
#[test]
fn scan_discovers_all_files() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let listing = drain_to_completion(scan_folder(tmp.path().to_path_buf()));

    assert_eq!(listing.file_count(), 4);
    assert_eq!(listing.dir_count(), 2);
    assert_eq!(listing.total_size, 1_000);
    assert_eq!(listing.root, tmp.path());
}

/// Immediate entries exclude files nested in subfolders.
#[test]
fn scan_listing_immediate_is_one_level() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let listing = drain_to_completion(scan_folder(tmp.path().to_path_buf()));

    let mut names: Vec<&str> = listing.immediate().iter().map(|e| e.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["alpha", "beta", "d.zip"]);
}

/// Scans of an empty directory must succeed with an empty listing.
#[test]
fn scan_empty_directory() {
    let tmp = TempDir::new().expect("failed to create temp dir");

    let listing = drain_to_completion(scan_folder(tmp.path().to_path_buf()));

    assert!(listing.entries.is_empty());
    assert_eq!(listing.total_size, 0);
}

/// Cancellation must stop the scan gracefully: the channel receives either
/// `Cancelled` or `Complete` (the scan may already be done when the flag is
/// read).
#[test]
fn scan_cancellation_sends_terminal_message() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let handle = scan_folder(tmp.path().to_path_buf());
    handle.cancel();
    assert!(handle.is_cancelled());

    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    let mut received_terminal = false;
    while std::time::Instant::now() < deadline {
        match handle.progress_rx.try_recv() {
            Ok(ScanProgress::Cancelled) | Ok(ScanProgress::Complete { .. }) => {
                received_terminal = true;
                break;
            }
            Ok(_) => continue,
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(5));
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => break,
        }
    }
    assert!(
        received_terminal,
        "scanner must send Cancelled or Complete within 30 s"
    );
}

/// A folder large enough to cross the update cadence must not deadlock and
/// must deliver every file in the final listing.
#[test]
fn scan_large_folder_delivers_full_listing() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    for i in 0..600 {
        write_bytes(&tmp.path().join(format!("file{i:03}.bin")), 10);
    }

    let listing = drain_to_completion(scan_folder(tmp.path().to_path_buf()));
    assert_eq!(listing.file_count(), 600);
    assert_eq!(listing.total_size, 6_000);
}

/// `PROGRESS_CHANNEL_CAPACITY` must be a positive constant so it is never
/// accidentally set to 0 (which would make every `send()` block immediately).
const _: () = assert!(
    PROGRESS_CHANNEL_CAPACITY > 0,
    "PROGRESS_CHANNEL_CAPACITY must be > 0"
);
