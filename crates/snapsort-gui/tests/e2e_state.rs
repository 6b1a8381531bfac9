/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These tests exercise the real business-logic paths of `AppState` without
/// spinning up an egui window, keeping them fast and deterministic.
///
/// **Scope:** All user-visible state transitions are covered:
///   - Folder selection and the scan lifecycle (start, completion, refresh)
///   - Each background operation (sort, duplicates, rename, analyse)
///   - Rename preview and report export
///   - Action-log and recent-folder bounds
///
/// The real scanner and workers are used so no mocking is needed.
use snapsort_core::export::ExportFormat;
use snapsort_core::organize::{DuplicateGroup, DuplicateReport};
use snapsort_gui::state::{ActiveView, AppPhase, AppState, ExportSource, OpKind, SortKey};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, bytes: &[u8]) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(bytes).unwrap();
}

/// Build a folder with one file per category plus an unmatched one.
fn make_sortable_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("photo.jpg"), &[0u8; 100]);
    write_bytes(&tmp.path().join("report.pdf"), &[1u8; 200]);
    write_bytes(&tmp.path().join("weird.xyz"), &[2u8; 50]);
    tmp
}

/// Pump `process_messages()` until every worker is done or the deadline
/// expires. Covers chained work (an operation whose completion re-scans).
fn pump_until_idle(state: &mut AppState) {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while state.is_busy() {
        assert!(
            std::time::Instant::now() < deadline,
            "worker did not complete within 30 seconds"
        );
        state.process_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
    // Drain any trailing messages delivered after the handle was dropped.
    state.process_messages();
}

// ── Construction & defaults ───────────────────────────────────────────────────

/// A freshly created `AppState` must start idle with nothing selected.
#[test]
fn new_state_is_idle() {
    let state = AppState::new();
    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.folder.is_none());
    assert!(state.listing.is_none());
    assert!(!state.is_busy());
}

/// Dark mode and name-ascending sort are the session defaults.
#[test]
fn default_settings() {
    let state = AppState::new();
    assert!(state.settings.dark_mode, "dark mode must be the default");
    assert_eq!(state.settings.sort_key, SortKey::Name);
    assert!(state.settings.sort_ascending);
}

// ── Folder selection & scan lifecycle ─────────────────────────────────────────

/// `set_folder` kicks off a scan and records the folder as recent.
#[test]
fn set_folder_starts_scan() {
    let tmp = make_sortable_tree();
    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());

    assert_eq!(state.phase, AppPhase::Working);
    assert!(state.is_busy());
    assert_eq!(state.recent_folders.first(), Some(&tmp.path().to_path_buf()));

    pump_until_idle(&mut state);
    assert_eq!(state.phase, AppPhase::Results);
    let listing = state.listing.as_ref().expect("listing after scan");
    assert_eq!(listing.file_count(), 3);
}

/// Selecting a new folder discards results computed for the previous one.
#[test]
fn set_folder_clears_stale_reports() {
    let tmp1 = make_sortable_tree();
    let tmp2 = make_sortable_tree();
    let mut state = AppState::new();

    state.set_folder(tmp1.path().to_path_buf());
    pump_until_idle(&mut state);
    state.start_operation(OpKind::Analyse);
    pump_until_idle(&mut state);
    assert!(state.analysis.is_some());

    state.set_folder(tmp2.path().to_path_buf());
    assert!(state.analysis.is_none(), "stale analysis must be dropped");
    assert!(state.duplicates.is_none());
    assert_eq!(state.view, ActiveView::Files);
    pump_until_idle(&mut state);
}

/// Re-selecting an already-recent folder moves it to the front, no duplicate.
#[test]
fn recent_folders_dedupe_and_cap() {
    let keep = TempDir::new().unwrap();
    let mut state = AppState::new();

    let mut tmps = Vec::new();
    for _ in 0..10 {
        let tmp = TempDir::new().unwrap();
        state.set_folder(tmp.path().to_path_buf());
        pump_until_idle(&mut state);
        tmps.push(tmp);
    }
    state.set_folder(keep.path().to_path_buf());
    pump_until_idle(&mut state);
    state.set_folder(keep.path().to_path_buf());
    pump_until_idle(&mut state);

    assert!(state.recent_folders.len() <= 8, "recents are capped");
    assert_eq!(state.recent_folders[0], keep.path().to_path_buf());
    let dupes = state
        .recent_folders
        .iter()
        .filter(|p| p.as_path() == keep.path())
        .count();
    assert_eq!(dupes, 1, "re-selecting must not duplicate the entry");
}

/// Starting an operation with no folder selected is a no-op.
#[test]
fn operation_without_folder_is_ignored() {
    let mut state = AppState::new();
    state.start_operation(OpKind::Analyse);
    assert!(!state.is_busy());
    assert_eq!(state.phase, AppPhase::Idle);
}

/// A second operation is rejected while the first one runs.
#[test]
fn operations_do_not_overlap() {
    let tmp = make_sortable_tree();
    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());
    pump_until_idle(&mut state);

    state.start_operation(OpKind::Analyse);
    let log_len = state.action_log.len();
    state.start_operation(OpKind::Duplicates);
    assert_eq!(
        state.action_log.len(),
        log_len,
        "second start must be ignored while busy"
    );
    pump_until_idle(&mut state);
    assert!(state.analysis.is_some());
    assert!(state.duplicates.is_none());
}

// ── Sort Files ────────────────────────────────────────────────────────────────

/// Sorting moves matching files into category subfolders and leaves the
/// unmatched one in place, then refreshes the listing.
#[test]
fn organize_moves_matching_files() {
    let tmp = make_sortable_tree();
    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());
    pump_until_idle(&mut state);

    state.start_operation(OpKind::Organize);
    pump_until_idle(&mut state);

    let report = state.last_organize.as_ref().expect("organize report");
    assert_eq!(report.moved.len(), 2);
    assert_eq!(report.unmatched, 1);
    assert!(report.errors.is_empty());

    assert!(tmp.path().join("Images").join("photo.jpg").is_file());
    assert!(tmp.path().join("Documents").join("report.pdf").is_file());
    assert!(tmp.path().join("weird.xyz").is_file(), "unmatched stays put");

    // Completion triggers a re-scan; the listing must reflect the move.
    let listing = state.listing.as_ref().expect("refreshed listing");
    assert!(listing
        .entries
        .iter()
        .any(|e| e.is_dir && e.name == "Images"));
}

/// Edited rules are honoured by the next sort.
#[test]
fn organize_uses_edited_rules() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("data.xyz"), b"x");
    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());
    pump_until_idle(&mut state);

    assert!(state.rules.add_extension("Documents", "xyz"));
    state.start_operation(OpKind::Organize);
    pump_until_idle(&mut state);

    assert!(tmp.path().join("Documents").join("data.xyz").is_file());
}

// ── Find Duplicates ───────────────────────────────────────────────────────────

/// Byte-identical files group together and the view switches to Duplicates.
#[test]
fn duplicates_groups_identical_content() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("one.bin"), b"same payload");
    write_bytes(&tmp.path().join("two.bin"), b"same payload");
    write_bytes(&tmp.path().join("other.bin"), b"different!!!");

    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());
    pump_until_idle(&mut state);

    state.start_operation(OpKind::Duplicates);
    pump_until_idle(&mut state);

    let report = state.duplicates.as_ref().expect("duplicate report");
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].files.len(), 2);
    assert_eq!(state.view, ActiveView::Duplicates);
}

/// All-distinct content yields an empty report, not an error.
#[test]
fn duplicates_all_distinct_is_empty() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.bin"), b"aaa");
    write_bytes(&tmp.path().join("b.bin"), b"bbbb");

    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());
    pump_until_idle(&mut state);

    state.start_operation(OpKind::Duplicates);
    pump_until_idle(&mut state);

    let report = state.duplicates.as_ref().expect("duplicate report");
    assert!(report.groups.is_empty());
    assert_eq!(report.wasted_bytes, 0);
}

// ── Bulk Rename ───────────────────────────────────────────────────────────────

/// The preview matches what the rename then actually does.
#[test]
fn rename_preview_then_rename() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("alpha.txt"), b"a");
    write_bytes(&tmp.path().join("beta.log"), b"b");

    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());
    pump_until_idle(&mut state);

    state.rename_stem = "tidy".to_string();
    state.refresh_rename_preview();
    assert_eq!(
        state.rename_preview,
        vec![
            ("alpha.txt".to_string(), "tidy_001.txt".to_string()),
            ("beta.log".to_string(), "tidy_002.log".to_string()),
        ]
    );

    state.start_operation(OpKind::Rename);
    pump_until_idle(&mut state);

    let report = state.last_rename.as_ref().expect("rename report");
    assert_eq!(report.renamed.len(), 2);
    assert!(tmp.path().join("tidy_001.txt").is_file());
    assert!(tmp.path().join("tidy_002.log").is_file());
    assert!(!tmp.path().join("alpha.txt").exists());
}

/// An unusable template stem clears the preview instead of erroring.
#[test]
fn rename_preview_rejects_bad_stem() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.txt"), b"a");

    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());
    pump_until_idle(&mut state);

    state.rename_stem = "a/b".to_string();
    state.refresh_rename_preview();
    assert!(state.rename_preview.is_empty());
}

// ── Analyse ───────────────────────────────────────────────────────────────────

/// Analysis fills the report and switches the view.
#[test]
fn analyse_builds_full_report() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.rs"), &[0u8; 10]);
    write_bytes(&tmp.path().join("b.rs"), &[1u8; 20]);
    let sub = tmp.path().join("nested");
    fs::create_dir_all(&sub).unwrap();
    write_bytes(&sub.join("c.png"), &[2u8; 500]);

    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());
    pump_until_idle(&mut state);

    state.start_operation(OpKind::Analyse);
    pump_until_idle(&mut state);

    let report = state.analysis.as_ref().expect("analysis report");
    assert_eq!(report.summary.file_count, 3, "analysis recurses");
    assert_eq!(report.summary.dir_count, 1);
    assert_eq!(report.summary.total_size, 530);
    assert_eq!(report.summary.unique_extensions, 2);
    assert_eq!(report.hashes.len(), 3);
    assert_eq!(state.view, ActiveView::Analysis);
}

// ── Export ────────────────────────────────────────────────────────────────────

fn canned_duplicates() -> DuplicateReport {
    DuplicateReport {
        groups: vec![DuplicateGroup {
            size: 12,
            hash: "feedface".to_string(),
            files: vec![PathBuf::from("/tmp/x.bin"), PathBuf::from("/tmp/y.bin")],
        }],
        files_scanned: 5,
        wasted_bytes: 12,
        errors: Vec::new(),
    }
}

/// Exporting the duplicate report writes a CSV file and logs the outcome.
#[test]
fn export_duplicates_csv() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("dupes.csv");

    let mut state = AppState::new();
    state.duplicates = Some(canned_duplicates());
    state.export_source = ExportSource::Duplicates;
    state.export_format = ExportFormat::Csv;
    state.export_path_input = out.to_string_lossy().into_owned();

    assert!(state.export_report());
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("group,hash,size_bytes,path"));
    assert!(content.contains("feedface"));
}

/// Export without a target path fails gracefully.
#[test]
fn export_requires_path() {
    let mut state = AppState::new();
    state.duplicates = Some(canned_duplicates());
    state.export_path_input = String::new();
    assert!(!state.export_report());
}

/// Export with no report available fails gracefully.
#[test]
fn export_requires_report() {
    let tmp = TempDir::new().unwrap();
    let mut state = AppState::new();
    state.export_source = ExportSource::Analysis;
    state.export_path_input = tmp.path().join("out.json").to_string_lossy().into_owned();
    assert!(!state.export_report());
}

// ── Listing order & log bounds ────────────────────────────────────────────────

/// Sorted entries group directories first and honour the sort settings.
#[test]
fn sorted_entries_follow_settings() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("big.bin"), &[0u8; 300]);
    write_bytes(&tmp.path().join("small.bin"), &[0u8; 10]);
    fs::create_dir_all(tmp.path().join("zdir")).unwrap();

    let mut state = AppState::new();
    state.set_folder(tmp.path().to_path_buf());
    pump_until_idle(&mut state);

    let names: Vec<String> = state
        .sorted_entries()
        .iter()
        .map(|e| e.name.to_string())
        .collect();
    assert_eq!(names, vec!["zdir", "big.bin", "small.bin"]);

    state.settings.sort_key = SortKey::Size;
    state.settings.sort_ascending = true;
    let names: Vec<String> = state
        .sorted_entries()
        .iter()
        .map(|e| e.name.to_string())
        .collect();
    assert_eq!(names, vec!["zdir", "small.bin", "big.bin"]);
}

/// The action log never grows past its cap.
#[test]
fn action_log_is_capped() {
    let mut state = AppState::new();
    for i in 0..250 {
        state.log(format!("entry {i}"));
    }
    assert_eq!(state.action_log.len(), 200);
    assert_eq!(state.action_log.back().unwrap().message, "entry 249");
    assert_eq!(state.action_log.front().unwrap().message, "entry 50");
}
