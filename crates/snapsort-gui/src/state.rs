/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Every
/// filesystem operation runs on its own named background thread and talks
/// back over a bounded channel; state updates happen in
/// [`AppState::process_messages`] which runs once per frame, so blocking
/// I/O never touches the render thread.
use crossbeam_channel::Receiver;
use snapsort_core::analysis::{analyse_folder, AnalysisReport};
use snapsort_core::export::{export_analysis, export_duplicates, ExportFormat};
use snapsort_core::model::{FileEntry, FolderListing};
use snapsort_core::organize::{
    bulk_rename, find_duplicates, organize_folder, rename_plan, DuplicateReport, OrganizeReport,
    RenameReport,
};
use snapsort_core::rules::CategoryRules;
use snapsort_core::scanner::progress::ScanProgress;
use snapsort_core::scanner::{scan_folder, ScanHandle};
use snapsort_core::{CoreError, CoreResult};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::info;

/// Maximum number of scan-progress messages drained from the channel per
/// frame. Prevents a backlog (e.g. after the window was hidden) from
/// blocking the render thread for a perceptible duration.
const MAX_MESSAGES_PER_FRAME: usize = 300;

/// Maximum entries kept in the action log.
const MAX_LOG_ENTRIES: usize = 200;

/// Maximum folders remembered in the recent-folders list.
const MAX_RECENT_FOLDERS: usize = 8;

/// Maximum per-entry scan errors retained for the error list.
const MAX_SCAN_ERRORS: usize = 1_000;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Idle — no folder selected yet, or nothing running.
    Idle,
    /// A scan or operation is running on a worker thread.
    Working,
    /// Results from the most recent operation are available.
    Results,
}

/// Which content view the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Files,
    Duplicates,
    Analysis,
}

/// Which tab of the analysis view is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisTab {
    Summary,
    FileTypes,
    SizeDistribution,
    Hashes,
}

impl AnalysisTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::FileTypes => "File Types",
            Self::SizeDistribution => "Size Distribution",
            Self::Hashes => "File Hashes",
        }
    }
}

/// Which report the export dialog writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSource {
    Duplicates,
    Analysis,
}

impl ExportSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Duplicates => "Duplicate report",
            Self::Analysis => "Analysis report",
        }
    }
}

/// The kind of background operation in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Organize,
    Duplicates,
    Rename,
    Analyse,
}

impl OpKind {
    /// Short label for the status bar and the action log.
    pub fn label(self) -> &'static str {
        match self {
            Self::Organize => "Sort Files",
            Self::Duplicates => "Find Duplicates",
            Self::Rename => "Bulk Rename",
            Self::Analyse => "Analyse",
        }
    }

    fn thread_name(self) -> &'static str {
        match self {
            Self::Organize => "snapsort-organize",
            Self::Duplicates => "snapsort-duplicates",
            Self::Rename => "snapsort-rename",
            Self::Analyse => "snapsort-analyse",
        }
    }
}

/// Result payload delivered by a worker thread.
#[derive(Debug)]
pub enum OpOutcome {
    Organized(OrganizeReport),
    Duplicates(DuplicateReport),
    Renamed(RenameReport),
    Analysed(AnalysisReport),
}

/// Handle to a running operation thread.
struct OpHandle {
    kind: OpKind,
    rx: Receiver<CoreResult<OpOutcome>>,
    cancel: Arc<AtomicBool>,
}

/// Sort key for the files panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Size,
    Modified,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::Modified => "Modified",
        }
    }
}

/// Session settings — held in memory only, reset on restart.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
    pub sort_key: SortKey,
    pub sort_ascending: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sort_key: SortKey::Name,
            sort_ascending: true,
        }
    }
}

/// One line in the action log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: chrono::DateTime<chrono::Local>,
    pub message: String,
}

/// All application state.
pub struct AppState {
    // ── Folder selection ───────────────────────────────
    pub folder: Option<PathBuf>,
    pub folder_input: String,
    pub recent_folders: Vec<PathBuf>,

    // ── Phase / view ───────────────────────────────────
    pub phase: AppPhase,
    pub view: ActiveView,
    pub analysis_tab: AnalysisTab,

    // ── Scan ───────────────────────────────────────────
    scan_handle: Option<ScanHandle>,
    pub listing: Option<FolderListing>,
    pub scan_files_found: u64,
    pub scan_dirs_found: u64,
    pub scan_total_size: u64,
    pub scan_current_path: String,
    pub scan_error_count: u64,
    pub scan_duration: Option<Duration>,
    pub scan_errors: Vec<(String, String)>,

    // ── Operations ─────────────────────────────────────
    op_handle: Option<OpHandle>,
    pub duplicates: Option<DuplicateReport>,
    pub analysis: Option<AnalysisReport>,
    pub last_organize: Option<OrganizeReport>,
    pub last_rename: Option<RenameReport>,

    // ── Rules & settings ───────────────────────────────
    pub rules: CategoryRules,
    pub settings: Settings,

    // ── Dialogs ────────────────────────────────────────
    pub show_rules_dialog: bool,
    pub show_settings_dialog: bool,
    pub show_rename_dialog: bool,
    pub show_export_dialog: bool,
    pub show_about: bool,
    pub rename_stem: String,
    pub rename_preview: Vec<(String, String)>,
    pub rules_new_extension: String,
    pub export_path_input: String,
    pub export_source: ExportSource,
    pub export_format: ExportFormat,

    // ── Action log ─────────────────────────────────────
    pub action_log: VecDeque<LogEntry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state.
    pub fn new() -> Self {
        Self {
            folder: None,
            folder_input: String::new(),
            recent_folders: Vec::new(),
            phase: AppPhase::Idle,
            view: ActiveView::Files,
            analysis_tab: AnalysisTab::Summary,
            scan_handle: None,
            listing: None,
            scan_files_found: 0,
            scan_dirs_found: 0,
            scan_total_size: 0,
            scan_current_path: String::new(),
            scan_error_count: 0,
            scan_duration: None,
            scan_errors: Vec::new(),
            op_handle: None,
            duplicates: None,
            analysis: None,
            last_organize: None,
            last_rename: None,
            rules: CategoryRules::builtin(),
            settings: Settings::default(),
            show_rules_dialog: false,
            show_settings_dialog: false,
            show_rename_dialog: false,
            show_export_dialog: false,
            show_about: false,
            rename_stem: "file".to_string(),
            rename_preview: Vec::new(),
            rules_new_extension: String::new(),
            export_path_input: String::new(),
            export_source: ExportSource::Duplicates,
            export_format: ExportFormat::Csv,
            action_log: VecDeque::new(),
        }
    }

    /// `true` while a scan or operation thread is running.
    pub fn is_busy(&self) -> bool {
        self.scan_handle.is_some() || self.op_handle.is_some()
    }

    /// Append a timestamped line to the action log.
    pub fn log(&mut self, message: impl Into<String>) {
        if self.action_log.len() >= MAX_LOG_ENTRIES {
            self.action_log.pop_front();
        }
        self.action_log.push_back(LogEntry {
            at: chrono::Local::now(),
            message: message.into(),
        });
    }

    /// Select `folder` as the working folder and kick off a scan.
    ///
    /// Stale results from the previous folder are discarded.
    pub fn set_folder(&mut self, folder: PathBuf) {
        self.folder_input = folder.to_string_lossy().into_owned();
        self.recent_folders.retain(|p| p != &folder);
        self.recent_folders.insert(0, folder.clone());
        self.recent_folders.truncate(MAX_RECENT_FOLDERS);

        self.folder = Some(folder.clone());
        self.duplicates = None;
        self.analysis = None;
        self.last_organize = None;
        self.last_rename = None;
        self.view = ActiveView::Files;
        self.log(format!("Selected folder {}", folder.display()));
        self.start_scan();
    }

    /// Re-scan the selected folder (refreshes the files panel).
    pub fn start_scan(&mut self) {
        let Some(folder) = self.folder.clone() else {
            return;
        };
        if self.is_busy() {
            return;
        }

        self.phase = AppPhase::Working;
        self.scan_files_found = 0;
        self.scan_dirs_found = 0;
        self.scan_total_size = 0;
        self.scan_current_path = folder.to_string_lossy().into_owned();
        self.scan_error_count = 0;
        self.scan_duration = None;
        self.scan_errors.clear();
        self.listing = None;

        self.scan_handle = Some(scan_folder(folder));
    }

    /// Cancel whatever is currently running.
    pub fn cancel_current(&mut self) {
        if let Some(ref handle) = self.scan_handle {
            handle.cancel();
        }
        if let Some(ref op) = self.op_handle {
            op.cancel.store(true, Ordering::Relaxed);
        }
    }

    /// Launch a background operation on the selected folder.
    ///
    /// Ignored while another scan or operation is running — the toolbar
    /// disables the buttons, this is the backstop.
    pub fn start_operation(&mut self, kind: OpKind) {
        let Some(folder) = self.folder.clone() else {
            return;
        };
        if self.is_busy() {
            return;
        }

        self.phase = AppPhase::Working;
        self.log(format!("{} started", kind.label()));

        let (tx, rx) = crossbeam_channel::bounded::<CoreResult<OpOutcome>>(1);
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_clone = cancel.clone();
        let rules = self.rules.clone();
        let stem = self.rename_stem.clone();

        thread::Builder::new()
            .name(kind.thread_name().into())
            .spawn(move || {
                info!("{} worker started for {}", kind.label(), folder.display());
                let outcome = match kind {
                    OpKind::Organize => {
                        organize_folder(&folder, &rules).map(OpOutcome::Organized)
                    }
                    OpKind::Duplicates => {
                        find_duplicates(&folder, &cancel_clone).map(OpOutcome::Duplicates)
                    }
                    OpKind::Rename => bulk_rename(&folder, &stem).map(OpOutcome::Renamed),
                    OpKind::Analyse => {
                        analyse_folder(&folder, &cancel_clone).map(OpOutcome::Analysed)
                    }
                };
                let _ = tx.send(outcome);
            })
            .expect("failed to spawn worker thread");

        self.op_handle = Some(OpHandle { kind, rx, cancel });
    }

    /// Process pending messages from worker threads. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_messages(&mut self) -> bool {
        let mut repaint = self.process_scan_messages();
        repaint |= self.process_op_messages();
        repaint
    }

    fn process_scan_messages(&mut self) -> bool {
        let handle = match &self.scan_handle {
            Some(h) => h,
            None => return false,
        };

        let mut repaint = false;
        let mut messages_this_frame = 0usize;
        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match handle.progress_rx.try_recv() {
                Ok(m) => m,
                Err(_) => break,
            };
            messages_this_frame += 1;
            repaint = true;
            match msg {
                ScanProgress::Update {
                    files_found,
                    dirs_found,
                    total_size,
                    current_path,
                } => {
                    self.scan_files_found = files_found;
                    self.scan_dirs_found = dirs_found;
                    self.scan_total_size = total_size;
                    self.scan_current_path = current_path;
                }
                ScanProgress::Error { path, message } => {
                    self.scan_error_count += 1;
                    if self.scan_errors.len() < MAX_SCAN_ERRORS {
                        self.scan_errors.push((path, message));
                    }
                }
                ScanProgress::Complete {
                    listing,
                    duration,
                    error_count,
                } => {
                    self.scan_files_found = listing.file_count();
                    self.scan_dirs_found = listing.dir_count();
                    self.scan_total_size = listing.total_size;
                    self.scan_error_count = error_count;
                    self.scan_duration = Some(duration);
                    self.listing = Some(listing);
                    self.scan_handle = None;
                    self.phase = AppPhase::Results;
                    return true;
                }
                ScanProgress::Cancelled => {
                    self.scan_handle = None;
                    self.phase = AppPhase::Results;
                    self.log("Scan cancelled");
                    return true;
                }
            }
        }

        repaint
    }

    fn process_op_messages(&mut self) -> bool {
        let Some(op) = &self.op_handle else {
            return false;
        };

        let result = match op.rx.try_recv() {
            Ok(r) => r,
            Err(crossbeam_channel::TryRecvError::Empty) => return false,
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                // Worker died without reporting; don't leave the UI stuck.
                let kind = op.kind;
                self.op_handle = None;
                self.phase = AppPhase::Results;
                self.log(format!("{} aborted unexpectedly", kind.label()));
                return true;
            }
        };
        let kind = op.kind;
        self.op_handle = None;
        self.phase = AppPhase::Results;

        match result {
            Ok(outcome) => self.install_outcome(outcome),
            Err(CoreError::Cancelled) => {
                self.log(format!("{} cancelled", kind.label()));
            }
            Err(e) => {
                self.log(format!("{} failed: {e}", kind.label()));
            }
        }
        true
    }

    /// Store a finished operation's report and echo it to the action log.
    fn install_outcome(&mut self, outcome: OpOutcome) {
        use snapsort_core::model::size::format_size;
        match outcome {
            OpOutcome::Organized(report) => {
                self.log(format!(
                    "Sort Files: {} moved, {} unmatched, {} errors",
                    report.moved.len(),
                    report.unmatched,
                    report.errors.len()
                ));
                self.last_organize = Some(report);
                // The folder contents changed; refresh the listing.
                self.start_scan();
            }
            OpOutcome::Duplicates(report) => {
                self.log(format!(
                    "Find Duplicates: {} groups, {} reclaimable",
                    report.groups.len(),
                    format_size(report.wasted_bytes)
                ));
                self.duplicates = Some(report);
                self.view = ActiveView::Duplicates;
            }
            OpOutcome::Renamed(report) => {
                self.log(format!(
                    "Bulk Rename: {} renamed, {} errors",
                    report.renamed.len(),
                    report.errors.len()
                ));
                self.last_rename = Some(report);
                self.start_scan();
            }
            OpOutcome::Analysed(report) => {
                self.log(format!(
                    "Analyse: {} files, {} extensions, {}",
                    report.summary.file_count,
                    report.summary.unique_extensions,
                    format_size(report.summary.total_size)
                ));
                self.analysis = Some(report);
                self.view = ActiveView::Analysis;
            }
        }
    }

    /// Immediate entries of the current listing, sorted per the session
    /// settings (directories always group first).
    pub fn sorted_entries(&self) -> Vec<FileEntry> {
        let Some(ref listing) = self.listing else {
            return Vec::new();
        };

        let mut entries: Vec<FileEntry> = listing.immediate().into_iter().cloned().collect();
        let key = self.settings.sort_key;
        entries.sort_by(|a, b| {
            let primary = b.is_dir.cmp(&a.is_dir);
            let secondary = match key {
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Size => a.size.cmp(&b.size).then(a.name.cmp(&b.name)),
                SortKey::Modified => a.modified.cmp(&b.modified).then(a.name.cmp(&b.name)),
            };
            primary.then(if self.settings.sort_ascending {
                secondary
            } else {
                secondary.reverse()
            })
        });
        entries
    }

    /// Recompute the rename dialog's old → new preview from the current
    /// folder and template stem.
    ///
    /// An unusable stem (or no folder) clears the preview, which the dialog
    /// shows as "no files to rename" and uses to disable the confirm button.
    pub fn refresh_rename_preview(&mut self) {
        let Some(ref folder) = self.folder else {
            self.rename_preview.clear();
            return;
        };
        match rename_plan(folder, self.rename_stem.trim()) {
            Ok(pairs) => self.rename_preview = pairs,
            Err(_) => self.rename_preview.clear(),
        }
    }

    /// Write the selected report to `export_path_input`.
    ///
    /// Returns `true` on success. The outcome lands in the action log either
    /// way, so the user sees what happened even after the dialog closes.
    pub fn export_report(&mut self) -> bool {
        let path = PathBuf::from(self.export_path_input.trim());
        if path.as_os_str().is_empty() {
            self.log("Export: no output path given");
            return false;
        }

        let result = match self.export_source {
            ExportSource::Duplicates => match &self.duplicates {
                Some(report) => export_duplicates(report, self.export_format, &path),
                None => {
                    self.log("Export: run Find Duplicates first");
                    return false;
                }
            },
            ExportSource::Analysis => match &self.analysis {
                Some(report) => export_analysis(report, self.export_format, &path),
                None => {
                    self.log("Export: run Analyse first");
                    return false;
                }
            },
        };

        match result {
            Ok(()) => {
                self.log(format!(
                    "Exported {} to {}",
                    self.export_source.label().to_lowercase(),
                    path.display()
                ));
                true
            }
            Err(e) => {
                self.log(format!("Export failed: {e}"));
                false
            }
        }
    }
}
