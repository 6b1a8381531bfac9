//! Error types for `snapsort-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action. Per-file failures
/// inside a bulk operation are *not* errors at this level — they are
/// collected into the operation's report so one unreadable file never
/// aborts a whole folder.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A file name or rename template is invalid (empty, contains path
    /// separators, `.` or `..`).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// The user cancelled a running operation.
    #[error("operation cancelled")]
    Cancelled,

    /// Writing a CSV/JSON report failed.
    #[error("export failed: {0}")]
    Export(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `snapsort-core`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Map a `read_dir`-style failure on `path` to the most specific variant.
pub(crate) fn io_error_for(path: &std::path::Path, e: std::io::Error) -> CoreError {
    match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
        _ => CoreError::Io(e),
    }
}
