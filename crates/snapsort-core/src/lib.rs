/// SnapSort Core — folder scanning, organizing, and analysis.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI).
///
/// # Modules
///
/// - [`model`] — Folder listing entries and size formatting.
/// - [`scanner`] — Background folder scanning with progress reporting.
/// - [`rules`] — Category → extension-set mapping used by the classifier.
/// - [`organize`] — Classify-into-subfolders, duplicate detection, bulk rename.
/// - [`analysis`] — Folder summary, histograms, and per-file hashes.
/// - [`export`] — CSV/JSON report export.
pub mod analysis;
pub mod error;
pub mod export;
pub mod model;
pub mod organize;
pub mod rules;
pub mod scanner;
pub mod walk;

pub use error::{CoreError, CoreResult};
