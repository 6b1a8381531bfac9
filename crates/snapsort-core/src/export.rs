/// Report export — duplicate and analysis results as CSV or JSON.
///
/// JSON exports serialize the full report wrapped with a timestamp;
/// CSV exports flatten to one record per file (duplicates) or per
/// extension (analysis).
use crate::analysis::AnalysisReport;
use crate::error::{CoreError, CoreResult};
use crate::organize::DuplicateReport;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

fn csv_err(e: csv::Error) -> CoreError {
    CoreError::Export(e.to_string())
}

#[derive(Serialize)]
struct JsonEnvelope<'a, T: Serialize> {
    generated_at: String,
    #[serde(flatten)]
    report: &'a T,
}

fn write_json<T: Serialize>(report: &T, path: &Path) -> CoreResult<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(
        file,
        &JsonEnvelope {
            generated_at: chrono::Local::now().to_rfc3339(),
            report,
        },
    )
    .map_err(|e| CoreError::Export(e.to_string()))?;
    Ok(())
}

/// Write a duplicate report to `path` in the given format.
pub fn export_duplicates(
    report: &DuplicateReport,
    format: ExportFormat,
    path: &Path,
) -> CoreResult<()> {
    match format {
        ExportFormat::Json => write_json(report, path)?,
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
            writer
                .write_record(["group", "hash", "size_bytes", "path"])
                .map_err(csv_err)?;
            for (i, group) in report.groups.iter().enumerate() {
                for file in &group.files {
                    writer
                        .write_record([
                            (i + 1).to_string(),
                            group.hash.clone(),
                            group.size.to_string(),
                            file.to_string_lossy().into_owned(),
                        ])
                        .map_err(csv_err)?;
                }
            }
            writer.flush()?;
        }
    }
    info!("exported duplicate report to {}", path.display());
    Ok(())
}

/// Write an analysis report to `path` in the given format.
///
/// The CSV flattening keeps one record per extension; the full report
/// (including hashes) only fits the JSON form.
pub fn export_analysis(
    report: &AnalysisReport,
    format: ExportFormat,
    path: &Path,
) -> CoreResult<()> {
    match format {
        ExportFormat::Json => write_json(report, path)?,
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
            writer
                .write_record(["extension", "count", "total_size_bytes"])
                .map_err(csv_err)?;
            for stat in &report.extensions {
                writer
                    .write_record([
                        stat.extension.clone(),
                        stat.count.to_string(),
                        stat.total_size.to_string(),
                    ])
                    .map_err(csv_err)?;
            }
            writer.flush()?;
        }
    }
    info!("exported analysis report to {}", path.display());
    Ok(())
}
