/// Analysis panel — Summary, File Types, Size Distribution, and File Hashes.
///
/// Everything rendered here comes from a pre-computed [`AnalysisReport`];
/// the panel never touches the filesystem, so it stays cheap at 60 fps.
use crate::state::{AnalysisTab, AppPhase, AppState};
use crate::theme::chart_color;
use crate::widgets::charts;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use snapsort_core::analysis::AnalysisReport;
use snapsort_core::model::size::{format_count, format_size};

/// Most bars shown in the File Types tab; the tail folds into a count.
const MAX_TYPE_BARS: usize = 20;

/// Draw the analysis panel.
pub fn analysis_panel(ui: &mut Ui, state: &mut AppState) {
    let color_weak = ui.visuals().weak_text_color();

    let Some(ref report) = state.analysis else {
        ui.centered_and_justified(|ui| {
            let hint = if state.phase == AppPhase::Working {
                "Analysing... hashing files"
            } else {
                "No analysis yet. Click Analyse."
            };
            ui.label(egui::RichText::new(hint).color(color_weak));
        });
        return;
    };

    // Tab strip.
    ui.horizontal(|ui| {
        for tab in [
            AnalysisTab::Summary,
            AnalysisTab::FileTypes,
            AnalysisTab::SizeDistribution,
            AnalysisTab::Hashes,
        ] {
            ui.selectable_value(&mut state.analysis_tab, tab, tab.label());
        }
    });
    ui.separator();

    match state.analysis_tab {
        AnalysisTab::Summary => summary_tab(ui, report),
        AnalysisTab::FileTypes => file_types_tab(ui, report),
        AnalysisTab::SizeDistribution => size_distribution_tab(ui, report),
        AnalysisTab::Hashes => hashes_tab(ui, report),
    }
}

fn summary_tab(ui: &mut Ui, report: &AnalysisReport) {
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_accent = ui.visuals().hyperlink_color;
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(report.root.to_string_lossy())
            .size(12.0)
            .color(color_weak),
    );
    ui.add_space(8.0);

    let row = |ui: &mut Ui, label: &str, value: String, color: egui::Color32| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(label)
                    .size(13.0)
                    .color(color_weak),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(value).size(13.0).strong().color(color));
            });
        });
        ui.add_space(2.0);
    };

    row(
        ui,
        "Files",
        format_count(report.summary.file_count),
        color_normal,
    );
    row(
        ui,
        "Folders",
        format_count(report.summary.dir_count),
        color_normal,
    );
    row(
        ui,
        "Total size",
        format_size(report.summary.total_size),
        color_accent,
    );
    row(
        ui,
        "Unique extensions",
        format_count(report.summary.unique_extensions),
        color_normal,
    );
    if !report.errors.is_empty() {
        row(
            ui,
            "Unreadable entries",
            format_count(report.errors.len() as u64),
            color_warning,
        );
    }
}

fn file_types_tab(ui: &mut Ui, report: &AnalysisReport) {
    let color_weak = ui.visuals().weak_text_color();

    if report.extensions.is_empty() {
        ui.label(egui::RichText::new("No files found.").color(color_weak));
        return;
    }

    let peak = report.extensions[0].count.max(1);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(4.0);
            for (i, stat) in report.extensions.iter().take(MAX_TYPE_BARS).enumerate() {
                charts::labelled_bar(
                    ui,
                    &stat.extension,
                    &format!(
                        "{} files · {}",
                        format_count(stat.count),
                        format_size(stat.total_size)
                    ),
                    stat.count as f32 / peak as f32,
                    chart_color(i),
                );
            }
            if report.extensions.len() > MAX_TYPE_BARS {
                ui.label(
                    egui::RichText::new(format!(
                        "… and {} more extensions",
                        report.extensions.len() - MAX_TYPE_BARS
                    ))
                    .size(11.0)
                    .color(color_weak),
                );
            }
        });
}

fn size_distribution_tab(ui: &mut Ui, report: &AnalysisReport) {
    let color_accent = ui.visuals().hyperlink_color;

    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(format!(
            "Largest file: {}",
            format_size(report.size_histogram.max_size)
        ))
        .size(12.0)
        .color(ui.visuals().weak_text_color()),
    );
    ui.add_space(4.0);
    charts::size_histogram(ui, &report.size_histogram, color_accent);
}

fn hashes_tab(ui: &mut Ui, report: &AnalysisReport) {
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    if report.hashes.is_empty() {
        ui.label(egui::RichText::new("No files were hashed.").color(color_weak));
        return;
    }

    ui.add_space(4.0);
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            let head = |ui: &mut Ui, text: &str| {
                ui.label(egui::RichText::new(text).size(12.0).strong());
            };
            header.col(|ui| head(ui, "Name"));
            header.col(|ui| head(ui, "Size"));
            header.col(|ui| head(ui, "SHA-256"));
        })
        .body(|body| {
            body.rows(18.0, report.hashes.len(), |mut row| {
                let file = &report.hashes[row.index()];
                row.col(|ui| {
                    ui.label(
                        egui::RichText::new(&file.name)
                            .size(12.0)
                            .color(color_normal),
                    );
                });
                row.col(|ui| {
                    ui.label(
                        egui::RichText::new(format_size(file.size))
                            .size(12.0)
                            .color(color_weak),
                    );
                });
                row.col(|ui| {
                    ui.label(
                        egui::RichText::new(&file.digest)
                            .size(11.0)
                            .monospace()
                            .color(color_weak),
                    );
                });
            });
        });
}
