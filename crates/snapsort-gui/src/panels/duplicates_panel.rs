/// Duplicates panel — groups of byte-identical files.
///
/// Shows the reclaimable-space headline, then one collapsible section per
/// group with the shared size, a hash prefix, and every member path. No
/// destructive action is offered; the report is informational.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use snapsort_core::model::size::{format_count, format_size};

/// How many hex characters of the digest to show in group headers.
const HASH_PREFIX_LEN: usize = 12;

/// Draw the duplicates panel.
pub fn duplicates_panel(ui: &mut Ui, state: &AppState) {
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_accent = ui.visuals().hyperlink_color;
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    let Some(ref report) = state.duplicates else {
        ui.centered_and_justified(|ui| {
            let hint = if state.phase == AppPhase::Working {
                "Hashing files..."
            } else {
                "No duplicate scan yet. Click Find Duplicates."
            };
            ui.label(egui::RichText::new(hint).color(color_weak));
        });
        return;
    };

    if report.groups.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "No duplicates — all {} files have distinct content.",
                    format_count(report.files_scanned)
                ))
                .color(color_weak),
            );
        });
        return;
    }

    // Headline.
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "{} duplicate groups ({} files)",
                report.groups.len(),
                format_count(report.duplicate_file_count() as u64)
            ))
            .size(14.0)
            .strong()
            .color(color_normal),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("{} reclaimable", format_size(report.wasted_bytes)))
                .size(14.0)
                .color(color_warning),
        );
    });
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, group) in report.groups.iter().enumerate() {
                let header = format!(
                    "{} × {}  ·  {}…",
                    group.files.len(),
                    format_size(group.size),
                    &group.hash[..HASH_PREFIX_LEN.min(group.hash.len())]
                );
                egui::CollapsingHeader::new(
                    egui::RichText::new(header).size(13.0).color(color_accent),
                )
                .id_salt(("dup_group", i))
                .default_open(i < 5)
                .show(ui, |ui| {
                    for path in &group.files {
                        ui.label(
                            egui::RichText::new(path.to_string_lossy())
                                .size(12.0)
                                .monospace()
                                .color(color_normal),
                        );
                    }
                });
            }

            if !report.errors.is_empty() {
                ui.add_space(8.0);
                egui::CollapsingHeader::new(
                    egui::RichText::new(format!("{} files skipped", report.errors.len()))
                        .size(12.0)
                        .color(color_warning),
                )
                .show(ui, |ui| {
                    for (path, message) in &report.errors {
                        ui.label(
                            egui::RichText::new(format!("{}: {}", path.display(), message))
                                .size(11.0)
                                .color(color_weak),
                        );
                    }
                });
            }
        });
}
