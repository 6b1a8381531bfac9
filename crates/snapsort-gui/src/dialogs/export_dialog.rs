/// Export dialog — write the duplicate or analysis report to CSV/JSON.
use crate::state::{AppState, ExportSource};
use egui::Context;
use snapsort_core::export::ExportFormat;

/// Show the export window when `state.show_export_dialog` is set.
pub fn export_dialog(ctx: &Context, state: &mut AppState) {
    if !state.show_export_dialog {
        return;
    }

    // Suggest a destination next to the selected folder the first time.
    if state.export_path_input.is_empty() {
        if let Some(ref folder) = state.folder {
            state.export_path_input = folder
                .join(format!(
                    "snapsort-report.{}",
                    state.export_format.extension()
                ))
                .to_string_lossy()
                .into_owned();
        }
    }

    let mut open = state.show_export_dialog;
    let mut write = false;

    egui::Window::new("Export Report")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([380.0, 0.0])
        .show(ctx, |ui| {
            let color_weak = ui.visuals().weak_text_color();

            ui.label(egui::RichText::new("Report").size(13.0).strong());
            ui.horizontal(|ui| {
                ui.add_enabled_ui(state.duplicates.is_some(), |ui| {
                    ui.selectable_value(
                        &mut state.export_source,
                        ExportSource::Duplicates,
                        "Duplicates",
                    );
                });
                ui.add_enabled_ui(state.analysis.is_some(), |ui| {
                    ui.selectable_value(
                        &mut state.export_source,
                        ExportSource::Analysis,
                        "Analysis",
                    );
                });
            });

            ui.add_space(6.0);
            ui.label(egui::RichText::new("Format").size(13.0).strong());
            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.export_format, ExportFormat::Csv, "CSV");
                ui.selectable_value(&mut state.export_format, ExportFormat::Json, "JSON");
            });
            if state.export_source == ExportSource::Analysis
                && state.export_format == ExportFormat::Csv
            {
                ui.label(
                    egui::RichText::new(
                        "CSV keeps one row per extension; choose JSON for the \
                         full report including hashes.",
                    )
                    .size(11.0)
                    .color(color_weak),
                );
            }

            ui.add_space(6.0);
            ui.label(egui::RichText::new("Write to").size(13.0).strong());
            ui.add(
                egui::TextEdit::singleline(&mut state.export_path_input)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);
            let available = match state.export_source {
                ExportSource::Duplicates => state.duplicates.is_some(),
                ExportSource::Analysis => state.analysis.is_some(),
            };
            if ui
                .add_enabled(available, egui::Button::new("Export"))
                .clicked()
            {
                write = true;
            }
        });

    if write && state.export_report() {
        open = false;
    }
    state.show_export_dialog = open;
}
