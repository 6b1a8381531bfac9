/// Bottom status bar — phase indicator, counts, and totals.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use snapsort_core::model::size::{format_count, format_size};

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let color_success = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);

    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                let hint = if state.folder.is_none() {
                    "Select a folder to begin"
                } else {
                    "Ready"
                };
                ui.label(egui::RichText::new(hint).size(12.0).color(color_weak));
            }
            AppPhase::Working => {
                // Animated spinner.
                ui.spinner();

                let display_path = truncate_path(&state.scan_current_path, 60);
                ui.label(
                    egui::RichText::new(format!("Working on {}...", display_path))
                        .size(12.0)
                        .color(color_normal),
                );

                ui.separator();

                ui.label(
                    egui::RichText::new(format!("{} files", format_count(state.scan_files_found)))
                        .size(12.0)
                        .color(color_normal),
                );

                ui.separator();

                ui.label(
                    egui::RichText::new(format_size(state.scan_total_size))
                        .size(12.0)
                        .color(color_accent),
                );

                if state.scan_error_count > 0 {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} errors",
                            format_count(state.scan_error_count)
                        ))
                        .size(12.0)
                        .color(color_warning),
                    );
                }
            }
            AppPhase::Results => {
                if let Some(ref listing) = state.listing {
                    ui.label(
                        egui::RichText::new("\u{2713} Ready")
                            .size(12.0)
                            .color(color_success),
                    );

                    ui.separator();

                    ui.label(
                        egui::RichText::new(format!(
                            "{} files, {} folders",
                            format_count(listing.file_count()),
                            format_count(listing.dir_count())
                        ))
                        .size(12.0)
                        .color(color_normal),
                    );

                    ui.separator();

                    ui.label(
                        egui::RichText::new(format_size(listing.total_size))
                            .size(12.0)
                            .color(color_accent),
                    );

                    if let Some(duration) = state.scan_duration {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!("{:.1}s", duration.as_secs_f64()))
                                .size(12.0)
                                .color(color_weak),
                        );
                    }

                    if state.scan_error_count > 0 {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!(
                                "{} skipped",
                                format_count(state.scan_error_count)
                            ))
                            .size(12.0)
                            .color(color_warning),
                        );
                    }
                }
            }
        }

        // Most recent action-log line, right-aligned.
        if let Some(entry) = state.action_log.back() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(truncate_path(&entry.message, 70))
                        .size(11.0)
                        .color(color_weak),
                );
            });
        }
    });
}

/// Truncate a string to fit within `max_len` characters,
/// replacing the middle with "..." if needed.
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.chars().count() <= max_len {
        return path.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = path.chars().take(half).collect();
    let tail: String = path
        .chars()
        .rev()
        .take(half)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{}...{}", head, tail)
}
