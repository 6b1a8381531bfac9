/// Files panel — the selected folder's immediate entries.
///
/// A virtualised flat list: only rows inside the viewport are rendered, so
/// even a folder with tens of thousands of entries stays at full frame rate.
/// Sort order comes from the session settings; directories always group
/// before files.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use snapsort_core::model::size::format_size;

/// Height of each row in pixels.
const ROW_HEIGHT: f32 = 24.0;

/// Draw the files panel.
pub fn files_panel(ui: &mut Ui, state: &AppState) {
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let folder_color = egui::Color32::from_rgb(0xf9, 0xe2, 0xaf);

    if state.listing.is_none() {
        ui.centered_and_justified(|ui| {
            let hint = if state.phase == AppPhase::Working {
                "Scanning... waiting for results"
            } else {
                "No folder scanned yet. Pick one on the left."
            };
            ui.label(egui::RichText::new(hint).color(color_weak));
        });
        return;
    }

    let entries = state.sorted_entries();
    if entries.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("This folder is empty.").color(color_weak));
        });
        return;
    }

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{} entries", entries.len()))
                .size(12.0)
                .color(color_weak),
        );
        ui.label(
            egui::RichText::new(format!(
                "sorted by {}{}",
                state.settings.sort_key.label().to_lowercase(),
                if state.settings.sort_ascending {
                    ""
                } else {
                    " (descending)"
                }
            ))
            .size(11.0)
            .color(color_weak),
        );
    });
    ui.add_space(2.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show_rows(ui, ROW_HEIGHT, entries.len(), |ui, range| {
            for i in range {
                let entry = &entries[i];
                ui.horizontal(|ui| {
                    ui.set_height(ROW_HEIGHT);

                    let (icon, icon_color) = if entry.is_dir {
                        ("📁", folder_color)
                    } else {
                        ("📄", color_weak)
                    };
                    ui.label(egui::RichText::new(icon).size(13.0).color(icon_color));

                    ui.label(
                        egui::RichText::new(entry.name.as_str())
                            .size(13.0)
                            .color(color_normal),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if !entry.is_dir {
                            ui.label(
                                egui::RichText::new(format_size(entry.size))
                                    .size(12.0)
                                    .color(color_weak),
                            );
                        }
                    });
                });
            }
        });
}
