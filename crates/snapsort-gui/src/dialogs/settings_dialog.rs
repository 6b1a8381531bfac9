/// Settings dialog — theme and file-list sort order.
///
/// Settings are session-only; closing the app discards them.
use crate::state::{AppState, SortKey};
use egui::Context;

/// Show the settings window when `state.show_settings_dialog` is set.
pub fn settings_dialog(ctx: &Context, state: &mut AppState) {
    if !state.show_settings_dialog {
        return;
    }

    let mut open = state.show_settings_dialog;
    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([280.0, 0.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("Theme").size(13.0).strong());
            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.settings.dark_mode, true, "🌙 Dark");
                ui.selectable_value(&mut state.settings.dark_mode, false, "☀ Light");
            });

            ui.add_space(8.0);
            ui.label(egui::RichText::new("Sort files by").size(13.0).strong());
            ui.horizontal(|ui| {
                for key in [SortKey::Name, SortKey::Size, SortKey::Modified] {
                    ui.selectable_value(&mut state.settings.sort_key, key, key.label());
                }
            });
            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.settings.sort_ascending, true, "Ascending");
                ui.selectable_value(&mut state.settings.sort_ascending, false, "Descending");
            });

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Settings apply for this session only.")
                    .size(11.0)
                    .color(ui.visuals().weak_text_color()),
            );
        });
    state.show_settings_dialog = open;
}
