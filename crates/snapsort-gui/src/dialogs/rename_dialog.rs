/// Rename dialog — template stem entry with an old → new preview.
///
/// Bulk Rename discards original names irreversibly, so the dialog always
/// shows what will happen before the user confirms.
use crate::state::{AppState, OpKind};
use egui::Context;

/// How many old → new pairs the preview lists.
const PREVIEW_ROWS: usize = 8;

/// Show the rename window when `state.show_rename_dialog` is set.
pub fn rename_dialog(ctx: &Context, state: &mut AppState) {
    if !state.show_rename_dialog {
        return;
    }

    let mut open = state.show_rename_dialog;
    let mut confirm = false;

    egui::Window::new("Bulk Rename")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([360.0, 0.0])
        .show(ctx, |ui| {
            let color_weak = ui.visuals().weak_text_color();
            let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

            ui.horizontal(|ui| {
                ui.label("Template:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.rename_stem)
                        .hint_text("stem")
                        .desired_width(140.0),
                );
                if response.changed() {
                    state.refresh_rename_preview();
                }
                ui.label(
                    egui::RichText::new("→ stem_001.ext, stem_002.ext, …")
                        .size(12.0)
                        .color(color_weak),
                );
            });

            ui.add_space(6.0);

            if state.rename_preview.is_empty() {
                ui.label(
                    egui::RichText::new("Nothing to rename with this template.")
                        .size(12.0)
                        .color(color_weak),
                );
            } else {
                for (old, new) in state.rename_preview.iter().take(PREVIEW_ROWS) {
                    ui.label(
                        egui::RichText::new(format!("{old}  →  {new}"))
                            .size(12.0)
                            .monospace(),
                    );
                }
                if state.rename_preview.len() > PREVIEW_ROWS {
                    ui.label(
                        egui::RichText::new(format!(
                            "… and {} more files",
                            state.rename_preview.len() - PREVIEW_ROWS
                        ))
                        .size(11.0)
                        .color(color_weak),
                    );
                }
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("⚠ Original names cannot be restored.")
                    .size(12.0)
                    .color(color_warning),
            );
            ui.add_space(6.0);

            let can_confirm = !state.rename_preview.is_empty() && !state.is_busy();
            if ui
                .add_enabled(
                    can_confirm,
                    egui::Button::new(format!(
                        "Rename {} files",
                        state.rename_preview.len()
                    )),
                )
                .clicked()
            {
                confirm = true;
            }
        });

    if confirm {
        state.start_operation(OpKind::Rename);
        open = false;
    }
    state.show_rename_dialog = open;
}
