/// Top action bar — the five operation buttons, export, settings, and branding.
use crate::state::{AppState, OpKind};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title — uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("🗂 SnapSort")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        let has_folder = state.folder.is_some();
        let can_operate = has_folder && !state.is_busy();

        // The five operation buttons. Sort Files, Find Duplicates and
        // Analyse launch workers directly; Set Rules and Bulk Rename go
        // through their dialogs first.
        let sort_btn = ui.add_enabled(
            can_operate,
            egui::Button::new("📁 Sort Files").min_size(egui::vec2(90.0, 28.0)),
        );
        if sort_btn
            .on_hover_text("Move files into category subfolders by extension")
            .clicked()
        {
            state.start_operation(OpKind::Organize);
        }

        if ui
            .add_enabled(!state.is_busy(), egui::Button::new("📝 Set Rules"))
            .on_hover_text("Edit which extensions belong to which category")
            .clicked()
        {
            state.show_rules_dialog = true;
        }

        if ui
            .add_enabled(can_operate, egui::Button::new("🔍 Find Duplicates"))
            .on_hover_text("Group files with byte-identical content")
            .clicked()
        {
            state.start_operation(OpKind::Duplicates);
        }

        if ui
            .add_enabled(can_operate, egui::Button::new("✏ Bulk Rename"))
            .on_hover_text("Rename every file to a numbered template")
            .clicked()
        {
            state.refresh_rename_preview();
            state.show_rename_dialog = true;
        }

        if ui
            .add_enabled(can_operate, egui::Button::new("📊 Analyse"))
            .on_hover_text("Summary, histograms, and per-file hashes")
            .clicked()
        {
            state.start_operation(OpKind::Analyse);
        }

        ui.separator();

        // Stop button (only while something is running).
        let stop_btn = ui.add_enabled(state.is_busy(), egui::Button::new("⏹ Stop"));
        if stop_btn.clicked() {
            state.cancel_current();
        }

        // Export button (only when a report is available).
        let can_export = state.duplicates.is_some() || state.analysis.is_some();
        if ui
            .add_enabled(can_export, egui::Button::new("📤 Export"))
            .on_hover_text(if can_export {
                "Write the duplicate or analysis report to CSV/JSON"
            } else {
                "Run Find Duplicates or Analyse first to enable export"
            })
            .clicked()
        {
            state.show_export_dialog = true;
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // About button.
            if ui.button("ℹ").on_hover_text("About SnapSort").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.settings.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.settings.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.settings.dark_mode = !state.settings.dark_mode;
            }

            // Settings dialog.
            if ui
                .button("⚙")
                .on_hover_text("Theme and sort order")
                .clicked()
            {
                state.show_settings_dialog = true;
            }

            ui.separator();

            // Refresh the listing — disabled while anything runs so the
            // listing is never replaced mid-operation.
            if ui
                .add_enabled(can_operate, egui::Button::new("🔄"))
                .on_hover_text("Re-scan the selected folder")
                .clicked()
            {
                state.start_scan();
            }
        });
    });
}
