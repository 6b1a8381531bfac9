/// Rules dialog — edit the category → extension mapping at runtime.
///
/// Each category lists its extensions as removable chips. New extensions are
/// typed into the field at the bottom and claimed by the chosen category;
/// claiming an extension releases it from any other category, so the sets
/// stay disjoint. Edits live for the session only.
use crate::state::AppState;
use egui::Context;

/// Show the rules editor window when `state.show_rules_dialog` is set.
pub fn rules_dialog(ctx: &Context, state: &mut AppState) {
    if !state.show_rules_dialog {
        return;
    }

    let mut open = state.show_rules_dialog;
    // (category, extension) pairs to remove, applied after the borrow ends.
    let mut remove: Option<(String, String)> = None;
    let mut add_to: Option<String> = None;
    let mut reset = false;

    egui::Window::new("Category Rules")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([420.0, 480.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let color_weak = ui.visuals().weak_text_color();

            ui.label(
                egui::RichText::new(
                    "Files are sorted into a subfolder named after the first \
                     category that claims their extension.",
                )
                .size(12.0)
                .color(color_weak),
            );
            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .max_height(320.0)
                .show(ui, |ui| {
                    for category in state.rules.categories() {
                        ui.label(
                            egui::RichText::new(&category.label)
                                .size(13.0)
                                .strong()
                                .color(ui.visuals().hyperlink_color),
                        );
                        ui.horizontal_wrapped(|ui| {
                            for ext in &category.extensions {
                                // A chip reads ".ext ✕"; clicking removes it.
                                if ui
                                    .small_button(format!(".{ext} ✕"))
                                    .on_hover_text("Remove this extension")
                                    .clicked()
                                {
                                    remove = Some((category.label.clone(), ext.clone()));
                                }
                            }
                        });
                        ui.add_space(6.0);
                    }
                });

            ui.separator();

            // Add-extension row: text field plus one button per category.
            ui.horizontal(|ui| {
                ui.label("Add extension:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.rules_new_extension)
                        .hint_text("e.g. avif")
                        .desired_width(80.0),
                );
            });
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("to").size(12.0).color(color_weak));
                for category in state.rules.categories() {
                    if ui.small_button(category.label.as_str()).clicked() {
                        add_to = Some(category.label.clone());
                    }
                }
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui
                    .button("Restore defaults")
                    .on_hover_text("Discard all edits")
                    .clicked()
                {
                    reset = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} extensions across {} categories",
                            state.rules.extension_count(),
                            state.rules.categories().len()
                        ))
                        .size(11.0)
                        .color(color_weak),
                    );
                });
            });
        });

    if let Some((label, ext)) = remove {
        state.rules.remove_extension(&label, &ext);
        state.log(format!("Rules: removed .{ext} from {label}"));
    }
    if let Some(label) = add_to {
        let ext = state.rules_new_extension.clone();
        if state.rules.add_extension(&label, &ext) {
            state.log(format!("Rules: added .{} to {label}", ext.trim().trim_start_matches('.').to_lowercase()));
            state.rules_new_extension.clear();
        } else {
            state.log(format!("Rules: \"{ext}\" is not a usable extension"));
        }
    }
    if reset {
        state.rules.reset();
        state.log("Rules: restored defaults");
    }
    state.show_rules_dialog = open;
}
