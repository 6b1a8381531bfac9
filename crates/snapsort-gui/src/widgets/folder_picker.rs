/// Folder selection widget.
///
/// An editable path field plus quick-access cards for the user's well-known
/// folders and a session list of recently used ones. Selecting any of them
/// kicks off a scan via [`AppState::set_folder`].
use crate::state::AppState;
use egui::{Sense, Ui, Vec2};
use std::path::PathBuf;

/// A quick-access destination: label plus resolved path.
struct QuickFolder {
    label: &'static str,
    path: PathBuf,
}

/// Well-known user folders that exist on this machine.
fn quick_folders() -> Vec<QuickFolder> {
    let candidates = [
        ("🏠 Home", dirs::home_dir()),
        ("📄 Documents", dirs::document_dir()),
        ("📥 Downloads", dirs::download_dir()),
        ("🖥 Desktop", dirs::desktop_dir()),
        ("🖼 Pictures", dirs::picture_dir()),
    ];
    candidates
        .into_iter()
        .filter_map(|(label, path)| {
            let path = path?;
            path.is_dir().then_some(QuickFolder { label, path })
        })
        .collect()
}

/// Draw the folder picker panel.
pub fn folder_picker(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Folder");
    ui.add_space(4.0);

    // Editable path field with an Open button.
    let mut open_typed = false;
    ui.horizontal(|ui| {
        let edit = egui::TextEdit::singleline(&mut state.folder_input)
            .hint_text("Type or paste a folder path")
            .desired_width(ui.available_width() - 58.0);
        let response = ui.add(edit);
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            open_typed = true;
        }
        if ui
            .add_enabled(!state.is_busy(), egui::Button::new("Open"))
            .clicked()
        {
            open_typed = true;
        }
    });

    if open_typed && !state.is_busy() {
        let path = PathBuf::from(state.folder_input.trim());
        if path.is_dir() {
            state.set_folder(path);
        } else {
            state.log(format!("Not a folder: {}", state.folder_input.trim()));
        }
    }

    ui.add_space(8.0);

    // Quick-access cards.
    let mut clicked: Option<PathBuf> = None;
    for quick in quick_folders() {
        if folder_card(ui, quick.label, &quick.path, state.folder.as_deref()) {
            clicked = Some(quick.path);
        }
    }

    // Recently used folders (this session only).
    if !state.recent_folders.is_empty() {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Recent")
                .size(12.0)
                .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(2.0);

        let recents = state.recent_folders.clone();
        for path in recents {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            let label = format!("🕑 {}", name);
            if folder_card(ui, &label, &path, state.folder.as_deref()) {
                clicked = Some(path);
            }
        }
    }

    if let Some(path) = clicked {
        if !state.is_busy() {
            state.set_folder(path);
        }
    }
}

/// Paint one clickable folder card. Returns `true` when clicked.
fn folder_card(ui: &mut Ui, label: &str, path: &std::path::Path, selected: Option<&std::path::Path>) -> bool {
    let is_selected = selected == Some(path);

    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), 38.0), Sense::click());
    let painter = ui.painter_at(rect);

    // Background — deep navy card matching the accent blue hue.
    let card_bg = egui::Color32::from_rgb(0x28, 0x3a, 0x5c);
    let bg = if is_selected {
        egui::Color32::from_rgb(0x36, 0x50, 0x78)
    } else if response.hovered() {
        egui::Color32::from_rgb(0x32, 0x48, 0x6e)
    } else {
        card_bg
    };
    painter.rect_filled(rect, 4.0, bg);

    // Subtle border.
    let border_color = egui::Color32::from_rgb(0x3a, 0x50, 0x72);
    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(1.0, border_color),
        egui::StrokeKind::Outside,
    );

    // Label and path — white text on dark card.
    let card_text = egui::Color32::WHITE;
    painter.text(
        egui::pos2(rect.left() + 8.0, rect.top() + 11.0),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(13.0),
        card_text,
    );

    let shown = path.to_string_lossy();
    let shown = if shown.chars().count() > 38 {
        let tail: String = shown.chars().rev().take(35).collect::<Vec<_>>().into_iter().rev().collect();
        format!("...{tail}")
    } else {
        shown.into_owned()
    };
    painter.text(
        egui::pos2(rect.left() + 8.0, rect.bottom() - 10.0),
        egui::Align2::LEFT_CENTER,
        shown,
        egui::FontId::proportional(10.0),
        egui::Color32::from_rgb(0xb8, 0xc2, 0xd8),
    );

    ui.add_space(2.0);
    response.clicked()
}
