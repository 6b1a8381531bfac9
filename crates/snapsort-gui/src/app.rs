/// Main `eframe::App` implementation for SnapSort.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::dialogs;
use crate::panels;
use crate::state::{ActiveView, AppState};
use crate::theme::SnapSortTheme;
use crate::widgets;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that setup
/// completes before the OS window is created and the first rendered frame
/// arrives immediately, without the window sitting on a white background.
pub struct SnapSortState {
    pub(crate) inner: AppState,
}

impl SnapSortState {
    /// Build the initial state. Call this before `eframe::run_native`.
    ///
    /// SnapSort starts idle: no folder is touched until the user picks one.
    pub fn build() -> Self {
        Self {
            inner: AppState::new(),
        }
    }
}

/// The SnapSort application.
pub struct SnapSortApp {
    state: AppState,
}

impl SnapSortApp {
    /// Create a new application instance from pre-built state.
    ///
    /// The state should have been constructed by [`SnapSortState::build()`]
    /// *before* `eframe::run_native` is called.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: SnapSortState) -> Self {
        // ── Font: Segoe UI (Windows only) ─────────────────────────────────
        // Register the system UI font as the highest-priority proportional
        // font so every widget uses it. Elsewhere the egui defaults apply.
        #[cfg(windows)]
        {
            let system_root =
                std::env::var("SystemRoot").unwrap_or_else(|_| "C:\\Windows".to_string());
            let font_path = format!("{}\\Fonts\\segoeui.ttf", system_root);

            let mut fonts = egui::FontDefinitions::default();
            match std::fs::read(&font_path) {
                Ok(bytes) => {
                    fonts.font_data.insert(
                        "SegoeUI".to_owned(),
                        egui::FontData::from_owned(bytes).into(),
                    );
                    fonts
                        .families
                        .entry(egui::FontFamily::Proportional)
                        .or_default()
                        .insert(0, "SegoeUI".to_owned());
                    tracing::info!("Loaded Segoe UI from {}", font_path);
                }
                Err(e) => {
                    tracing::warn!(
                        "Could not load Segoe UI from {}: {} -- using default font",
                        font_path,
                        e
                    );
                }
            }
            cc.egui_ctx.set_fonts(fonts);
        }

        // Apply initial visuals so the very first frame matches the theme.
        SnapSortTheme::for_dark_mode(state.inner.settings.dark_mode).apply(&cc.egui_ctx);

        Self { state: state.inner }
    }
}

impl eframe::App for SnapSortApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so that toggling dark mode takes effect
        // immediately on the next rendered frame.
        SnapSortTheme::for_dark_mode(self.state.settings.dark_mode).apply(ctx);

        // ── Process background messages ───────────────────────────────────
        let _data_changed = self.state.process_messages();

        // Request continuous repaint while a worker is running.
        if self.state.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Dialogs ───────────────────────────────────────────────────────
        dialogs::rules_dialog::rules_dialog(ctx, &mut self.state);
        dialogs::settings_dialog::settings_dialog(ctx, &mut self.state);
        dialogs::rename_dialog::rename_dialog(ctx, &mut self.state);
        dialogs::export_dialog::export_dialog(ctx, &mut self.state);
        self.about_dialog(ctx);

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Left sidebar: folder picker + action log ──────────────────────
        egui::SidePanel::left("left_panel")
            .default_width(260.0)
            .min_width(200.0)
            .max_width(420.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    widgets::folder_picker::folder_picker(ui, &mut self.state);
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(4.0);
                    self.action_log(ui);
                });
            });

        // ── Central panel ─────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.state.view, ActiveView::Files, "Files");
                ui.selectable_value(&mut self.state.view, ActiveView::Duplicates, "Duplicates");
                ui.selectable_value(&mut self.state.view, ActiveView::Analysis, "Analysis");
            });
            ui.separator();

            match self.state.view {
                ActiveView::Files => panels::files_panel::files_panel(ui, &self.state),
                ActiveView::Duplicates => {
                    panels::duplicates_panel::duplicates_panel(ui, &self.state)
                }
                ActiveView::Analysis => {
                    panels::analysis_panel::analysis_panel(ui, &mut self.state)
                }
            }
        });
    }
}

impl SnapSortApp {
    /// Timestamped log of everything the app did this session.
    fn action_log(&self, ui: &mut egui::Ui) {
        let color_weak = ui.visuals().weak_text_color();

        ui.label(
            egui::RichText::new("Activity")
                .size(12.0)
                .color(color_weak),
        );
        ui.add_space(2.0);

        if self.state.action_log.is_empty() {
            ui.label(
                egui::RichText::new("Nothing yet.")
                    .size(11.0)
                    .color(color_weak),
            );
            return;
        }

        // Newest first.
        for entry in self.state.action_log.iter().rev() {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(entry.at.format("%H:%M:%S").to_string())
                        .size(10.0)
                        .monospace()
                        .color(color_weak),
                );
                ui.label(
                    egui::RichText::new(&entry.message)
                        .size(11.0)
                        .color(ui.visuals().text_color()),
                );
            });
        }
    }

    fn about_dialog(&mut self, ctx: &egui::Context) {
        let mut show_about = self.state.show_about;
        egui::Window::new("About SnapSort")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                // Use theme-aware colours so the dialog looks correct in both
                // dark and light mode.
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🗂 SnapSort")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "A desktop file organizer.\n\
                             Sort files into category folders, find duplicate\n\
                             content, bulk-rename, and analyse folder contents.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.hyperlink_to(
                        "github.com/snapsort/snapsort",
                        "https://github.com/snapsort/snapsort",
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("MIT License")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;
    }
}
