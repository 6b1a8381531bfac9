//! SnapSort — desktop file organizer.
//!
//! Thin binary entry point. All logic lives in the `snapsort-core`
//! and `snapsort-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("SnapSort starting");

    let icon = snapsort_gui::icon::generate_icon(64);

    // Build application state *before* opening the window so the first
    // rendered frame arrives immediately and the OS never fills the window
    // with its default white background.
    let state = snapsort_gui::SnapSortState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("SnapSort -- File Organizer")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([760.0, 480.0])
            .with_icon(icon)
            // Prevents Windows from filling the window with white before the
            // first OpenGL frame is rendered. DWM compositing is used instead,
            // which starts transparent/black rather than white.
            .with_transparent(true),
        ..Default::default()
    };

    eframe::run_native(
        "SnapSort",
        options,
        Box::new(|cc| Ok(Box::new(snapsort_gui::SnapSortApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
