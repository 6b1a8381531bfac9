/// Modal dialogs — rules editor, settings, rename preview, and export.

pub mod export_dialog;
pub mod rename_dialog;
pub mod rules_dialog;
pub mod settings_dialog;
