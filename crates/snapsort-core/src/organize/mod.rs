/// Organize operations — the actions behind the toolbar buttons.
///
/// - [`classify`] — Sort Files: move matching files into category subfolders.
/// - [`duplicates`] — Find Duplicates: group files by content hash.
/// - [`rename`] — Bulk Rename: sequential renaming with a fixed template.
pub mod classify;
pub mod duplicates;
pub mod rename;

pub use classify::{organize_folder, MovedFile, OrganizeReport};
pub use duplicates::{find_duplicates, DuplicateGroup, DuplicateReport};
pub use rename::{bulk_rename, rename_plan, RenameReport};
