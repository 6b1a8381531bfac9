/// Category rules — the mapping that drives Sort Files.
///
/// Each category pairs a display label with a set of lowercase file
/// extensions. The built-in defaults cover the common desktop file types;
/// the rules dialog edits the mapping at runtime. Rules live in memory for
/// the session only.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single category: label plus the extensions it claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Display label, also used as the destination subfolder name.
    pub label: String,
    /// Lowercase extensions without the leading dot, kept sorted.
    pub extensions: BTreeSet<String>,
}

/// Ordered category → extension-set mapping.
///
/// Order matters for display and for lookup: the first category claiming an
/// extension wins, though [`add_extension`](Self::add_extension) keeps the
/// sets disjoint so ties cannot arise through the dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRules {
    categories: Vec<Category>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryRules {
    /// The built-in default mapping.
    pub fn builtin() -> Self {
        fn cat(label: &str, exts: &[&str]) -> Category {
            Category {
                label: label.to_string(),
                extensions: exts.iter().map(|e| e.to_string()).collect(),
            }
        }

        Self {
            categories: vec![
                cat(
                    "Images",
                    &[
                        "jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "ico", "tiff", "tif",
                        "heic", "raw",
                    ],
                ),
                cat(
                    "Documents",
                    &[
                        "pdf", "doc", "docx", "txt", "rtf", "odt", "xls", "xlsx", "ppt", "pptx",
                        "csv", "md", "epub",
                    ],
                ),
                cat(
                    "Videos",
                    &[
                        "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg",
                    ],
                ),
                cat(
                    "Music",
                    &["mp3", "wav", "flac", "aac", "ogg", "wma", "m4a", "opus"],
                ),
                cat(
                    "Archives",
                    &["zip", "rar", "7z", "tar", "gz", "bz2", "xz", "zst", "iso"],
                ),
                cat(
                    "Code",
                    &[
                        "rs", "py", "js", "ts", "c", "cpp", "h", "hpp", "cs", "java", "go", "rb",
                        "php", "html", "css", "json", "xml", "yaml", "yml", "toml", "sql", "sh",
                    ],
                ),
                cat(
                    "Executables",
                    &["exe", "msi", "dll", "so", "dylib", "app", "bat"],
                ),
            ],
        }
    }

    /// Restore the built-in defaults, discarding any edits.
    pub fn reset(&mut self) {
        *self = Self::builtin();
    }

    /// The categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find the category label claiming `ext` (matched case-insensitively).
    pub fn category_for(&self, ext: &str) -> Option<&str> {
        let ext = normalize_extension(ext)?;
        self.categories
            .iter()
            .find(|c| c.extensions.contains(&ext))
            .map(|c| c.label.as_str())
    }

    /// Add `ext` to the category named `label`.
    ///
    /// The extension is normalized (lowercased, leading dot stripped) and
    /// removed from every other category first, so no extension is ever
    /// claimed twice. Returns `false` when the extension is empty after
    /// normalization or the category does not exist.
    pub fn add_extension(&mut self, label: &str, ext: &str) -> bool {
        let Some(ext) = normalize_extension(ext) else {
            return false;
        };
        if !self.categories.iter().any(|c| c.label == label) {
            return false;
        }
        for cat in &mut self.categories {
            if cat.label == label {
                cat.extensions.insert(ext.clone());
            } else {
                cat.extensions.remove(&ext);
            }
        }
        true
    }

    /// Remove `ext` from the category named `label`.
    pub fn remove_extension(&mut self, label: &str, ext: &str) -> bool {
        let Some(ext) = normalize_extension(ext) else {
            return false;
        };
        self.categories
            .iter_mut()
            .find(|c| c.label == label)
            .map(|c| c.extensions.remove(&ext))
            .unwrap_or(false)
    }

    /// Total number of extensions across all categories.
    pub fn extension_count(&self) -> usize {
        self.categories.iter().map(|c| c.extensions.len()).sum()
    }
}

/// Lowercase and strip the leading dot; `None` when nothing remains.
fn normalize_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim().trim_start_matches('.').to_ascii_lowercase();
    if trimmed.is_empty() || trimmed.contains(['/', '\\', '.']) {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_common_extensions() {
        let rules = CategoryRules::builtin();
        assert_eq!(rules.category_for("jpg"), Some("Images"));
        assert_eq!(rules.category_for("pdf"), Some("Documents"));
        assert_eq!(rules.category_for("mp4"), Some("Videos"));
        assert_eq!(rules.category_for("flac"), Some("Music"));
        assert_eq!(rules.category_for("zip"), Some("Archives"));
        assert_eq!(rules.category_for("rs"), Some("Code"));
        assert_eq!(rules.category_for("exe"), Some("Executables"));
    }

    #[test]
    fn unknown_extension_has_no_category() {
        let rules = CategoryRules::builtin();
        assert_eq!(rules.category_for("xyz"), None);
        assert_eq!(rules.category_for(""), None);
    }

    /// Matching must be case-insensitive so "JPG" == "jpg".
    #[test]
    fn lookup_is_case_insensitive() {
        let rules = CategoryRules::builtin();
        assert_eq!(rules.category_for("JPG"), Some("Images"));
        assert_eq!(rules.category_for(".Pdf"), Some("Documents"));
    }

    #[test]
    fn add_extension_normalizes_and_claims() {
        let mut rules = CategoryRules::builtin();
        assert!(rules.add_extension("Images", ".AVIF"));
        assert_eq!(rules.category_for("avif"), Some("Images"));
    }

    /// Adding an extension to one category must release it from another,
    /// keeping the sets disjoint.
    #[test]
    fn add_extension_moves_between_categories() {
        let mut rules = CategoryRules::builtin();
        assert_eq!(rules.category_for("csv"), Some("Documents"));
        assert!(rules.add_extension("Code", "csv"));
        assert_eq!(rules.category_for("csv"), Some("Code"));
        let docs = rules
            .categories()
            .iter()
            .find(|c| c.label == "Documents")
            .unwrap();
        assert!(!docs.extensions.contains("csv"));
    }

    #[test]
    fn add_to_unknown_category_is_rejected() {
        let mut rules = CategoryRules::builtin();
        assert!(!rules.add_extension("Nonsense", "foo"));
    }

    #[test]
    fn add_empty_or_pathy_extension_is_rejected() {
        let mut rules = CategoryRules::builtin();
        assert!(!rules.add_extension("Images", ""));
        assert!(!rules.add_extension("Images", "   "));
        assert!(!rules.add_extension("Images", "a/b"));
        assert!(!rules.add_extension("Images", "tar.gz"));
    }

    #[test]
    fn remove_extension_releases_it() {
        let mut rules = CategoryRules::builtin();
        assert!(rules.remove_extension("Images", "jpg"));
        assert_eq!(rules.category_for("jpg"), None);
        assert!(!rules.remove_extension("Images", "jpg"), "already gone");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut rules = CategoryRules::builtin();
        rules.remove_extension("Images", "jpg");
        rules.add_extension("Code", "weird");
        rules.reset();
        assert_eq!(rules, CategoryRules::builtin());
    }
}
