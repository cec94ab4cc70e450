/*!
 * Folder and extension filtering rules
 *
 * Folder exclusion is a per-segment exact match on the file's relative
 * folder. Folder inclusion is a substring match over the whole relative
 * folder string — a deliberately looser rule carried over from the original
 * tool (see DESIGN.md); the two must not be unified.
 */

use std::collections::HashSet;
use std::path::{Component, Path};

/// Outcome of applying the filter rules to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// File passes every rule and should be dumped
    Include,
    /// A relative-folder segment matched an excluded folder name
    SkipByFolder,
    /// No inclusion substring matched the relative folder
    SkipByInclusion,
    /// The file's extension matched a skipped extension
    SkipByExtension,
}

/// Compiled filter sets, built once per run
#[derive(Debug, Clone)]
pub struct Filters {
    /// Excluded folder names, lowercased
    exclude_folders: HashSet<String>,
    /// Skipped extensions, lowercased and dot-prefixed
    skip_extensions: HashSet<String>,
    /// Inclusion substrings, lowercased (empty means include all)
    include_folders: Vec<String>,
}

impl Filters {
    /// Build filters from configured lists
    pub fn new(
        exclude_folders: &[String],
        skip_extensions: &[String],
        include_folders: &[String],
    ) -> Self {
        Self {
            exclude_folders: exclude_folders.iter().map(|f| f.to_lowercase()).collect(),
            skip_extensions: skip_extensions.iter().map(|e| e.to_lowercase()).collect(),
            include_folders: include_folders.iter().map(|i| i.to_lowercase()).collect(),
        }
    }

    /// Apply the rules, in order, to a path relative to the dump root
    pub fn check(&self, rel_path: &Path) -> FilterDecision {
        let folder = rel_path.parent().unwrap_or_else(|| Path::new(""));

        if self.matches_excluded_segment(folder) {
            return FilterDecision::SkipByFolder;
        }

        if !self.include_folders.is_empty() && !self.matches_included_substring(folder) {
            return FilterDecision::SkipByInclusion;
        }

        if self.skip_extensions.contains(&extension_of(rel_path)) {
            return FilterDecision::SkipByExtension;
        }

        FilterDecision::Include
    }

    /// True if any folder segment equals an excluded name (case-insensitive)
    fn matches_excluded_segment(&self, folder: &Path) -> bool {
        folder.components().any(|component| match component {
            Component::Normal(segment) => self
                .exclude_folders
                .contains(&segment.to_string_lossy().to_lowercase()),
            _ => false,
        })
    }

    /// True if the folder string contains any inclusion substring (case-insensitive)
    fn matches_included_substring(&self, folder: &Path) -> bool {
        let folder_str = folder.to_string_lossy().to_lowercase();
        self.include_folders
            .iter()
            .any(|inc| folder_str.contains(inc))
    }
}

/// A file's extension with its leading dot, lowercased
///
/// Empty string when the file has none. Follows the standard splitting rule:
/// "archive.tar.gz" has extension ".gz", ".gitignore" has no extension.
fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}
