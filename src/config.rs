/*!
 * Configuration handling for ProjDump
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::utils::{DEFAULT_EXCLUDE_FOLDERS, DEFAULT_SKIP_EXTENSIONS};

/// Command-line arguments for ProjDump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate a project's text files into one annotated snapshot file",
    long_about = "Walks a project directory and appends every surviving file's content to a \
single text file, each block prefixed with the file's path relative to the project root. \
Folders and extensions can be excluded; a leading '+' on either list merges it with the defaults."
)]
pub struct Args {
    /// Project directory to dump
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output file name (default: project directory base name + ".txt")
    pub output_file: Option<String>,

    /// Comma-separated folder names to exclude (prefix with '+' to add to defaults)
    #[clap(long, value_delimiter = ',')]
    pub exclude_folders: Vec<String>,

    /// Comma-separated extensions to skip, '.' optional (prefix with '+' to add to defaults)
    #[clap(long, value_delimiter = ',')]
    pub skip_extensions: Vec<String>,

    /// Comma-separated substrings; if given, only folders containing one are dumped
    #[clap(long, value_delimiter = ',')]
    pub include_folders: Vec<String>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Project directory to dump
    pub target_dir: PathBuf,

    /// Output file path
    pub output_file: PathBuf,

    /// Folder names to exclude (segment-exact match)
    pub exclude_folders: Vec<String>,

    /// Extensions to skip, dot-prefixed
    pub skip_extensions: Vec<String>,

    /// Folder substrings to include (if empty, include all)
    pub include_folders: Vec<String>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let output_file = match args.output_file {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(default_output_name(&args.directory_path)),
        };

        Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file,
            exclude_folders: merge_with_defaults(&args.exclude_folders, &DEFAULT_EXCLUDE_FOLDERS),
            skip_extensions: merge_with_defaults(&args.skip_extensions, &DEFAULT_SKIP_EXTENSIONS)
                .into_iter()
                .map(|ext| normalize_extension(&ext))
                .collect(),
            include_folders: args.include_folders,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.exists(),
            Config,
            "Project directory not found: {}",
            self.target_dir.display()
        );
        ensure!(
            self.target_dir.is_dir(),
            Config,
            "Not a directory: {}",
            self.target_dir.display()
        );

        // Check if output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent == Path::new("") || parent.exists(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}

/// Derive the default output file name from the project directory argument
///
/// Mirrors the directory's base name with a ".txt" suffix; falls back to
/// "project.txt" when no base name can be derived (e.g. "." or "/").
pub fn default_output_name(directory_path: &str) -> String {
    let trimmed = directory_path.trim_end_matches(['/', '\\']);
    match Path::new(trimmed).file_name() {
        Some(name) => format!("{}.txt", name.to_string_lossy()),
        None => "project.txt".to_string(),
    }
}

/// Resolve a user-supplied filter list against its defaults
///
/// An empty list yields the defaults. A list whose first entry carries a
/// leading '+' (a bare "+" or a "+name") yields the union of the defaults and
/// the user entries. Any other list replaces the defaults entirely.
pub fn merge_with_defaults(user: &[String], defaults: &[&str]) -> Vec<String> {
    let entries: Vec<&str> = user
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .collect();

    let Some(first) = entries.first() else {
        return defaults.iter().map(|s| s.to_string()).collect();
    };

    if let Some(stripped) = first.strip_prefix('+') {
        let mut merged: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
        let additions = std::iter::once(stripped)
            .chain(entries[1..].iter().copied())
            .filter(|entry| !entry.is_empty());
        for entry in additions {
            if !merged.iter().any(|existing| existing == entry) {
                merged.push(entry.to_string());
            }
        }
        merged
    } else {
        entries.into_iter().map(|s| s.to_string()).collect()
    }
}

/// Ensure an extension entry carries its leading dot
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{}", trimmed)
    }
}
