/*!
 * Directory traversal and dump loop
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::filter::{FilterDecision, Filters};
use crate::writer::TextWriter;

/// Counters accumulated over one dump run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Number of files visited by the traversal
    pub total_scanned: usize,
    /// Files skipped because a folder segment matched an excluded name
    pub skipped_by_folder: usize,
    /// Files skipped because their extension matched a skipped extension
    pub skipped_by_extension: usize,
    /// Files whose content was written to the output
    pub included: usize,
    /// Files that could not be read and were skipped with a warning
    pub errored: usize,
}

/// Walks the project directory and writes surviving files to the output
pub struct Dumper {
    /// Dumper configuration
    config: Config,
    /// Compiled filter sets
    filters: Filters,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Dumper {
    /// Create a new dumper
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        let filters = Filters::new(
            &config.exclude_folders,
            &config.skip_extensions,
            &config.include_folders,
        );
        Self {
            config,
            filters,
            progress,
        }
    }

    /// Dump the project directory into the configured output file
    ///
    /// Traverses in directory-tree order with entries sorted by file name,
    /// so repeated runs on an unchanged tree produce identical output. The
    /// output stream is opened once and flushed before returning; a failed
    /// file read skips that file, a failed output write aborts the run.
    pub fn dump(&self) -> Result<DumpSummary> {
        let mut writer = TextWriter::create(&self.config.output_file)?;
        // The file exists now, so its canonical path is resolvable
        let output_abs = fs::canonicalize(&self.config.output_file).ok();
        let mut summary = DumpSummary::default();

        let walker = WalkDir::new(&self.config.target_dir)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("Warning: failed to read directory entry: {}", e);
                    summary.errored += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            // Never dump our own output file
            if is_output_file(entry.path(), output_abs.as_deref()) {
                continue;
            }

            summary.total_scanned += 1;

            let rel_path = entry
                .path()
                .strip_prefix(&self.config.target_dir)
                .unwrap_or_else(|_| entry.path());

            self.progress.inc(1);
            self.progress
                .set_message(format!("Current file: {}", display_name(rel_path)));

            match self.filters.check(rel_path) {
                FilterDecision::SkipByFolder => summary.skipped_by_folder += 1,
                FilterDecision::SkipByExtension => summary.skipped_by_extension += 1,
                FilterDecision::SkipByInclusion => {}
                FilterDecision::Include => match fs::read_to_string(entry.path()) {
                    Ok(content) => {
                        writer.write_record(rel_path, &content)?;
                        summary.included += 1;
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: failed to read {}: {}",
                            entry.path().display(),
                            e
                        );
                        summary.errored += 1;
                    }
                },
            }
        }

        writer.finish()?;
        Ok(summary)
    }
}

/// True if the entry is the run's own output file
///
/// Compares canonical paths, so a project file that merely shares the
/// output's name is still dumped. The file-name check avoids a canonicalize
/// call for every entry.
fn is_output_file(path: &Path, output_abs: Option<&Path>) -> bool {
    match output_abs {
        Some(out) => {
            path.file_name() == out.file_name()
                && fs::canonicalize(path).map_or(false, |p| p.as_path() == out)
        }
        None => false,
    }
}

/// Relative path trimmed to a displayable length for the progress message
fn display_name(rel_path: &Path) -> String {
    let name = rel_path.display().to_string();
    let total = name.chars().count();
    if total <= 40 {
        return name;
    }
    // Cut on a char boundary; byte offsets can land inside a multibyte char
    let tail: String = name.chars().skip(total - 37).collect();
    format!("...{}", tail)
}
