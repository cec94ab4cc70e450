/*!
 * ProjDump - Concatenate a project's text files into one annotated snapshot
 *
 * This library walks a project directory, filters files by folder name and
 * extension, and appends each surviving file's content to a single text
 * output, prefixed with its path relative to the project root.
 */

pub mod config;
pub mod dumper;
pub mod error;
pub mod filter;
pub mod report;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use dumper::{DumpSummary, Dumper};
pub use error::{DumpError, Result};
pub use filter::{FilterDecision, Filters};
pub use report::{DumpReport, ReportFormat, Reporter};
pub use utils::count_files;
pub use writer::TextWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
