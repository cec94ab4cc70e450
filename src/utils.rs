/*!
 * Utility functions for ProjDump
 */

use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

/// Count total files for progress tracking
///
/// Counts every regular file under the directory, since the dump loop visits
/// (and tallies) every file before filtering.
pub fn count_files(dir: &Path) -> io::Result<u64> {
    let mut count = 0;

    for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() {
            count += 1;
        }
    }

    Ok(count)
}

/// Default folder names excluded from the dump
pub static DEFAULT_EXCLUDE_FOLDERS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".git",
        ".github",
        ".vs",
        "bin",
        "docs",
        "obj",
        "releases",
        "publish",
        "resources",
    ]
});

/// Default file extensions skipped by the dump
pub static DEFAULT_SKIP_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Binaries & build artifacts
        ".dll",
        ".exe",
        ".pdb",
        ".zip",
        // Images
        ".png",
        ".jpg",
        ".jpeg",
        ".gif",
        ".bmp",
        ".ico",
        ".svg",
        // Fonts
        ".ttf",
        ".otf",
        ".woff",
        ".woff2",
        // Media
        ".mp4",
        ".mp3",
        ".wav",
        // IDE & project noise
        ".user",
        ".pfx",
        ".resx",
    ]
});
